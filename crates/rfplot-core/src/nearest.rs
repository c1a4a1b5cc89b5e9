//! Nearest-point lookup for pointer hover
//!
//! Sorted frequency arrays are bisected; complex samples have no single
//! sort key and are scanned linearly.

use log::trace;

use crate::error::{PlotError, Result};
use crate::frequency::{normalize_frequency, FrequencyUnit};

/// Index of the frequency closest to `query` in an ascending array.
///
/// Queries below the first sample give 0, above the last give the last index;
/// a query equidistant from two samples gives the lower index. `None` for an
/// empty array.
pub fn nearest_frequency_index(query: f64, frequencies: &[f64]) -> Option<usize> {
    let n = frequencies.len();
    if n == 0 {
        return None;
    }
    // First index with frequencies[i] >= query
    let i = frequencies.partition_point(|&f| f < query);
    let index = match i {
        0 => 0,
        i if i >= n => n - 1,
        i => {
            let below = query - frequencies[i - 1];
            let above = frequencies[i] - query;
            if above < below {
                i
            } else {
                i - 1
            }
        }
    };
    trace!("nearest frequency to {} -> index {}", query, index);
    Some(index)
}

/// [`nearest_frequency_index`] for a query in Hz against frequencies stored in `unit`
pub fn nearest_frequency_index_hz(query_hz: f64, frequencies: &[f64], unit: FrequencyUnit) -> Option<usize> {
    nearest_frequency_index(normalize_frequency(query_hz, FrequencyUnit::Hz, unit), frequencies)
}

/// Index of the sample in the parallel `re`/`im` arrays closest to `(query_re, query_im)`.
///
/// Ties go to the lowest index. `Ok(None)` for empty input; arrays of
/// different lengths fail with [`PlotError::LengthMismatch`].
pub fn nearest_complex_index(query_re: f64, query_im: f64, re: &[f64], im: &[f64]) -> Result<Option<usize>> {
    if re.len() != im.len() {
        return Err(PlotError::LengthMismatch {
            expected: re.len(),
            found: im.len(),
        });
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, (&x, &y)) in re.iter().zip(im).enumerate() {
        // Squared distance preserves the ordering
        let d = (x - query_re).powi(2) + (y - query_im).powi(2);
        if d.is_nan() {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    let index = best.map(|(i, _)| i);
    trace!("nearest sample to ({}, {}) -> {:?}", query_re, query_im, index);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREQS: [f64; 5] = [1.0, 2.0, 4.0, 8.0, 16.0];

    #[test]
    fn test_below_and_above_range() {
        assert_eq!(nearest_frequency_index(-5.0, &FREQS), Some(0));
        assert_eq!(nearest_frequency_index(100.0, &FREQS), Some(4));
    }

    #[test]
    fn test_exact_hits() {
        for (i, &f) in FREQS.iter().enumerate() {
            assert_eq!(nearest_frequency_index(f, &FREQS), Some(i));
        }
    }

    #[test]
    fn test_closer_neighbour_wins() {
        assert_eq!(nearest_frequency_index(2.9, &FREQS), Some(1));
        assert_eq!(nearest_frequency_index(3.1, &FREQS), Some(2));
    }

    #[test]
    fn test_midpoint_goes_low() {
        assert_eq!(nearest_frequency_index(3.0, &FREQS), Some(1));
        assert_eq!(nearest_frequency_index(12.0, &FREQS), Some(3));
    }

    #[test]
    fn test_empty() {
        assert_eq!(nearest_frequency_index(1.0, &[]), None);
        assert_eq!(nearest_complex_index(0.0, 0.0, &[], &[]), Ok(None));
    }

    #[test]
    fn test_query_in_hz() {
        let ghz = [1.0, 2.0, 3.0];
        assert_eq!(nearest_frequency_index_hz(2.2e9, &ghz, FrequencyUnit::GHz), Some(1));
    }

    #[test]
    fn test_complex_nearest() {
        let re = [0.0, 1.0, 0.0, -1.0];
        let im = [1.0, 0.0, -1.0, 0.0];
        assert_eq!(nearest_complex_index(0.9, 0.2, &re, &im), Ok(Some(1)));
        assert_eq!(nearest_complex_index(-0.1, -0.8, &re, &im), Ok(Some(2)));
    }

    #[test]
    fn test_complex_tie_goes_to_lowest_index() {
        let re = [1.0, -1.0, 1.0];
        let im = [0.0, 0.0, 0.0];
        assert_eq!(nearest_complex_index(0.0, 0.0, &re, &im), Ok(Some(0)));
    }

    #[test]
    fn test_complex_length_mismatch() {
        assert!(nearest_complex_index(0.0, 0.0, &[0.0], &[]).is_err());
    }
}
