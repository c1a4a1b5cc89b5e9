//! Frequency module - units and frequency vectors
//!
//! Provides the unit multiplier table, unit conversion and a validated
//! frequency vector type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

/// Frequency unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrequencyUnit {
    #[default]
    Hz,
    KHz,
    MHz,
    GHz,
    THz,
    PHz,
}

impl FrequencyUnit {
    /// All units, smallest first
    pub const ALL: [FrequencyUnit; 6] = [
        FrequencyUnit::Hz,
        FrequencyUnit::KHz,
        FrequencyUnit::MHz,
        FrequencyUnit::GHz,
        FrequencyUnit::THz,
        FrequencyUnit::PHz,
    ];

    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
            FrequencyUnit::THz => 1e12,
            FrequencyUnit::PHz => 1e15,
        }
    }

    /// Display symbol, e.g. `"GHz"`
    pub fn symbol(&self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
            FrequencyUnit::THz => "THz",
            FrequencyUnit::PHz => "PHz",
        }
    }
}

impl FromStr for FrequencyUnit {
    type Err = PlotError;

    /// Parse from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hz" => Ok(FrequencyUnit::Hz),
            "khz" => Ok(FrequencyUnit::KHz),
            "mhz" => Ok(FrequencyUnit::MHz),
            "ghz" => Ok(FrequencyUnit::GHz),
            "thz" => Ok(FrequencyUnit::THz),
            "phz" => Ok(FrequencyUnit::PHz),
            _ => Err(PlotError::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert `value` expressed in `from` into `to`.
///
/// Exact multiplication by the fixed unit multipliers.
///
/// # Example
/// ```
/// use rfplot_core::frequency::{normalize_frequency, FrequencyUnit};
/// assert_eq!(normalize_frequency(5.0, FrequencyUnit::KHz, FrequencyUnit::Hz), 5000.0);
/// ```
#[inline]
pub fn normalize_frequency(value: f64, from: FrequencyUnit, to: FrequencyUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.multiplier() / to.multiplier()
}

/// Like [`normalize_frequency`] but with unit symbols, failing with
/// [`PlotError::InvalidUnit`] on an unrecognized symbol.
pub fn normalize_frequency_str(value: f64, from: &str, to: &str) -> Result<f64> {
    let from: FrequencyUnit = from.parse()?;
    let to: FrequencyUnit = to.parse()?;
    Ok(normalize_frequency(value, from, to))
}

/// Element-wise [`normalize_frequency`], preserving order and length
pub fn normalize_frequencies(values: &[f64], from: FrequencyUnit, to: FrequencyUnit) -> Vec<f64> {
    values
        .iter()
        .map(|&v| normalize_frequency(v, from, to))
        .collect()
}

/// A strictly ascending frequency vector in a single unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrequencyRecord")]
pub struct Frequency {
    /// Frequency values in `unit`
    f: Vec<f64>,
    /// Unit the values are expressed in
    unit: FrequencyUnit,
}

/// Unvalidated wire form of [`Frequency`]
#[derive(Deserialize)]
struct FrequencyRecord {
    f: Vec<f64>,
    unit: FrequencyUnit,
}

impl TryFrom<FrequencyRecord> for Frequency {
    type Error = PlotError;

    fn try_from(record: FrequencyRecord) -> Result<Self> {
        Self::from_f(record.f, record.unit)
    }
}

impl Frequency {
    /// Create from a frequency vector, validating strict ascending order
    pub fn from_f(f: Vec<f64>, unit: FrequencyUnit) -> Result<Self> {
        // NaN compares false and is rejected with its neighbour
        if let Some(index) = f.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(PlotError::UnorderedFrequency { index: index + 1 });
        }
        Ok(Self { f, unit })
    }

    /// Linearly spaced band from `start` to `stop` (inclusive), in `unit`
    ///
    /// # Example
    /// ```
    /// use rfplot_core::frequency::{Frequency, FrequencyUnit};
    /// let freq = Frequency::linear(1.0, 10.0, 10, FrequencyUnit::GHz).unwrap();
    /// assert_eq!(freq.npoints(), 10);
    /// ```
    pub fn linear(start: f64, stop: f64, npoints: usize, unit: FrequencyUnit) -> Result<Self> {
        let f = match npoints {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (npoints - 1) as f64;
                (0..npoints).map(|i| start + i as f64 * step).collect()
            }
        };
        Self::from_f(f, unit)
    }

    /// Frequency values in the native unit
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Frequency values converted to Hz
    pub fn to_hz(&self) -> Vec<f64> {
        normalize_frequencies(&self.f, self.unit, FrequencyUnit::Hz)
    }

    /// Number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }

    #[inline]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// First frequency in Hz
    pub fn start_hz(&self) -> Option<f64> {
        self.f.first().map(|&v| v * self.unit.multiplier())
    }

    /// Last frequency in Hz
    pub fn stop_hz(&self) -> Option<f64> {
        self.f.last().map(|&v| v * self.unit.multiplier())
    }
}
