//! Plottable traces
//!
//! A trace pairs a frequency vector with one complex sample per frequency
//! and carries the derived scalar series used for Cartesian plots.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};
use crate::frequency::Frequency;
use crate::math::Component;

/// One S-parameter trace, e.g. S21 of one file
///
/// Serializes without the derived series; deserializing rebuilds them
/// through [`Trace::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TraceRecord", into = "TraceRecord")]
pub struct Trace {
    /// Display label, e.g. `"S21"`
    pub label: String,
    pub frequency: Frequency,
    samples: Vec<Complex64>,
    /// Derived series indexed by [`Component`]
    series: [Vec<f64>; 6],
    /// Finite min/max of each derived series
    extents: [Option<(f64, f64)>; 6],
    /// Assigned color, if any
    pub color: Option<String>,
}

/// Wire form of [`Trace`]
#[derive(Serialize, Deserialize)]
struct TraceRecord {
    label: String,
    frequency: Frequency,
    samples: Vec<Complex64>,
    #[serde(default)]
    color: Option<String>,
}

impl TryFrom<TraceRecord> for Trace {
    type Error = PlotError;

    fn try_from(record: TraceRecord) -> Result<Self> {
        let trace = Self::new(record.label, record.frequency, record.samples)?;
        Ok(Self {
            color: record.color,
            ..trace
        })
    }
}

impl From<Trace> for TraceRecord {
    fn from(trace: Trace) -> Self {
        Self {
            label: trace.label,
            frequency: trace.frequency,
            samples: trace.samples,
            color: trace.color,
        }
    }
}

impl Trace {
    /// Build a trace, deriving every component series once.
    ///
    /// Fails with [`PlotError::LengthMismatch`] unless there is exactly one
    /// sample per frequency.
    pub fn new(label: impl Into<String>, frequency: Frequency, samples: Vec<Complex64>) -> Result<Self> {
        if frequency.npoints() != samples.len() {
            return Err(PlotError::LengthMismatch {
                expected: frequency.npoints(),
                found: samples.len(),
            });
        }

        let series = Component::ALL.map(|c| samples.iter().map(|&z| c.of(z)).collect::<Vec<_>>());
        let extents = std::array::from_fn(|i| finite_extent(&series[i]));

        Ok(Self {
            label: label.into(),
            frequency,
            samples,
            series,
            extents,
            color: None,
        })
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    /// Derived series for `component`
    #[inline]
    pub fn component(&self, component: Component) -> &[f64] {
        &self.series[component.index()]
    }

    /// Min/max of the finite values of `component`
    #[inline]
    pub fn extent(&self, component: Component) -> Option<(f64, f64)> {
        self.extents[component.index()]
    }

    pub fn real(&self) -> &[f64] {
        self.component(Component::Real)
    }

    pub fn imag(&self) -> &[f64] {
        self.component(Component::Imaginary)
    }
}

fn finite_extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            None => Some((v, v)),
        })
}
