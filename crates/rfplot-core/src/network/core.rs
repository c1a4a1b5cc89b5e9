//! Core Network struct and constructors

use ndarray::{Array1, Array3};
use num_complex::Complex64;

use crate::constants::DEFAULT_Z0;
use crate::error::{PlotError, Result};
use crate::frequency::Frequency;

/// An N-port electrical network
#[derive(Debug, Clone)]
pub struct Network {
    /// Frequency data
    pub frequency: Frequency,
    /// S-parameter data [nfreq, nports, nports]
    pub s: Array3<Complex64>,
    /// Reference impedance (per port)
    pub z0: Array1<Complex64>,
    /// Network name, usually the file name
    pub name: Option<String>,
}

impl Network {
    /// Create a new Network from S-parameters
    pub fn new(frequency: Frequency, s: Array3<Complex64>, z0: Array1<Complex64>) -> Self {
        Self {
            frequency,
            s,
            z0,
            name: None,
        }
    }

    /// Create with every port referenced to the default 50 Ω
    pub fn with_default_z0(frequency: Frequency, s: Array3<Complex64>) -> Self {
        let nports = s.shape()[1];
        let z0 = Array1::from_elem(nports, Complex64::new(DEFAULT_Z0, 0.0));
        Self::new(frequency, s, z0)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the number of ports
    #[inline]
    pub fn nports(&self) -> usize {
        self.s.shape()[1]
    }

    /// Get the number of frequency points
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.s.shape()[0]
    }

    /// Check the fields agree with each other.
    ///
    /// The fields are public, so this runs before every extraction rather
    /// than once at construction.
    pub fn validate(&self) -> Result<()> {
        let shape = self.s.shape();
        if shape[1] != shape[2] {
            return Err(PlotError::LengthMismatch {
                expected: shape[1],
                found: shape[2],
            });
        }
        if self.frequency.npoints() != self.nfreq() {
            return Err(PlotError::LengthMismatch {
                expected: self.frequency.npoints(),
                found: self.nfreq(),
            });
        }
        if self.z0.len() != self.nports() {
            return Err(PlotError::LengthMismatch {
                expected: self.nports(),
                found: self.z0.len(),
            });
        }
        Ok(())
    }

    /// Name used in logs and failure reports
    pub(crate) fn display_name(&self, position: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("network #{}", position + 1))
    }
}
