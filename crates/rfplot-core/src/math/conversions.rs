//! Scalar views of complex samples
//!
//! Provides the conversions used to derive plottable series
//! (magnitude, dB, phase, real/imaginary) from complex samples.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::PlotError;

/// Scalar component of a complex sample selected for the Cartesian y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Component {
    #[default]
    Real,
    Imaginary,
    Magnitude,
    Db,
    PhaseRad,
    PhaseDeg,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::Real,
        Component::Imaginary,
        Component::Magnitude,
        Component::Db,
        Component::PhaseRad,
        Component::PhaseDeg,
    ];

    /// Evaluate this component for one sample
    #[inline]
    pub fn of(self, z: Complex64) -> f64 {
        match self {
            Component::Real => z.re,
            Component::Imaginary => z.im,
            Component::Magnitude => complex_2_magnitude(z),
            Component::Db => complex_2_db(z),
            Component::PhaseRad => complex_2_radian(z),
            Component::PhaseDeg => complex_2_degree(z),
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Component {
    type Err = PlotError;

    /// Accepts the short series keys used by the front end (`"sRe"`, `"sDb"`, ...)
    /// as well as the variant names.
    fn from_str(s: &str) -> Result<Self, PlotError> {
        match s.to_lowercase().as_str() {
            "sre" | "real" | "re" => Ok(Component::Real),
            "sim" | "imaginary" | "im" => Ok(Component::Imaginary),
            "smag" | "magnitude" | "mag" => Ok(Component::Magnitude),
            "sdb" | "db" => Ok(Component::Db),
            "sangle" | "phaserad" | "rad" => Ok(Component::PhaseRad),
            "sdeg" | "phasedeg" | "deg" => Ok(Component::PhaseDeg),
            _ => Err(PlotError::InvalidComponent(s.to_string())),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Component::Real => "Re",
            Component::Imaginary => "Im",
            Component::Magnitude => "|S|",
            Component::Db => "dB",
            Component::PhaseRad => "rad",
            Component::PhaseDeg => "deg",
        };
        f.write_str(label)
    }
}

/// Convert complex number to magnitude
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert complex number to dB (20*log10(|z|))
pub fn complex_2_db(z: Complex64) -> f64 {
    magnitude_2_db(z.norm())
}

/// Convert complex number to phase in radians
pub fn complex_2_radian(z: Complex64) -> f64 {
    z.arg()
}

/// Convert complex number to phase in degrees
pub fn complex_2_degree(z: Complex64) -> f64 {
    radian_2_degree(z.arg())
}

/// Convert magnitude to dB (20*log10(mag))
pub fn magnitude_2_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Convert radians to degrees
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}
