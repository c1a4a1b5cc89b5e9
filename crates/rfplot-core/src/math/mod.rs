//! Mathematical functions module
//!
//! Complex-plane transforms, scalar conversions and interpolation.

pub mod complex;
pub mod conversions;
pub mod interpolation;

pub use complex::*;
pub use conversions::*;
pub use interpolation::{monotone_tangents, CubicSegment, MonotoneCubic};
