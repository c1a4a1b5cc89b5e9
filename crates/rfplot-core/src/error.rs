//! Error types for plot computations

use thiserror::Error;

/// Errors raised by the plotting math
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("Invalid frequency unit: {0}. Use 'Hz', 'kHz', 'MHz', 'GHz', 'THz' or 'PHz'")]
    InvalidUnit(String),

    #[error("Unknown plot component: {0}")]
    InvalidComponent(String),

    #[error("Singular transform: {transform} is undefined at {re}{im:+}j")]
    SingularTransform {
        transform: &'static str,
        re: f64,
        im: f64,
    },

    #[error("Normalized resistance must be non-negative, got {0}")]
    NegativeResistance(f64),

    #[error("Normalized reactance must be a number, got {0}")]
    InvalidReactance(f64),

    #[error("Invalid axis extent: [{min}, {max}]")]
    InvalidExtent { min: f64, max: f64 },

    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewPort { width: f64, height: f64 },

    #[error("Length mismatch: expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Frequencies must be strictly ascending (violated at index {index})")]
    UnorderedFrequency { index: usize },

    #[error("Color palette is empty")]
    EmptyPalette,

    #[error("Port {port} out of range for a {nports}-port network")]
    InvalidPort { port: usize, nports: usize },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PlotError>;
