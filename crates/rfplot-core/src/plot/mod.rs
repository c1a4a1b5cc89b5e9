//! Plot descriptors
//!
//! Turns traces into renderer-agnostic descriptors: SVG path data for axes,
//! gridlines and curves, plus the scales and ticks used to draw them.
//! Nothing here is cached; every call recomputes from its inputs.

mod cartesian;
mod smith;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

pub use cartesian::{build_cartesian_plot, AxisSettings, CartesianPlot, Insets};
pub use smith::{arc_path, build_smith_plot, SmithPlot, SmithSettings};

/// Pixel size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPort {
    pub width: f64,
    pub height: f64,
}

impl ViewPort {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite() {
            Ok(())
        } else {
            Err(PlotError::InvalidViewPort {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One rendered trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracePath {
    pub label: String,
    pub color: Option<String>,
    /// SVG path data in pixel coordinates
    pub path: String,
    /// Data-space points the path was built from: `(Hz, value)` on Cartesian
    /// plots, `(Re Γ, Im Γ)` on Smith charts
    pub points: Vec<(f64, f64)>,
}

/// Split `points` into maximal runs where both coordinates are finite
pub(crate) fn finite_runs(points: &[(f64, f64)]) -> impl Iterator<Item = &[(f64, f64)]> {
    points
        .split(|(x, y)| !(x.is_finite() && y.is_finite()))
        .filter(|run| !run.is_empty())
}
