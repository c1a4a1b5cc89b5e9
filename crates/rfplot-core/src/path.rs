//! SVG path data builder
//!
//! Accumulates move/line/curve/arc commands into an SVG path `d` string.
//! Arc semantics follow the canvas `arc(x, y, r, a0, a1, anticlockwise)`
//! call: angles in radians measured from +x towards +y (screen y points
//! down), a line is drawn from the current point to the arc start, and
//! sweeps of a full turn or more are emitted as a full circle.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::constants::{ARC_EPSILON, TAU};

/// Incremental SVG path builder
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    data: String,
    /// Start of the current subpath
    start: Option<(f64, f64)>,
    /// Current point
    current: Option<(f64, f64)>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.start = Some((x, y));
        self.current = Some((x, y));
        let _ = write!(self.data, "M{},{}", x, y);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.current = Some((x, y));
        let _ = write!(self.data, "L{},{}", x, y);
        self
    }

    pub fn bezier_curve_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.current = Some((x, y));
        let _ = write!(self.data, "C{},{},{},{},{},{}", x1, y1, x2, y2, x, y);
        self
    }

    pub fn close_path(&mut self) -> &mut Self {
        if self.current.is_some() {
            self.current = self.start;
            self.data.push('Z');
        }
        self
    }

    /// Circular arc centred on `(x, y)` with radius `r` from angle `a0` to `a1`.
    ///
    /// Negative radii are clamped to zero.
    pub fn arc(&mut self, x: f64, y: f64, r: f64, a0: f64, a1: f64, anticlockwise: bool) -> &mut Self {
        let r = r.max(0.0);
        let dx = r * a0.cos();
        let dy = r * a0.sin();
        let x0 = x + dx;
        let y0 = y + dy;
        let sweep = if anticlockwise { 0 } else { 1 };
        let mut da = if anticlockwise { a0 - a1 } else { a1 - a0 };

        match self.current {
            None => {
                self.move_to(x0, y0);
            }
            Some((cx, cy)) if (cx - x0).abs() > ARC_EPSILON || (cy - y0).abs() > ARC_EPSILON => {
                self.line_to(x0, y0);
            }
            Some(_) => {}
        }

        if r == 0.0 {
            return self;
        }

        if da < 0.0 {
            da = da % TAU + TAU;
        }

        if da > TAU - ARC_EPSILON {
            // Two half arcs; a single SVG arc cannot end where it starts
            let _ = write!(
                self.data,
                "A{},{},0,1,{},{},{}A{},{},0,1,{},{},{}",
                r,
                r,
                sweep,
                x - dx,
                y - dy,
                r,
                r,
                sweep,
                x0,
                y0
            );
            self.current = Some((x0, y0));
        } else if da > ARC_EPSILON {
            let x1 = x + r * a1.cos();
            let y1 = y + r * a1.sin();
            let large = if da >= PI { 1 } else { 0 };
            let _ = write!(self.data, "A{},{},0,{},{},{},{}", r, r, large, sweep, x1, y1);
            self.current = Some((x1, y1));
        }
        self
    }

    /// Finished path data
    pub fn build(self) -> String {
        self.data
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }
}

/// Straight segment between two points
pub fn line_path(from: (f64, f64), to: (f64, f64)) -> String {
    let mut path = PathBuilder::new();
    path.move_to(from.0, from.1).line_to(to.0, to.1);
    path.build()
}
