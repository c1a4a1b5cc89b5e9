//! Monotone cubic interpolation
//!
//! Piecewise cubic Hermite interpolation with Steffen tangents: between any
//! two consecutive samples the curve stays within the range of those two
//! samples, so no spurious local extrema are introduced.

use crate::error::{PlotError, Result};

/// One Hermite segment between two samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// dy/dx at the start
    pub t0: f64,
    /// dy/dx at the end
    pub t1: f64,
}

impl CubicSegment {
    /// Bezier control points equivalent to this segment
    pub fn bezier_controls(&self) -> [(f64, f64); 2] {
        let dx = (self.x1 - self.x0) / 3.0;
        [
            (self.x0 + dx, self.y0 + dx * self.t0),
            (self.x1 - dx, self.y1 - dx * self.t1),
        ]
    }

    /// Evaluate at `u` in `[0, 1]` along the segment
    pub fn eval(&self, u: f64) -> (f64, f64) {
        let h = self.x1 - self.x0;
        let u2 = u * u;
        let u3 = u2 * u;
        let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
        let h10 = u3 - 2.0 * u2 + u;
        let h01 = -2.0 * u3 + 3.0 * u2;
        let h11 = u3 - u2;
        let y = h00 * self.y0 + h10 * h * self.t0 + h01 * self.y1 + h11 * h * self.t1;
        (self.x0 + u * h, y)
    }
}

/// Monotone cubic interpolant through `(x, y)` samples ordered by ascending `x`
#[derive(Debug, Clone)]
pub struct MonotoneCubic {
    xs: Vec<f64>,
    ys: Vec<f64>,
    tangents: Vec<f64>,
}

impl MonotoneCubic {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch {
                expected: xs.len(),
                found: ys.len(),
            });
        }
        let tangents = monotone_tangents(&xs, &ys);
        Ok(Self { xs, ys, tangents })
    }

    /// Interpolant over the sample index, i.e. `x = 0, 1, 2, ...`
    pub fn over_index(ys: Vec<f64>) -> Self {
        let xs = (0..ys.len()).map(|i| i as f64).collect::<Vec<_>>();
        let tangents = monotone_tangents(&xs, &ys);
        Self { xs, ys, tangents }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn tangents(&self) -> &[f64] {
        &self.tangents
    }

    /// Segments between consecutive samples
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        (1..self.xs.len()).map(move |i| CubicSegment {
            x0: self.xs[i - 1],
            y0: self.ys[i - 1],
            x1: self.xs[i],
            y1: self.ys[i],
            t0: self.tangents[i - 1],
            t1: self.tangents[i],
        })
    }

    /// Dense samples: the first point, then `per_segment` points per segment
    /// ending exactly on each sample.
    pub fn sample(&self, per_segment: usize) -> Vec<(f64, f64)> {
        let per_segment = per_segment.max(1);
        let mut out = Vec::with_capacity(1 + self.len().saturating_sub(1) * per_segment);
        if let (Some(&x), Some(&y)) = (self.xs.first(), self.ys.first()) {
            out.push((x, y));
        }
        for seg in self.segments() {
            for k in 1..per_segment {
                out.push(seg.eval(k as f64 / per_segment as f64));
            }
            out.push((seg.x1, seg.y1));
        }
        out
    }
}

fn secant(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let h = x1 - x0;
    if h == 0.0 {
        0.0
    } else {
        (y1 - y0) / h
    }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Steffen tangents at interior samples, one-sided quadratic tangents at the ends
pub fn monotone_tangents(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len().min(ys.len());
    match n {
        0 => return Vec::new(),
        1 => return vec![0.0],
        2 => {
            let s = secant(xs[0], ys[0], xs[1], ys[1]);
            return vec![s, s];
        }
        _ => {}
    }

    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = xs[i] - xs[i - 1];
        let h1 = xs[i + 1] - xs[i];
        let s0 = secant(xs[i - 1], ys[i - 1], xs[i], ys[i]);
        let s1 = secant(xs[i], ys[i], xs[i + 1], ys[i + 1]);
        let p = if h0 + h1 == 0.0 {
            0.0
        } else {
            (s0 * h1 + s1 * h0) / (h0 + h1)
        };
        let v = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        t[i] = if v.is_finite() { v } else { 0.0 };
    }

    let end_tangent = |x0: f64, y0: f64, x1: f64, y1: f64, inner: f64| {
        if x1 == x0 {
            inner
        } else {
            (3.0 * (y1 - y0) / (x1 - x0) - inner) / 2.0
        }
    };
    t[0] = end_tangent(xs[0], ys[0], xs[1], ys[1], t[1]);
    t[n - 1] = end_tangent(xs[n - 2], ys[n - 2], xs[n - 1], ys[n - 1], t[n - 2]);
    t
}
