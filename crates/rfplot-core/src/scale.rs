//! Coordinate scaling
//!
//! Linear domain→range maps for the Cartesian axes, the fixed unit-disk
//! scale of the Smith chart, axis extents, ticks and the zero reference line.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{PlotError, Result};
use crate::math::Component;
use crate::path::line_path;
use crate::trace::Trace;

/// Linear map from `domain` to `range`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    /// Fails with [`PlotError::InvalidExtent`] when the domain is empty or not finite
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        let (d0, d1) = domain;
        if !(d0.is_finite() && d1.is_finite()) || d0 == d1 {
            return Err(PlotError::InvalidExtent { min: d0, max: d1 });
        }
        Ok(Self { domain, range })
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Map a range value back into the domain
    #[inline]
    pub fn invert(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (value - r0) / (r1 - r0) * (d1 - d0)
    }
}

/// Fixed scales of the Smith chart: the unit disk mapped onto a square of
/// side `size` with the disk centre at `(size / 2, size / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmithScale {
    /// Γ real part → screen x
    pub x: LinearScale,
    /// Γ imaginary part → screen y (inverted, screen y grows downward)
    pub y: LinearScale,
    /// |Γ| → screen radius
    pub radius: LinearScale,
    /// Mathematical angle → screen angle (mirrored)
    pub angle: LinearScale,
}

impl SmithScale {
    pub fn new(size: f64) -> Self {
        Self {
            x: LinearScale {
                domain: (-1.0, 1.0),
                range: (0.0, size),
            },
            y: LinearScale {
                domain: (-1.0, 1.0),
                range: (size, 0.0),
            },
            radius: LinearScale {
                domain: (0.0, 1.0),
                range: (0.0, size / 2.0),
            },
            angle: LinearScale {
                domain: (0.0, 2.0 * PI),
                range: (0.0, -2.0 * PI),
            },
        }
    }

    /// Screen position of a reflection coefficient via its polar form
    pub fn project_polar(&self, magnitude: f64, phase: f64) -> (f64, f64) {
        let r = self.radius.apply(magnitude);
        let a = self.angle.apply(phase);
        (self.x.apply(0.0) + r * a.cos(), self.y.apply(0.0) + r * a.sin())
    }

    /// Screen position of a point in the Γ plane
    pub fn project(&self, re: f64, im: f64) -> (f64, f64) {
        (self.x.apply(re), self.y.apply(im))
    }
}

/// The two scale kinds a plot can use
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CoordinateScaling {
    Cartesian { x: LinearScale, y: LinearScale },
    Smith(SmithScale),
}

impl CoordinateScaling {
    /// Map a data point to screen coordinates.
    ///
    /// Cartesian points are `(x, y)` data values, Smith points are `(Re Γ, Im Γ)`.
    pub fn project(&self, point: (f64, f64)) -> (f64, f64) {
        match self {
            CoordinateScaling::Cartesian { x, y } => (x.apply(point.0), y.apply(point.1)),
            CoordinateScaling::Smith(s) => s.project(point.0, point.1),
        }
    }

    /// Map a screen position back to data coordinates
    pub fn invert(&self, pixel: (f64, f64)) -> (f64, f64) {
        match self {
            CoordinateScaling::Cartesian { x, y } => (x.invert(pixel.0), y.invert(pixel.1)),
            CoordinateScaling::Smith(s) => (s.x.invert(pixel.0), s.y.invert(pixel.1)),
        }
    }

    /// The `(x, y)` axis scales of a Cartesian plot
    pub fn cartesian(&self) -> Option<(&LinearScale, &LinearScale)> {
        match self {
            CoordinateScaling::Cartesian { x, y } => Some((x, y)),
            CoordinateScaling::Smith(_) => None,
        }
    }

    pub fn smith(&self) -> Option<&SmithScale> {
        match self {
            CoordinateScaling::Smith(s) => Some(s),
            CoordinateScaling::Cartesian { .. } => None,
        }
    }
}

/// Linear Cartesian scale from data extent to pixel span
pub fn cartesian_scale(
    extent_min: f64,
    extent_max: f64,
    pixel_min: f64,
    pixel_max: f64,
) -> Result<LinearScale> {
    LinearScale::new((extent_min, extent_max), (pixel_min, pixel_max))
}

/// Optional explicit bounds replacing the auto extent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtentOverride {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Resolved `[min, max]` of both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    /// Frequency axis, in Hz
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Axis extent over `traces`.
///
/// The y extent is the min/max of the selected component over all traces,
/// the x extent the union of the traces' frequency ranges in Hz. Each
/// override bound replaces its auto bound independently. Returns `Ok(None)`
/// when there are no traces. Inverted or degenerate bounds fail with
/// [`PlotError::InvalidExtent`].
pub fn compute_axis_extent<'a, I>(
    traces: I,
    component: Component,
    x_override: ExtentOverride,
    y_override: ExtentOverride,
) -> Result<Option<AxisExtent>>
where
    I: IntoIterator<Item = &'a Trace>,
{
    let mut x: Option<(f64, f64)> = None;
    let mut y: Option<(f64, f64)> = None;

    for trace in traces {
        if let (Some(start), Some(stop)) = (trace.frequency.start_hz(), trace.frequency.stop_hz()) {
            x = Some(union(x, (start, stop)));
        }
        match trace.extent(component) {
            Some(e) => y = Some(union(y, e)),
            None if !trace.is_empty() => {
                warn!(
                    "Trace '{}' has no finite {} values; excluded from y extent",
                    trace.label, component
                );
            }
            None => {}
        }
    }

    let Some(x) = x else {
        return Ok(None);
    };
    // A trace with only non-finite values still contributes to x
    let y = y.unwrap_or((0.0, 0.0));

    let x = apply_override(x, x_override);
    let y = apply_override(y, y_override);
    debug!("Axis extent x={:?} y={:?} ({})", x, y, component);

    for (min, max) in [x, y] {
        if !(min < max) {
            return Err(PlotError::InvalidExtent { min, max });
        }
    }
    Ok(Some(AxisExtent { x, y }))
}

fn union(acc: Option<(f64, f64)>, e: (f64, f64)) -> (f64, f64) {
    match acc {
        Some((lo, hi)) => (lo.min(e.0), hi.max(e.1)),
        None => e,
    }
}

fn apply_override(auto: (f64, f64), o: ExtentOverride) -> (f64, f64) {
    (o.min.unwrap_or(auto.0), o.max.unwrap_or(auto.1))
}

/// One axis tick: the data value and its pixel offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub label: f64,
    pub offset: f64,
}

/// `count + 1` evenly spaced ticks from `min` to `max` inclusive.
///
/// A `count` of zero yields the single tick at `min`.
pub fn compute_ticks(min: f64, max: f64, count: usize, scale: &LinearScale) -> Vec<Tick> {
    if count == 0 {
        return vec![Tick {
            label: min,
            offset: scale.apply(min),
        }];
    }
    (0..=count)
        .map(|i| {
            // Pin the last label so it equals `max` exactly
            let label = if i == count {
                max
            } else {
                min + (max - min) * (i as f64 / count as f64)
            };
            Tick {
                label,
                offset: scale.apply(label),
            }
        })
        .collect()
}

/// Horizontal reference line at y = 0, spanning `width` pixels from x = 0.
///
/// Only produced when `min < 0 < max`.
pub fn zero_crossing_line(min: f64, max: f64, scale: &LinearScale, width: f64) -> Option<String> {
    if min < 0.0 && max > 0.0 {
        let y0 = scale.apply(0.0);
        Some(line_path((0.0, y0), (width, y0)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_scale_apply_invert() {
        let s = LinearScale::new((0.0, 10.0), (100.0, 0.0)).unwrap();
        assert_relative_eq!(s.apply(0.0), 100.0);
        assert_relative_eq!(s.apply(10.0), 0.0);
        assert_relative_eq!(s.apply(2.5), 75.0);
        assert_relative_eq!(s.invert(75.0), 2.5);
    }

    #[test]
    fn test_degenerate_extent() {
        assert_eq!(
            cartesian_scale(1.0, 1.0, 0.0, 100.0),
            Err(PlotError::InvalidExtent { min: 1.0, max: 1.0 })
        );
        assert!(cartesian_scale(f64::NEG_INFINITY, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_ticks() {
        let s = LinearScale::new((-10.0, 10.0), (0.0, 200.0)).unwrap();
        let ticks = compute_ticks(-10.0, 10.0, 4, &s);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].label, -10.0);
        assert_eq!(ticks[4].label, 10.0);
        assert_relative_eq!(ticks[2].label, 0.0);
        assert_relative_eq!(ticks[2].offset, 100.0);
    }

    #[test]
    fn test_zero_line() {
        let s = LinearScale::new((-1.0, 1.0), (100.0, 0.0)).unwrap();
        assert_eq!(zero_crossing_line(-1.0, 1.0, &s, 80.0).as_deref(), Some("M0,50L80,50"));
        assert!(zero_crossing_line(0.0, 1.0, &s, 80.0).is_none());
        assert!(zero_crossing_line(-2.0, -1.0, &s, 80.0).is_none());
    }

    #[test]
    fn test_smith_scale_is_fixed() {
        let s = SmithScale::new(400.0);
        assert_eq!(s.project(-1.0, 1.0), (0.0, 0.0));
        assert_eq!(s.project(1.0, -1.0), (400.0, 400.0));
        assert_eq!(s.project(0.0, 0.0), (200.0, 200.0));
    }

    #[test]
    fn test_smith_polar_matches_cartesian() {
        let s = SmithScale::new(2.0);
        // Γ = j sits at the top of the disk
        let (x, y) = s.project_polar(1.0, PI / 2.0);
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.0, epsilon = 1e-12);

        let (x, y) = s.project_polar(0.5, -PI / 4.0);
        let (ex, ey) = s.project(0.5 * (-PI / 4.0).cos(), 0.5 * (-PI / 4.0).sin());
        assert_relative_eq!(x, ex, epsilon = 1e-12);
        assert_relative_eq!(y, ey, epsilon = 1e-12);
    }

    #[test]
    fn test_coordinate_scaling_round_trip() {
        let scaling = CoordinateScaling::Cartesian {
            x: LinearScale::new((1e9, 2e9), (0.0, 100.0)).unwrap(),
            y: LinearScale::new((-20.0, 0.0), (50.0, 0.0)).unwrap(),
        };
        let p = scaling.project((1.5e9, -10.0));
        assert_relative_eq!(p.0, 50.0);
        assert_relative_eq!(p.1, 25.0);
        let back = scaling.invert(p);
        assert_relative_eq!(back.0, 1.5e9, epsilon = 1e-3);
        assert_relative_eq!(back.1, -10.0, epsilon = 1e-12);
    }
}
