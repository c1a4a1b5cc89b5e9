//! Constant-resistance and constant-reactance arcs
//!
//! Circle geometry in the Γ plane derived from the load → Γ transform.
//! Angles are measured from the circle centre in the mathematical
//! orientation and normalized into `[0, 2π)`.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::constants::{REACTANCE_LIMIT, RESISTANCE_LIMIT, TAU};
use crate::error::{PlotError, Result};
use crate::math::load_to_gamma;

/// Sweep direction from start to end angle, in the mirrored angle space the
/// chart is drawn in (angle increasing clockwise on screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    pub fn reversed(self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }
}

/// A circular arc in the unit Smith disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcDescriptor {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// In `[0, 2π)`
    pub start_angle: f64,
    /// In `[0, 2π)`
    pub end_angle: f64,
    pub winding: Winding,
    /// The endpoints span the whole ±∞ parameter range, so the arc closes on itself
    pub full_circle: bool,
}

/// Reactance gridline: an arc, or the real-axis diameter for `x = 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReactanceArc {
    Arc(ArcDescriptor),
    Diameter { from: (f64, f64), to: (f64, f64) },
}

/// Wrap an angle from `atan2` into `[0, 2π)`
pub fn normalize_angle(angle: f64) -> f64 {
    let a = if angle < 0.0 { angle + TAU } else { angle };
    // -ε + 2π rounds to exactly 2π
    if a >= TAU {
        a - TAU
    } else {
        a
    }
}

fn is_unbounded(v: f64, limit: f64) -> bool {
    v.is_infinite() || v.abs() >= limit
}

fn clamp_to_limit(v: f64, limit: f64) -> f64 {
    v.clamp(-limit, limit)
}

fn angle_about(center: Complex64, z_normalized: Complex64) -> Result<f64> {
    let gamma = load_to_gamma(z_normalized)?;
    Ok(normalize_angle((gamma - center).arg()))
}

/// Arc of the constant-resistance circle `r_l` between reactances `x_l1` and `x_l2`.
///
/// Centre `(r/(1+r), 0)`, radius `1/(1+r)`. Passing `±f64::MAX` (or ±∞) as the
/// endpoints yields the full circle; `r_l = 0` is the unit circle.
pub fn constant_resistance_arc(r_l: f64, x_l1: f64, x_l2: f64) -> Result<ArcDescriptor> {
    if r_l < 0.0 || r_l.is_nan() {
        return Err(PlotError::NegativeResistance(r_l));
    }
    // Γ angle about the centre decreases as reactance increases
    let winding = if x_l1 > x_l2 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    };
    if r_l.is_infinite() {
        // Circle collapses onto the open-circuit point Γ = 1
        return Ok(ArcDescriptor {
            cx: 1.0,
            cy: 0.0,
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 0.0,
            winding,
            full_circle: false,
        });
    }

    let (cx, radius) = (r_l / (1.0 + r_l), 1.0 / (1.0 + r_l));
    let center = Complex64::new(cx, 0.0);

    let start_angle = angle_about(center, Complex64::new(r_l, clamp_to_limit(x_l1, REACTANCE_LIMIT)))?;
    let end_angle = angle_about(center, Complex64::new(r_l, clamp_to_limit(x_l2, REACTANCE_LIMIT)))?;

    let full_circle = is_unbounded(x_l1, REACTANCE_LIMIT)
        && is_unbounded(x_l2, REACTANCE_LIMIT)
        && x_l1.signum() != x_l2.signum();

    Ok(ArcDescriptor {
        cx,
        cy: 0.0,
        radius,
        start_angle,
        end_angle,
        winding,
        full_circle,
    })
}

/// Arc of the constant-reactance circle `x_l` between resistances `r_l1` and `r_l2`.
///
/// Centre `(1, 1/x)`, radius `|1/x|`. Clockwise for `x > 0` and
/// counter-clockwise for `x < 0` when `r_l1 <= r_l2`; swapping the endpoints
/// reverses the winding. `x_l = 0` is the real-axis diameter.
pub fn constant_reactance_arc(x_l: f64, r_l1: f64, r_l2: f64) -> Result<ReactanceArc> {
    for r in [r_l1, r_l2] {
        if r < 0.0 || r.is_nan() {
            return Err(PlotError::NegativeResistance(r));
        }
    }
    if x_l.is_nan() {
        return Err(PlotError::InvalidReactance(x_l));
    }
    if x_l == 0.0 {
        return Ok(ReactanceArc::Diameter {
            from: (-1.0, 0.0),
            to: (1.0, 0.0),
        });
    }

    let x = clamp_to_limit(x_l, REACTANCE_LIMIT);
    let (cy, radius) = (1.0 / x, (1.0 / x).abs());
    let center = Complex64::new(1.0, cy);

    let start_angle = angle_about(center, Complex64::new(clamp_to_limit(r_l1, RESISTANCE_LIMIT), x))?;
    let end_angle = angle_about(center, Complex64::new(clamp_to_limit(r_l2, RESISTANCE_LIMIT), x))?;

    let winding = if x_l > 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    };
    let winding = if r_l1 > r_l2 { winding.reversed() } else { winding };

    Ok(ReactanceArc::Arc(ArcDescriptor {
        cx: 1.0,
        cy,
        radius,
        start_angle,
        end_angle,
        winding,
        full_circle: false,
    }))
}
