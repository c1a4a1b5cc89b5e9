//! Numerical constants for plot geometry
//!
//! Provides standardized tolerance values, defaults and gridline sets
//! used throughout the library.

use std::f64::consts::PI;

/// Full turn in radians.
pub const TAU: f64 = 2.0 * PI;

/// Angular tolerance used when deciding whether an arc sweep is a full circle
/// or empty.
pub const ARC_EPSILON: f64 = 1e-6;

/// Tick count used when an axis does not request one.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Sentinel reactance used to close constant-resistance circles.
///
/// `±REACTANCE_LIMIT` stands in for the ±∞ reactance endpoints; complex
/// division is scaled so this does not overflow.
pub const REACTANCE_LIMIT: f64 = f64::MAX;

/// Sentinel resistance used as the open-circuit end of reactance arcs.
pub const RESISTANCE_LIMIT: f64 = f64::MAX;

/// Number of interpolated points emitted per sample interval on Smith curves.
pub const SMITH_CURVE_SUBDIVISIONS: usize = 8;

/// Normalized resistances of the standard Smith chart grid.
pub const DEFAULT_RESISTANCE_GRID: [f64; 6] = [0.0, 0.2, 0.5, 1.0, 2.0, 5.0];

/// Normalized reactances of the standard Smith chart grid (both signs are drawn).
pub const DEFAULT_REACTANCE_GRID: [f64; 5] = [0.2, 0.5, 1.0, 2.0, 5.0];

/// Characteristic impedance assumed when a file does not declare one.
pub const DEFAULT_Z0: f64 = 50.0;
