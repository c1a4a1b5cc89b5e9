//! Smith chart geometry
//!
//! Constant-resistance and constant-reactance circles and the standard
//! gridline set built from them.

mod arcs;
mod grid;

pub use arcs::{
    constant_reactance_arc, constant_resistance_arc, normalize_angle, ArcDescriptor, ReactanceArc,
    Winding,
};
pub use grid::SmithGrid;
