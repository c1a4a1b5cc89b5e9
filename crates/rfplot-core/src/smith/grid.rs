//! Smith chart gridlines

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_REACTANCE_GRID, DEFAULT_RESISTANCE_GRID, REACTANCE_LIMIT, RESISTANCE_LIMIT,
};
use crate::error::Result;

use super::arcs::{constant_reactance_arc, constant_resistance_arc, ArcDescriptor, ReactanceArc};

/// Gridline geometry of a Smith chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmithGrid {
    /// Full constant-resistance circles
    pub resistance: Vec<ArcDescriptor>,
    /// Constant-reactance arcs from r = 0 to r = ∞
    pub reactance: Vec<ReactanceArc>,
}

impl SmithGrid {
    /// Grid for the given resistances and reactances.
    ///
    /// Each reactance is drawn with both signs; a zero reactance becomes the
    /// real-axis diameter and is emitted once.
    pub fn new(resistances: &[f64], reactances: &[f64]) -> Result<Self> {
        let resistance = resistances
            .iter()
            .map(|&r| constant_resistance_arc(r, REACTANCE_LIMIT, -REACTANCE_LIMIT))
            .collect::<Result<Vec<_>>>()?;

        let mut reactance = Vec::with_capacity(reactances.len() * 2);
        for &x in reactances {
            if x == 0.0 {
                reactance.push(constant_reactance_arc(0.0, 0.0, RESISTANCE_LIMIT)?);
                continue;
            }
            let x = x.abs();
            reactance.push(constant_reactance_arc(x, 0.0, RESISTANCE_LIMIT)?);
            reactance.push(constant_reactance_arc(-x, 0.0, RESISTANCE_LIMIT)?);
        }

        Ok(Self {
            resistance,
            reactance,
        })
    }

    /// The conventional chart: r ∈ {0, 0.2, 0.5, 1, 2, 5}, x ∈ {0, ±0.2, ±0.5, ±1, ±2, ±5}
    pub fn standard() -> Result<Self> {
        let mut reactances = vec![0.0];
        reactances.extend_from_slice(&DEFAULT_REACTANCE_GRID);
        Self::new(&DEFAULT_RESISTANCE_GRID, &reactances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TAU;

    #[test]
    fn test_standard_grid_counts() {
        let grid = SmithGrid::standard().unwrap();
        assert_eq!(grid.resistance.len(), DEFAULT_RESISTANCE_GRID.len());
        assert_eq!(grid.reactance.len(), 1 + 2 * DEFAULT_REACTANCE_GRID.len());
        assert!(matches!(grid.reactance[0], ReactanceArc::Diameter { .. }));
    }

    #[test]
    fn test_grid_angles_in_range() {
        let grid = SmithGrid::standard().unwrap();
        let arcs = grid.resistance.iter().copied().chain(
            grid.reactance.iter().filter_map(|g| match g {
                ReactanceArc::Arc(a) => Some(*a),
                ReactanceArc::Diameter { .. } => None,
            }),
        );
        for arc in arcs {
            assert!((0.0..TAU).contains(&arc.start_angle));
            assert!((0.0..TAU).contains(&arc.end_angle));
        }
    }

    #[test]
    fn test_resistance_circles_are_closed() {
        let grid = SmithGrid::new(&[0.0, 1.0, 3.0], &[]).unwrap();
        assert!(grid.resistance.iter().all(|a| a.full_circle));
        assert!(grid.reactance.is_empty());
    }
}
