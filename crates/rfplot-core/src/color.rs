//! Trace color assignment
//!
//! Round-robin cycling over a fixed palette. One cursor per loading session;
//! request colors in trace creation order (file order, then port-pair order)
//! so identical inputs get identical colors.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{PlotError, Result};

/// Material design base and accent-4 colors
pub const DEFAULT_PALETTE: [&str; 36] = [
    "#F44336", "#673AB7", "#03A9F4", "#4CAF50", "#FFEB3B", "#FF5722", "#E91E63", "#3F51B5",
    "#00BCD4", "#8BC34A", "#FFC107", "#795548", "#9C27B0", "#2196F3", "#009688", "#CDDC39",
    "#FF9800", "#607D8B", "#D50000", "#6200EA", "#0091EA", "#00C853", "#FFD600", "#DD2C00",
    "#C51162", "#304FFE", "#00B8D4", "#64DD17", "#FFAB00", "#3E2723", "#AA00FF", "#2962FF",
    "#00BFA5", "#AEEA00", "#FF6D00", "#263238",
];

/// Cursor over a palette; never runs out, wraps after the last entry
#[derive(Debug, Clone)]
pub struct ColorCursor {
    palette: Vec<String>,
    position: usize,
}

impl Default for ColorCursor {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            position: 0,
        }
    }
}

impl ColorCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor over a custom palette; fails with [`PlotError::EmptyPalette`] if empty
    pub fn with_palette<I, S>(palette: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let palette: Vec<String> = palette.into_iter().map(Into::into).collect();
        if palette.is_empty() {
            return Err(PlotError::EmptyPalette);
        }
        Ok(Self {
            palette,
            position: 0,
        })
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Color at the cursor, advancing the cursor
    pub fn next_color(&mut self) -> &str {
        let i = self.position;
        self.position = (self.position + 1) % self.palette.len();
        &self.palette[i]
    }
}

impl Iterator for ColorCursor {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_color().to_string())
    }
}

/// Lock-free cursor for callers that request colors from several threads.
///
/// Each call still receives a distinct slot, but the order across threads is
/// only as deterministic as the callers make it.
#[derive(Debug)]
pub struct AtomicColorCursor {
    palette: Vec<String>,
    counter: AtomicUsize,
}

impl AtomicColorCursor {
    pub fn new(cursor: ColorCursor) -> Self {
        Self {
            counter: AtomicUsize::new(cursor.position),
            palette: cursor.palette,
        }
    }

    pub fn next_color(&self) -> &str {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        &self.palette[n % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_of_three_wraps() {
        let mut cursor = ColorCursor::with_palette(["red", "green", "blue"]).unwrap();
        let got: Vec<String> = (&mut cursor).take(4).collect();
        assert_eq!(got, vec!["red", "green", "blue", "red"]);
    }

    #[test]
    fn test_default_palette_is_distinct() {
        let unique: HashSet<_> = DEFAULT_PALETTE.iter().collect();
        assert_eq!(unique.len(), 36);
        assert_eq!(ColorCursor::new().next_color(), "#F44336");
    }

    #[test]
    fn test_empty_palette_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(
            ColorCursor::with_palette(empty).unwrap_err(),
            PlotError::EmptyPalette
        );
    }

    #[test]
    fn test_atomic_cursor_continues_sequence() {
        let mut cursor = ColorCursor::with_palette(["a", "b", "c"]).unwrap();
        cursor.next_color();
        let shared = AtomicColorCursor::new(cursor);
        assert_eq!(shared.next_color(), "b");
        assert_eq!(shared.next_color(), "c");
        assert_eq!(shared.next_color(), "a");
    }
}
