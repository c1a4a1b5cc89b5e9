//! rfplot-core: plotting math for S-parameter viewers
//!
//! Renderer-agnostic geometry for Cartesian and Smith chart views of
//! N-port network data. Every function is pure; the output is SVG path
//! data, scales and ticks that any canvas or SVG front end can draw.
//!
//! ## Modules
//!
//! - `frequency` - Frequency units, conversion and frequency vectors
//! - `math` - Complex transforms, plot components, monotone interpolation
//! - `trace` - One plottable S-parameter trace with derived series
//! - `network` - N-port S-parameter data sliced into traces
//! - `scale` - Linear and Smith scales, axis extents, ticks
//! - `smith` - Constant-resistance/reactance arcs and the chart grid
//! - `path` - SVG path data builder
//! - `plot` - Cartesian and Smith plot descriptors
//! - `nearest` - Nearest-sample lookup for pointer hover
//! - `color` - Round-robin trace colors
//!
//! ## Example
//! ```
//! use num_complex::Complex64;
//! use rfplot_core::{build_cartesian_plot, AxisSettings, Component, Frequency, FrequencyUnit, Trace, ViewPort};
//!
//! let freq = Frequency::linear(1.0, 3.0, 3, FrequencyUnit::GHz).unwrap();
//! let s21 = vec![Complex64::new(0.9, 0.0), Complex64::new(0.5, 0.1), Complex64::new(0.1, 0.0)];
//! let trace = Trace::new("S21", freq, s21).unwrap();
//! let plot = build_cartesian_plot(
//!     &[trace],
//!     Component::Db,
//!     ViewPort::new(640.0, 480.0).unwrap(),
//!     &AxisSettings::default(),
//! )
//! .unwrap();
//! assert_eq!(plot.plot_paths.unwrap().len(), 1);
//! ```

pub mod color;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod math;
pub mod nearest;
pub mod network;
pub mod path;
pub mod plot;
pub mod scale;
pub mod smith;
pub mod trace;

pub use color::{AtomicColorCursor, ColorCursor};
pub use error::{PlotError, Result};
pub use frequency::{normalize_frequency, Frequency, FrequencyUnit};
pub use math::Component;
pub use nearest::{nearest_complex_index, nearest_frequency_index, nearest_frequency_index_hz};
pub use network::{load_traces, Network, TraceBatch};
pub use plot::{
    build_cartesian_plot, build_smith_plot, AxisSettings, CartesianPlot, Insets, SmithPlot,
    SmithSettings, TracePath, ViewPort,
};
pub use scale::{ExtentOverride, LinearScale, SmithScale, Tick};
pub use trace::Trace;
