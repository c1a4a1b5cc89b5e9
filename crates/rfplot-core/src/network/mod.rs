//! Network module - N-port S-parameter data as plottable traces
//!
//! A [`Network`] is what the file parser hands over: a frequency vector,
//! the `[nfreq, nports, nports]` S-parameter block and the per-port
//! reference impedance. This module slices it into [`Trace`]s.
//!
//! [`Trace`]: crate::trace::Trace

mod batch;
mod core;
mod traces;

pub use batch::{load_traces, TraceBatch};
pub use core::Network;
