//! Batch loading of several networks into one trace list

use log::{debug, warn};

use super::core::Network;
use crate::color::ColorCursor;
use crate::error::PlotError;
use crate::trace::Trace;

/// Traces of a batch of networks plus the networks that could not be loaded
#[derive(Debug, Clone, Default)]
pub struct TraceBatch {
    /// In network order, then port-pair order
    pub traces: Vec<Trace>,
    /// Network name and the error it failed with
    pub failures: Vec<(String, PlotError)>,
}

impl TraceBatch {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Extract the traces of every network, in order, sharing one color cursor.
///
/// A network that fails is reported in [`TraceBatch::failures`] and does not
/// consume colors; the remaining networks still load.
pub fn load_traces<'a, I>(networks: I, cursor: &mut ColorCursor) -> TraceBatch
where
    I: IntoIterator<Item = &'a Network>,
{
    let mut batch = TraceBatch::default();
    for (position, network) in networks.into_iter().enumerate() {
        match network.traces(cursor) {
            Ok(traces) => batch.traces.extend(traces),
            Err(e) => {
                let name = network.display_name(position);
                warn!("Failed to load traces from {}: {}", name, e);
                batch.failures.push((name, e));
            }
        }
    }
    debug!(
        "Loaded {} traces, {} failed networks",
        batch.traces.len(),
        batch.failures.len()
    );
    batch
}
