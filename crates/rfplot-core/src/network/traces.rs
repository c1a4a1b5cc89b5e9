//! Trace extraction and hover readouts

use log::debug;
use num_complex::Complex64;

use super::core::Network;
use crate::color::ColorCursor;
use crate::error::{PlotError, Result};
use crate::math::gamma_to_load;
use crate::trace::Trace;

impl Network {
    fn check_port(&self, port: usize) -> Result<()> {
        if port < self.nports() {
            Ok(())
        } else {
            Err(PlotError::InvalidPort {
                port,
                nports: self.nports(),
            })
        }
    }

    /// One port pair as a trace labelled `S{i+1}{j+1}` (0-based ports)
    pub fn trace(&self, i: usize, j: usize) -> Result<Trace> {
        self.validate()?;
        self.check_port(i)?;
        self.check_port(j)?;
        let samples = self.s.slice(ndarray::s![.., i, j]).to_vec();
        Trace::new(format!("S{}{}", i + 1, j + 1), self.frequency.clone(), samples)
    }

    /// Every port pair in row-major order (S11, S12, ..., S21, ...), colored
    /// from `cursor` in the same order.
    ///
    /// Colors are only drawn once every trace has been extracted, so a
    /// failing network leaves the cursor untouched.
    pub fn traces(&self, cursor: &mut ColorCursor) -> Result<Vec<Trace>> {
        let n = self.nports();
        let traces = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| self.trace(i, j))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "Extracted {} traces from {}-port network {:?}",
            traces.len(),
            n,
            self.name
        );
        Ok(traces
            .into_iter()
            .map(|t| {
                let color = cursor.next_color().to_string();
                t.with_color(color)
            })
            .collect())
    }

    /// Load impedance seen at `port` at frequency `index`, in ohms, from the
    /// port's reflection coefficient and reference impedance.
    ///
    /// `Ok(None)` when `index` is past the last frequency.
    pub fn load_impedance(&self, port: usize, index: usize) -> Result<Option<Complex64>> {
        self.validate()?;
        self.check_port(port)?;
        match self.s.get((index, port, port)) {
            Some(&gamma) => gamma_to_load(gamma, self.z0[port]).map(Some),
            None => Ok(None),
        }
    }
}
