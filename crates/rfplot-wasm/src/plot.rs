//! WASM bindings for plot descriptors
//!
//! A trace set collects the visible traces; each plot call recomputes the
//! whole descriptor and returns it as JSON.

use ndarray::{Array1, Array3};
use num_complex::Complex64;
use rfplot_core::frequency::{Frequency, FrequencyUnit};
use rfplot_core::math::Component;
use rfplot_core::network::{load_traces, Network};
use rfplot_core::plot::{build_cartesian_plot, build_smith_plot, AxisSettings, SmithSettings, ViewPort};
use rfplot_core::trace::Trace;
use rfplot_core::{PlotError, Result as PlotResult};
use wasm_bindgen::prelude::*;

use crate::color::WasmColorCursor;
use crate::to_js_error;
use crate::trace::{zip_complex, WasmTrace};

/// Ordered collection of traces to plot
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmTraceSet {
    traces: Vec<Trace>,
}

/// Network from flattened row-major `[nfreq, nports, nports]` arrays
pub(crate) fn network_from_flat(
    name: &str,
    frequencies: &[f64],
    unit: &str,
    nports: usize,
    re: &[f64],
    im: &[f64],
    z0: f64,
) -> PlotResult<Network> {
    let unit: FrequencyUnit = unit.parse()?;
    let frequency = Frequency::from_f(frequencies.to_vec(), unit)?;
    let nfreq = frequency.npoints();
    let samples = zip_complex(re, im)?;
    let s = Array3::from_shape_vec((nfreq, nports, nports), samples).map_err(|_| {
        PlotError::LengthMismatch {
            expected: nfreq * nports * nports,
            found: re.len(),
        }
    })?;
    let z0 = Array1::from_elem(nports, Complex64::new(z0, 0.0));
    Ok(Network::new(frequency, s, z0).with_name(name))
}

fn parse_json<T: serde::de::DeserializeOwned + Default>(json: Option<String>) -> Result<T, JsValue> {
    match json {
        Some(s) if !s.trim().is_empty() => {
            serde_json::from_str(&s).map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))
        }
        _ => Ok(T::default()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
impl WasmTraceSet {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTraceSet {
        WasmTraceSet::default()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.traces.len()
    }

    /// Append a copy of `trace`
    pub fn push(&mut self, trace: &WasmTrace) {
        self.traces.push(trace.inner.clone());
    }

    pub fn clear(&mut self) {
        self.traces.clear();
    }

    /// Append every port pair of a network, colored from `cursor`
    ///
    /// @param name - File name, reported on failure
    /// @param frequencies - Ascending frequencies in `unit`
    /// @param unit - Frequency unit
    /// @param nports - Number of ports
    /// @param re - Real parts, flattened [nfreq, nports, nports] in row-major order
    /// @param im - Imaginary parts, same layout as `re`
    /// @param z0 - Reference impedance in ohms
    /// @returns Number of traces added
    #[wasm_bindgen(js_name = addNetwork)]
    #[allow(clippy::too_many_arguments)]
    pub fn add_network(
        &mut self,
        name: &str,
        frequencies: &[f64],
        unit: &str,
        nports: usize,
        re: &[f64],
        im: &[f64],
        z0: f64,
        cursor: &mut WasmColorCursor,
    ) -> Result<usize, JsValue> {
        let network = network_from_flat(name, frequencies, unit, nports, re, im, z0)
            .map_err(|e| JsValue::from_str(&format!("{}: {}", name, e)))?;
        let batch = load_traces(std::iter::once(&network), &mut cursor.inner);
        if let Some((name, e)) = batch.failures.into_iter().next() {
            return Err(JsValue::from_str(&format!("{}: {}", name, e)));
        }
        let added = batch.traces.len();
        self.traces.extend(batch.traces);
        Ok(added)
    }

    /// Cartesian plot descriptor as JSON
    ///
    /// @param component - 'sRe', 'sIm', 'sMag', 'sDb', 'sAngle' or 'sDeg'
    /// @param width - Viewport width in pixels
    /// @param height - Viewport height in pixels
    /// @param settings - Optional AxisSettings as JSON
    #[wasm_bindgen(js_name = cartesianPlot)]
    pub fn cartesian_plot(
        &self,
        component: &str,
        width: f64,
        height: f64,
        settings: Option<String>,
    ) -> Result<String, JsValue> {
        let component: Component = component.parse().map_err(to_js_error)?;
        let viewport = ViewPort::new(width, height).map_err(to_js_error)?;
        let settings: AxisSettings = parse_json(settings)?;
        let plot = build_cartesian_plot(&self.traces, component, viewport, &settings).map_err(to_js_error)?;
        to_json(&plot)
    }

    /// Smith chart descriptor as JSON
    ///
    /// @param width - Viewport width in pixels
    /// @param height - Viewport height in pixels
    /// @param inset - Margin around the chart in pixels
    #[wasm_bindgen(js_name = smithPlot)]
    pub fn smith_plot(&self, width: f64, height: f64, inset: Option<f64>) -> Result<String, JsValue> {
        let viewport = ViewPort::new(width, height).map_err(to_js_error)?;
        let settings = SmithSettings {
            inset: inset.unwrap_or(0.0),
        };
        let plot = build_smith_plot(&self.traces, viewport, &settings).map_err(to_js_error)?;
        to_json(&plot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_from_flat() {
        // 2 frequencies, 2 ports
        let re: Vec<f64> = (0..8).map(|k| k as f64 * 0.1).collect();
        let im = vec![0.0; 8];
        let ntwk = network_from_flat("dut.s2p", &[1.0, 2.0], "GHz", 2, &re, &im, 50.0).unwrap();
        assert_eq!(ntwk.nports(), 2);
        assert_eq!(ntwk.nfreq(), 2);
        // s[1, 0, 1] is element 5 of the flat array
        assert_eq!(ntwk.s[[1, 0, 1]], Complex64::new(0.5, 0.0));
        assert_eq!(ntwk.name.as_deref(), Some("dut.s2p"));
    }

    #[test]
    fn test_network_from_flat_wrong_size() {
        let err = network_from_flat("x.s2p", &[1.0], "GHz", 2, &[0.0; 3], &[0.0; 3], 50.0).unwrap_err();
        assert_eq!(
            err,
            PlotError::LengthMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_trace_set_plots() {
        let mut set = WasmTraceSet::new();
        let ntwk = network_from_flat("a.s1p", &[1.0, 2.0, 3.0], "GHz", 1, &[0.5, 0.3, 0.1], &[0.0; 3], 50.0).unwrap();
        let mut cursor = rfplot_core::ColorCursor::new();
        set.traces.extend(ntwk.traces(&mut cursor).unwrap());
        assert_eq!(set.length(), 1);

        let plot = build_cartesian_plot(
            &set.traces,
            Component::Magnitude,
            ViewPort::new(300.0, 200.0).unwrap(),
            &AxisSettings::default(),
        )
        .unwrap();
        let json = serde_json::to_string(&plot).unwrap();
        assert!(json.contains("\"label\":\"S11\""));
    }
}
