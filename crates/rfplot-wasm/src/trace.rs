//! WASM bindings for Trace class

use js_sys::Float64Array;
use num_complex::Complex64;
use rfplot_core::frequency::{Frequency, FrequencyUnit};
use rfplot_core::math::Component;
use rfplot_core::nearest::nearest_complex_index;
use rfplot_core::trace::Trace;
use rfplot_core::Result as PlotResult;
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// One plottable S-parameter trace
#[wasm_bindgen]
pub struct WasmTrace {
    pub(crate) inner: Trace,
}

/// Build a trace from parallel arrays
pub(crate) fn trace_from_parts(label: &str, frequencies: &[f64], unit: &str, re: &[f64], im: &[f64]) -> PlotResult<Trace> {
    let unit: FrequencyUnit = unit.parse()?;
    let frequency = Frequency::from_f(frequencies.to_vec(), unit)?;
    let samples = zip_complex(re, im)?;
    Trace::new(label, frequency, samples)
}

pub(crate) fn zip_complex(re: &[f64], im: &[f64]) -> PlotResult<Vec<Complex64>> {
    if re.len() != im.len() {
        return Err(rfplot_core::PlotError::LengthMismatch {
            expected: re.len(),
            found: im.len(),
        });
    }
    Ok(re.iter().zip(im).map(|(&r, &i)| Complex64::new(r, i)).collect())
}

#[wasm_bindgen]
impl WasmTrace {
    /// Create a trace
    ///
    /// @param label - Display label, e.g. 'S21'
    /// @param frequencies - Ascending frequencies in `unit`
    /// @param unit - Frequency unit ('Hz', 'kHz', 'MHz', 'GHz', 'THz', 'PHz')
    /// @param re - Real parts, one per frequency
    /// @param im - Imaginary parts, one per frequency
    #[wasm_bindgen(constructor)]
    pub fn new(label: &str, frequencies: &[f64], unit: &str, re: &[f64], im: &[f64]) -> Result<WasmTrace, JsValue> {
        let inner = trace_from_parts(label, frequencies, unit, re, im).map_err(to_js_error)?;
        Ok(WasmTrace { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.inner.label.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn color(&self) -> Option<String> {
        self.inner.color.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_color(&mut self, color: Option<String>) {
        self.inner.color = color;
    }

    /// Frequencies converted to Hz
    #[wasm_bindgen(getter, js_name = frequencyHz)]
    pub fn frequency_hz(&self) -> Float64Array {
        Float64Array::from(self.inner.frequency.to_hz().as_slice())
    }

    /// One derived series ('sRe', 'sIm', 'sMag', 'sDb', 'sAngle' or 'sDeg')
    pub fn component(&self, name: &str) -> Result<Float64Array, JsValue> {
        let component: Component = name.parse().map_err(to_js_error)?;
        Ok(Float64Array::from(self.inner.component(component)))
    }

    /// Index of the sample nearest to a point of the Γ plane
    #[wasm_bindgen(js_name = nearestSample)]
    pub fn nearest_sample(&self, re: f64, im: f64) -> Result<Option<usize>, JsValue> {
        nearest_complex_index(re, im, self.inner.real(), self.inner.imag()).map_err(to_js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfplot_core::PlotError;

    #[test]
    fn test_trace_from_parts() {
        let t = trace_from_parts("S21", &[1.0, 2.0], "GHz", &[0.5, 0.25], &[0.0, 0.1]).unwrap();
        assert_eq!(t.label, "S21");
        assert_eq!(t.frequency.to_hz(), vec![1e9, 2e9]);
        assert_eq!(t.imag(), &[0.0, 0.1]);
    }

    #[test]
    fn test_trace_from_parts_errors() {
        assert!(matches!(
            trace_from_parts("S11", &[1.0], "parsec", &[0.0], &[0.0]),
            Err(PlotError::InvalidUnit(_))
        ));
        assert!(matches!(
            trace_from_parts("S11", &[1.0], "Hz", &[0.0], &[]),
            Err(PlotError::LengthMismatch { .. })
        ));
        assert!(matches!(
            trace_from_parts("S11", &[2.0, 1.0], "Hz", &[0.0, 0.0], &[0.0, 0.0]),
            Err(PlotError::UnorderedFrequency { index: 1 })
        ));
    }
}
