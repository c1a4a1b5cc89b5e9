//! WASM bindings for unit conversion and frequency lookup

use rfplot_core::frequency::{normalize_frequency_str, FrequencyUnit};
use rfplot_core::nearest::nearest_frequency_index_hz;
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// Convert a frequency between units
///
/// @param value - Frequency in `from`
/// @param from - Source unit ('Hz', 'kHz', 'MHz', 'GHz', 'THz', 'PHz')
/// @param to - Target unit
#[wasm_bindgen(js_name = normalizeFrequency)]
pub fn normalize_frequency(value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
    normalize_frequency_str(value, from, to).map_err(to_js_error)
}

/// Index of the frequency nearest to a pointer position in Hz
///
/// @param query_hz - Pointer position on the frequency axis, in Hz
/// @param frequencies - Ascending frequencies in `unit`
/// @param unit - Unit of `frequencies`
#[wasm_bindgen(js_name = nearestFrequencyIndex)]
pub fn nearest_frequency_index(query_hz: f64, frequencies: &[f64], unit: &str) -> Result<Option<usize>, JsValue> {
    let unit: FrequencyUnit = unit.parse().map_err(to_js_error)?;
    Ok(nearest_frequency_index_hz(query_hz, frequencies, unit))
}
