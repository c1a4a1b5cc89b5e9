//! WASM bindings for rfplot-core
//!
//! This module exposes the plotting math to JavaScript/WASM. Plot
//! descriptors cross the boundary as JSON strings.

use rfplot_core::PlotError;
use wasm_bindgen::prelude::*;

mod color;
mod frequency;
mod plot;
mod trace;

pub use color::WasmColorCursor;
pub use plot::WasmTraceSet;
pub use trace::WasmTrace;

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn to_js_error(e: PlotError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
