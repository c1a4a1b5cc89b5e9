//! WASM bindings for trace color assignment

use rfplot_core::color::ColorCursor;
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// Round-robin color cursor; one per loading session
#[wasm_bindgen]
pub struct WasmColorCursor {
    pub(crate) inner: ColorCursor,
}

#[wasm_bindgen]
impl WasmColorCursor {
    /// Cursor over the default 36-color palette
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmColorCursor {
        WasmColorCursor {
            inner: ColorCursor::new(),
        }
    }

    /// Cursor over a custom palette of CSS colors
    #[wasm_bindgen(js_name = withPalette)]
    pub fn with_palette(palette: Vec<String>) -> Result<WasmColorCursor, JsValue> {
        let inner = ColorCursor::with_palette(palette).map_err(to_js_error)?;
        Ok(WasmColorCursor { inner })
    }

    /// Next color, advancing the cursor
    pub fn next(&mut self) -> String {
        self.inner.next_color().to_string()
    }
}

impl Default for WasmColorCursor {
    fn default() -> Self {
        Self::new()
    }
}
