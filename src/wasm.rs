//! WASM bindings for browser-based notebook conversion.
//!
//! This module exposes the conversion pipeline to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::export::{Format, format_notebook};
use crate::import::parse_notebook;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// A converted notebook, as handed back to JavaScript.
#[wasm_bindgen]
pub struct ConvertedNotebook {
    content: String,
    filename: String,
    content_type: String,
    marker_count: usize,
}

#[wasm_bindgen]
impl ConvertedNotebook {
    #[wasm_bindgen(getter)]
    pub fn content(&self) -> String {
        self.content.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    #[wasm_bindgen(getter, js_name = contentType)]
    pub fn content_type(&self) -> String {
        self.content_type.clone()
    }

    #[wasm_bindgen(getter, js_name = markerCount)]
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }
}

/// Convert notebook export HTML to `csv`, `markdown` or `json`.
#[wasm_bindgen(js_name = convertNotebook)]
pub fn convert_notebook(html: &str, format: &str) -> Result<ConvertedNotebook, JsValue> {
    let format: Format = format.parse().map_err(|e: crate::FormatError| JsValue::from_str(&e.to_string()))?;
    let notebook = parse_notebook(html).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let formatted = format_notebook(&notebook, format).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(ConvertedNotebook {
        content: formatted.content,
        filename: formatted.filename,
        content_type: formatted.content_type,
        marker_count: notebook.markers.len(),
    })
}
