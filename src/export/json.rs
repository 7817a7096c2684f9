//! JSON Exporter - pretty-printed structural dump of the notebook.

use crate::error::FormatError;
use crate::model::Notebook;

use super::Exporter;

/// Exporter for JSON output.
///
/// Two-space indentation, keys in declaration order, unset optional
/// fields omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for JsonExporter {
    fn export(&self, notebook: &Notebook) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(notebook)?)
    }
}
