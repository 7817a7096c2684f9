//! CSV Exporter - one row per marker.

use crate::error::FormatError;
use crate::model::{Marker, Notebook};

use super::Exporter;
use super::escape::escape_csv_field;

/// Fixed header row.
pub const CSV_COLUMNS: [&str; 8] = [
    "Type", "Location", "Page", "Section", "Chapter", "Quote", "Color", "Note",
];

/// Exporter for CSV output.
///
/// Rows are joined with `\n` and there is no trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for CsvExporter {
    fn export(&self, notebook: &Notebook) -> Result<String, FormatError> {
        let mut lines = Vec::with_capacity(notebook.markers.len() + 1);
        lines.push(CSV_COLUMNS.join(","));
        lines.extend(notebook.markers.iter().map(marker_row));
        Ok(lines.join("\n"))
    }
}

fn marker_row(marker: &Marker) -> String {
    let (quote, color) = match marker {
        Marker::Highlight(h) => (h.quote.as_str(), h.color.as_str()),
        Marker::Note(_) => ("", ""),
    };
    let location = marker.location().map(|l| l.to_string()).unwrap_or_default();
    let page = marker.page().map(|p| p.to_string()).unwrap_or_default();

    let fields = [
        marker.type_name(),
        location.as_str(),
        page.as_str(),
        marker.section().unwrap_or(""),
        marker.chapter().unwrap_or(""),
        quote,
        color,
        marker.note().unwrap_or(""),
    ];

    fields
        .iter()
        .map(|field| escape_csv_field(field))
        .collect::<Vec<_>>()
        .join(",")
}
