//! Export module for writing notebooks to document formats.
//!
//! Provides the `Exporter` trait and format-specific implementations. Each
//! exporter is stateless: the same notebook always produces the same bytes.
//!
//! # Example
//!
//! ```
//! use highlight_hop::export::{Format, format_notebook};
//! use highlight_hop::model::Notebook;
//!
//! let notebook = Notebook::new().with_title("Moby Dick!");
//! let format: Format = "csv".parse()?;
//! let formatted = format_notebook(&notebook, format)?;
//!
//! assert_eq!(formatted.filename, "moby_dick_.csv");
//! assert_eq!(formatted.content_type, "text/csv");
//! # Ok::<(), highlight_hop::FormatError>(())
//! ```

mod csv;
mod escape;
mod json;
mod markdown;

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;
use crate::model::Notebook;

pub use csv::CsvExporter;
pub use escape::{escape_csv_field, escape_html};
pub use json::JsonExporter;
pub use markdown::MarkdownExporter;

/// Trait for exporting notebooks to a specific document format.
pub trait Exporter {
    /// Render the notebook as a document.
    fn export(&self, notebook: &Notebook) -> Result<String, FormatError>;
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Csv,
    Markdown,
    Json,
}

impl Format {
    /// Every supported format, in tag order.
    pub const ALL: [Format; 3] = [Format::Csv, Format::Markdown, Format::Json];

    /// Tag used to select this format (`csv`, `markdown`, `json`).
    pub fn tag(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Markdown => "markdown",
            Format::Json => "json",
        }
    }

    /// File extension for output files.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Markdown => "md",
            Format::Json => "json",
        }
    }

    /// MIME type for output files.
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Csv => "text/csv",
            Format::Markdown => "text/markdown",
            Format::Json => "application/json",
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.tag() == tag)
            .ok_or_else(|| FormatError::UnsupportedFormat(tag.to_string()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A notebook rendered to one format, ready to attach or write out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedNotebook {
    pub content: String,
    pub filename: String,
    /// MIME type of `content`.
    pub content_type: String,
}

/// Render a notebook in the requested format.
pub fn format_notebook(notebook: &Notebook, format: Format) -> Result<FormattedNotebook, FormatError> {
    let content = match format {
        Format::Csv => CsvExporter::new().export(notebook)?,
        Format::Markdown => MarkdownExporter::new().export(notebook)?,
        Format::Json => JsonExporter::new().export(notebook)?,
    };

    Ok(FormattedNotebook {
        content,
        filename: format!("{}.{}", title_slug(notebook), format.extension()),
        content_type: format.content_type().to_string(),
    })
}

/// Filename stem derived from the notebook title.
///
/// Lowercases the title (or `highlights` when there is none) and replaces
/// every character outside `[a-z0-9]` with `_`.
pub fn title_slug(notebook: &Notebook) -> String {
    notebook
        .title
        .as_deref()
        .unwrap_or("highlights")
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}
