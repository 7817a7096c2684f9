//! # highlight-hop
//!
//! Converts e-reader notebook exports (the HTML "Export Notebook" file) into
//! CSV, Markdown, or JSON documents.
//!
//! ## Features
//!
//! - Tolerant html5ever-based parsing of the export markup
//! - Decodes highlight/note headings (color, chapter, page, location)
//! - Attaches notes to the highlights they annotate
//! - Deterministic CSV, Markdown, and JSON output with derived filenames
//!
//! ## Quick Start
//!
//! ```
//! use highlight_hop::{Format, format_notebook, parse_notebook};
//!
//! let html = r#"<html><body><div class="bodyContainer">
//!     <div class="bookTitle">Moby Dick!</div>
//!     <div class="sectionHeading">Chapter 1</div>
//!     <div class="noteHeading">Highlight(yellow) - Location 10</div>
//!     <div class="noteText">Call me Ishmael.</div>
//! </div></body></html>"#;
//!
//! let notebook = parse_notebook(html).unwrap();
//! let formatted = format_notebook(&notebook, Format::Markdown).unwrap();
//!
//! assert_eq!(formatted.filename, "moby_dick_.md");
//! assert_eq!(formatted.content_type, "text/markdown");
//! ```
//!
//! The pipeline holds no global state; parsing and formatting different
//! exports from several threads at once needs no coordination.

pub mod dom;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, ErrorKind, FormatError, ParseError, Result};
pub use export::{Exporter, Format, FormattedNotebook, format_notebook};
pub use import::{NotebookParser, ParserConfig, UnclosedHeadingPolicy, parse_notebook, parse_notebook_bytes};
pub use model::{Highlight, Marker, Note, Notebook};
