//! Notebook import: export markup in, [`Notebook`] out.
//!
//! The pipeline is:
//! 1. Parse the markup with html5ever into an arena DOM ([`crate::dom`])
//! 2. Locate the content container and walk its children ([`extract`])
//! 3. Fold standalone notes into the highlights they follow ([`merge_markers`])
//!
//! # Example
//!
//! ```
//! use highlight_hop::parse_notebook;
//!
//! let html = r#"<html><body><div class="bodyContainer">
//!     <div class="bookTitle">Moby-Dick</div>
//!     <div class="sectionHeading">Chapter 1</div>
//!     <div class="noteHeading">Highlight(yellow) - Location 10</div>
//!     <div class="noteText">Call me Ishmael.</div>
//! </div></body></html>"#;
//!
//! let notebook = parse_notebook(html).unwrap();
//! assert_eq!(notebook.title.as_deref(), Some("Moby-Dick"));
//! assert_eq!(notebook.markers.len(), 1);
//! ```

mod extract;
mod heading;
mod merge;

pub use heading::{HeadingKind, SectionHeading, parse_section_heading};
pub use merge::merge_markers;

use tracing::debug;

use crate::dom::{self, ArenaDom, ArenaNodeId};
use crate::error::ParseError;
use crate::model::Notebook;

/// Class of the element that holds every annotation in an export.
pub const DEFAULT_CONTAINER_CLASS: &str = "bodyContainer";

/// What to do with a heading that is never followed by a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnclosedHeadingPolicy {
    /// Fail the whole parse.
    #[default]
    Error,
    /// Drop the heading and log a warning.
    Skip,
}

/// Configuration for notebook parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Class attribute value of the content container `div`.
    pub container_class: String,
    pub unclosed_heading: UnclosedHeadingPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            unclosed_heading: UnclosedHeadingPolicy::default(),
        }
    }
}

impl ParserConfig {
    /// Set the container class (builder pattern).
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = class.into();
        self
    }

    /// Set the unclosed heading policy (builder pattern).
    pub fn with_unclosed_heading(mut self, policy: UnclosedHeadingPolicy) -> Self {
        self.unclosed_heading = policy;
        self
    }
}

/// Parser for notebook exports.
///
/// Holds only configuration; every call to [`NotebookParser::parse`] is
/// independent, so one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct NotebookParser {
    config: ParserConfig,
}

impl NotebookParser {
    /// Create a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the specified configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse export markup into a merged notebook.
    pub fn parse(&self, source: &str) -> Result<Notebook, ParseError> {
        if !dom::has_root_tag(source) {
            return Err(ParseError::MissingRoot {
                offset: source.len(),
            });
        }

        let dom = dom::parse_html(source);
        let container = self.locate_container(&dom, source.len())?;
        let raw = extract::extract_markers(&dom, container, &self.config)?;

        let raw_count = raw.markers.len();
        let markers = merge_markers(raw.markers);
        debug!(raw = raw_count, merged = markers.len(), "merged markers");

        Ok(Notebook {
            title: raw.title,
            authors: raw.authors,
            markers,
        })
    }

    /// Parse raw export bytes, detecting the text encoding first.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Notebook, ParseError> {
        let hint = crate::util::extract_charset(bytes);
        let source = crate::util::decode_text(bytes, hint);
        self.parse(&source)
    }

    fn locate_container(&self, dom: &ArenaDom, source_len: usize) -> Result<ArenaNodeId, ParseError> {
        let html = dom
            .element_children(dom.document())
            .find(|&id| dom.get(id).is_some_and(|n| n.is_element_named("html")))
            .ok_or(ParseError::MissingRoot { offset: source_len })?;

        let class = self.config.container_class.as_str();
        dom.locate(html, |n| n.is_element_named("div") && n.class() == Some(class))
            .ok_or_else(|| ParseError::MissingContainer {
                class: class.to_string(),
                offset: source_len,
            })
    }
}

/// Parse export markup with the default configuration.
pub fn parse_notebook(source: &str) -> Result<Notebook, ParseError> {
    NotebookParser::new().parse(source)
}

/// Parse raw export bytes with the default configuration.
///
/// UTF-8 (with or without BOM) and UTF-16 with BOM are decoded directly;
/// other encodings are taken from a `charset` declaration.
pub fn parse_notebook_bytes(bytes: &[u8]) -> Result<Notebook, ParseError> {
    NotebookParser::new().parse_bytes(bytes)
}
