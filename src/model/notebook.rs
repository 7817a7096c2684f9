//! The parsed notebook.

use serde::{Deserialize, Serialize};

use super::Marker;

/// A parsed notebook export.
///
/// Markers are kept in document order. Nothing downstream sorts or
/// deduplicates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    /// The book title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The book authors, as a single display string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    /// All markers, in document order.
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl Notebook {
    /// Create an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the authors (builder pattern).
    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    /// Append a marker (builder pattern).
    pub fn with_marker(mut self, marker: impl Into<Marker>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Number of highlights, with or without an attached note.
    pub fn highlight_count(&self) -> usize {
        self.markers.iter().filter(|m| m.is_highlight()).count()
    }

    /// Number of standalone notes.
    pub fn note_count(&self) -> usize {
        self.markers.iter().filter(|m| m.is_note()).count()
    }
}
