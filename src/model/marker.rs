//! Annotation markers.

use serde::{Deserialize, Serialize};

/// One recorded annotation.
///
/// Serialized with a `type` tag (`"Highlight"` or `"Note"`) followed by the
/// variant's fields in declaration order. Unset optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Marker {
    Highlight(Highlight),
    Note(Note),
}

/// A highlighted passage, optionally annotated with a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Section heading in effect when the highlight appeared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Chapter label from the marker heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<u32>,
    pub color: String,
    pub quote: String,
    /// Set at most once, by the merge pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A note that is not attached to any highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<u32>,
    pub note: String,
}

impl Marker {
    /// Type name as it appears in every output format.
    pub fn type_name(&self) -> &'static str {
        match self {
            Marker::Highlight(_) => "Highlight",
            Marker::Note(_) => "Note",
        }
    }

    pub fn section(&self) -> Option<&str> {
        match self {
            Marker::Highlight(h) => h.section.as_deref(),
            Marker::Note(n) => n.section.as_deref(),
        }
    }

    pub fn chapter(&self) -> Option<&str> {
        match self {
            Marker::Highlight(h) => h.chapter.as_deref(),
            Marker::Note(n) => n.chapter.as_deref(),
        }
    }

    pub fn page(&self) -> Option<u32> {
        match self {
            Marker::Highlight(h) => h.page,
            Marker::Note(n) => n.page,
        }
    }

    pub fn location(&self) -> Option<u32> {
        match self {
            Marker::Highlight(h) => h.location,
            Marker::Note(n) => n.location,
        }
    }

    /// Note text: the attached note of a highlight, or the body of a note.
    pub fn note(&self) -> Option<&str> {
        match self {
            Marker::Highlight(h) => h.note.as_deref(),
            Marker::Note(n) => Some(&n.note),
        }
    }

    pub fn is_highlight(&self) -> bool {
        matches!(self, Marker::Highlight(_))
    }

    pub fn is_note(&self) -> bool {
        matches!(self, Marker::Note(_))
    }
}

impl From<Highlight> for Marker {
    fn from(highlight: Highlight) -> Self {
        Marker::Highlight(highlight)
    }
}

impl From<Note> for Marker {
    fn from(note: Note) -> Self {
        Marker::Note(note)
    }
}
