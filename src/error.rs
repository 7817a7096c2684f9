//! Error types for notebook conversion.

use thiserror::Error;

/// Broad category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required element is missing from the document.
    Structural,
    /// A heading could not be decoded.
    Grammar,
    /// Headings and text blocks are not paired up.
    Sequencing,
}

/// Errors that can occur while parsing a notebook export.
///
/// Every variant is terminal for the conversion in progress.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Could not find \"html\" element (searched to offset {offset})")]
    MissingRoot { offset: usize },

    #[error("Could not locate root container element \"{class}\" (searched to offset {offset})")]
    MissingContainer { class: String, offset: usize },

    #[error("Failed to parse section heading {heading:?} on line {line}")]
    InvalidHeading { heading: String, line: u64 },

    #[error("Highlight heading {heading:?} on line {line} has no color")]
    MissingColor { heading: String, line: u64 },

    #[error("Text block on line {line} has no preceding heading")]
    OrphanText { line: u64 },

    #[error("Unclosed heading {heading:?} on line {line}")]
    UnclosedHeading { heading: String, line: u64 },
}

impl ParseError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MissingRoot { .. } | ParseError::MissingContainer { .. } => {
                ErrorKind::Structural
            }
            ParseError::InvalidHeading { .. } | ParseError::MissingColor { .. } => {
                ErrorKind::Grammar
            }
            ParseError::OrphanText { .. } | ParseError::UnclosedHeading { .. } => {
                ErrorKind::Sequencing
            }
        }
    }

    /// Byte offset into the source where the search was exhausted.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::MissingRoot { offset } | ParseError::MissingContainer { offset, .. } => {
                Some(*offset)
            }
            _ => None,
        }
    }

    /// 1-based source line of the element that caused the error.
    ///
    /// Element-level errors report lines rather than byte offsets: html5ever's
    /// tree builder only exposes the tokenizer's current line to the sink, so
    /// a byte offset for an element is not available. Structural errors carry
    /// an [`offset`](Self::offset) instead and return `None` here.
    pub fn line(&self) -> Option<u64> {
        match self {
            ParseError::InvalidHeading { line, .. }
            | ParseError::MissingColor { line, .. }
            | ParseError::OrphanText { line }
            | ParseError::UnclosedHeading { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Errors that can occur while formatting a notebook.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any error produced by the conversion pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, Error>;
