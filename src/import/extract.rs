//! Walks the content container of a parsed export and collects raw markers.

use tracing::{debug, warn};

use crate::dom::{ArenaDom, ArenaNodeId};
use crate::error::ParseError;
use crate::model::{Highlight, Marker, Note};

use super::heading::{HeadingKind, SectionHeading, parse_section_heading};
use super::{ParserConfig, UnclosedHeadingPolicy};

/// Classes the extractor reacts to. Anything else is decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementClass {
    NotebookFor,
    BookTitle,
    Authors,
    Citation,
    SectionHeading,
    NoteHeading,
    NoteText,
    Other,
}

impl ElementClass {
    fn of(class: Option<&str>) -> Self {
        match class {
            Some("notebookFor") => ElementClass::NotebookFor,
            Some("bookTitle") => ElementClass::BookTitle,
            Some("authors") => ElementClass::Authors,
            Some("citation") => ElementClass::Citation,
            Some("sectionHeading") => ElementClass::SectionHeading,
            Some("noteHeading") => ElementClass::NoteHeading,
            Some("noteText") => ElementClass::NoteText,
            _ => ElementClass::Other,
        }
    }
}

/// A heading waiting for its text block.
#[derive(Debug)]
struct PendingHeading {
    heading: SectionHeading,
    text: String,
    line: u64,
}

/// Metadata and markers as they appear in the document, before merging.
#[derive(Debug, Default)]
pub(crate) struct RawNotebook {
    pub title: Option<String>,
    pub authors: Option<String>,
    pub markers: Vec<Marker>,
}

/// Extract metadata and raw markers from the container's direct children.
pub(crate) fn extract_markers(
    dom: &ArenaDom,
    container: ArenaNodeId,
    config: &ParserConfig,
) -> Result<RawNotebook, ParseError> {
    let mut raw = RawNotebook::default();
    let mut section: Option<String> = None;
    let mut pending: Option<PendingHeading> = None;

    for child in dom.element_children(container) {
        match ElementClass::of(dom.class_of(child)) {
            ElementClass::NotebookFor | ElementClass::Citation | ElementClass::Other => {}
            ElementClass::BookTitle => raw.title = Some(dom.text_of(child)),
            ElementClass::Authors => raw.authors = Some(dom.text_of(child)),
            ElementClass::SectionHeading => section = Some(dom.text_of(child)),
            ElementClass::NoteHeading => {
                let next = decode_heading(dom, child)?;
                if let Some(previous) = pending.take() {
                    close_unpaired(previous, config)?;
                }
                pending = Some(next);
            }
            ElementClass::NoteText => {
                let text = dom.text_of(child);
                // A bookmark may only swallow the empty block exports emit after it
                let heading = match pending.take() {
                    Some(p) if p.heading.kind != HeadingKind::Bookmark || text.is_empty() => {
                        p.heading
                    }
                    _ => {
                        return Err(ParseError::OrphanText {
                            line: dom.line_of(child),
                        });
                    }
                };
                if let Some(marker) = build_marker(heading, section.clone(), text) {
                    raw.markers.push(marker);
                }
            }
        }
    }

    if let Some(previous) = pending {
        close_unpaired(previous, config)?;
    }

    debug!(
        markers = raw.markers.len(),
        title = raw.title.as_deref().unwrap_or(""),
        "extracted raw markers"
    );
    Ok(raw)
}

fn decode_heading(dom: &ArenaDom, node: ArenaNodeId) -> Result<PendingHeading, ParseError> {
    let text = dom.text_of(node);
    let line = dom.line_of(node);

    let Some(heading) = parse_section_heading(&text) else {
        return Err(ParseError::InvalidHeading {
            heading: text,
            line,
        });
    };
    if heading.kind == HeadingKind::Highlight && heading.color.is_none() {
        return Err(ParseError::MissingColor {
            heading: text,
            line,
        });
    }

    Ok(PendingHeading {
        heading,
        text,
        line,
    })
}

/// Handle a heading that never received its text block.
///
/// Bookmarks are allowed to stand alone. Other headings are an error unless
/// the parser was configured to skip them.
fn close_unpaired(pending: PendingHeading, config: &ParserConfig) -> Result<(), ParseError> {
    if pending.heading.kind == HeadingKind::Bookmark {
        return Ok(());
    }
    match config.unclosed_heading {
        UnclosedHeadingPolicy::Error => Err(ParseError::UnclosedHeading {
            heading: pending.text,
            line: pending.line,
        }),
        UnclosedHeadingPolicy::Skip => {
            warn!(
                heading = %pending.text,
                line = pending.line,
                "skipping heading with no text block"
            );
            Ok(())
        }
    }
}

/// Pair a heading with its text block. Bookmarks produce nothing.
fn build_marker(heading: SectionHeading, section: Option<String>, text: String) -> Option<Marker> {
    let SectionHeading {
        kind,
        color,
        chapter,
        page,
        location,
    } = heading;

    match kind {
        HeadingKind::Bookmark => {
            debug!(?location, "discarding bookmark");
            None
        }
        HeadingKind::Highlight => Some(Marker::Highlight(Highlight {
            section,
            chapter,
            page,
            location,
            color: color.unwrap_or_default(),
            quote: text,
            note: None,
        })),
        HeadingKind::Note => Some(Marker::Note(Note {
            section,
            chapter,
            page,
            location,
            note: text,
        })),
    }
}
