//! Markdown Exporter - renders a notebook as a reading document.
//!
//! Layout:
//! - `# Title` and an optional `By: _Authors_` line
//! - `## Section` whenever the section changes
//! - `### Type (Page p, Location l) - Chapter` per marker
//! - Highlight quotes as block quotes, notes as `**Note:**` paragraphs
//! - A `----` rule after every marker
//!
//! Quote and note text is HTML-escaped. Every block is followed by a blank line.

use std::fmt::Write;

use crate::error::FormatError;
use crate::model::{Marker, Notebook};

use super::Exporter;
use super::escape::escape_html;

/// Exporter for Markdown output.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, notebook: &Notebook) -> Result<String, FormatError> {
        let mut md = String::new();

        push_block(&mut md, &format!("# {}", notebook.title.as_deref().unwrap_or("Notebook")));

        if let Some(authors) = non_empty(notebook.authors.as_deref()) {
            push_block(&mut md, &format!("By: _{authors}_"));
        }

        let mut current_section: Option<&str> = None;
        for marker in &notebook.markers {
            if let Some(section) = non_empty(marker.section())
                && current_section != Some(section)
            {
                current_section = Some(section);
                push_block(&mut md, &format!("## {section}"));
            }
            render_marker(&mut md, marker);
        }

        Ok(md)
    }
}

fn render_marker(md: &mut String, marker: &Marker) {
    push_block(md, &marker_heading(marker));

    // Explicit <br> keeps intentional line breaks inside one block quote
    if let Marker::Highlight(highlight) = marker {
        let quote = highlight
            .quote
            .split('\n')
            .map(|line| format!("> {}", escape_html(line)))
            .collect::<Vec<_>>()
            .join("<br>\n");
        push_block(md, &quote);
    }

    if let Some(note) = non_empty(marker.note()) {
        push_block(md, &format!("**Note:** {}", escape_html(note)));
    }

    push_block(md, "----");
}

/// `### Type (Page p, Location l) - Chapter`, omitting the unset parts.
fn marker_heading(marker: &Marker) -> String {
    let mut heading = format!("### {}", marker.type_name());

    let mut details = Vec::with_capacity(2);
    if let Some(page) = marker.page() {
        details.push(format!("Page {page}"));
    }
    if let Some(location) = marker.location() {
        details.push(format!("Location {location}"));
    }
    if !details.is_empty() {
        let _ = write!(heading, " ({})", details.join(", "));
    }

    if let Some(chapter) = non_empty(marker.chapter()) {
        let _ = write!(heading, " - {chapter}");
    }

    heading
}

fn push_block(md: &mut String, block: &str) {
    md.push_str(block);
    md.push_str("\n\n");
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
