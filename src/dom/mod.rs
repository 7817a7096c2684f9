//! Markup tree adapter.
//!
//! Parses notebook exports with html5ever into a read-only [`ArenaDom`].
//! Everything the extractor needs from the markup goes through this module,
//! so the underlying parser can be swapped without touching the extractor.

mod arena;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute};

use tree_sink::ArenaSink;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse HTML text into an arena DOM.
///
/// Parsing never fails: html5ever recovers from malformed markup the same way
/// a browser does.
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    let result = parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes());
    result.into_dom()
}

/// Check whether the first start tag in the source is an explicit `<html`.
///
/// html5ever synthesizes a root `html` element for any input, so the parsed
/// tree cannot tell whether the source actually had one. Comments, doctypes,
/// processing instructions and end tags before the root are skipped; an
/// `<html` inside a comment does not count.
pub fn has_root_tag(source: &str) -> bool {
    let bytes = source.as_bytes();
    let mut pos = 0;

    while let Some(found) = memchr::memchr(b'<', &bytes[pos..]) {
        let rest = &bytes[pos + found + 1..];
        pos += found + 1;

        if let Some(body) = rest.strip_prefix(b"!--") {
            match memchr::memmem::find(body, b"-->") {
                Some(end) => pos += 3 + end + 3,
                None => return false,
            }
            continue;
        }

        match rest.first() {
            // Doctype, processing instruction, or end tag
            Some(b'!' | b'?' | b'/') => continue,
            Some(b) if b.is_ascii_alphabetic() => return is_html_tag_name(rest),
            _ => continue,
        }
    }

    false
}

fn is_html_tag_name(rest: &[u8]) -> bool {
    rest.len() >= 4
        && rest[..4].eq_ignore_ascii_case(b"html")
        && rest
            .get(4)
            .is_none_or(|&b| b == b'>' || b == b'/' || b.is_ascii_whitespace())
}
