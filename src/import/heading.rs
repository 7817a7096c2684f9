//! Marker heading grammar.
//!
//! Each annotation in an export is preceded by a one-line heading such as
//! `Highlight(yellow) - Chapter Name > Page 13 · Location 154`. The pieces are
//! extracted independently, so any of color, chapter, page and location may be
//! missing without affecting the others.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Matches the leading kind keyword.
static KIND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Highlight|Note|Bookmark)\b").unwrap());

/// Matches `Highlight(color)`.
static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Highlight\(([^)]*)\)").unwrap());

/// Matches the chapter label between `- ` and ` >`.
static CHAPTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"- (.*?) >").unwrap());

static PAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bPage\s+(\d+)").unwrap());

static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bLocation\s+(\d+)").unwrap());

/// What kind of annotation a heading introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    Bookmark,
    Note,
    Highlight,
}

/// A decoded marker heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeading {
    pub kind: HeadingKind,
    /// Only ever set for highlights.
    pub color: Option<String>,
    pub chapter: Option<String>,
    pub page: Option<u32>,
    pub location: Option<u32>,
}

/// Decode one line of heading text.
///
/// Returns `None` when the text does not start with `Highlight`, `Note` or
/// `Bookmark`, or when a page or location number is zero or does not fit in
/// a `u32`. Pages written in other numerals (`Page xii`) are left unset.
///
/// # Examples
///
/// ```
/// use highlight_hop::import::{HeadingKind, parse_section_heading};
///
/// let heading = parse_section_heading("Highlight(yellow) - Page 13 · Location 154").unwrap();
/// assert_eq!(heading.kind, HeadingKind::Highlight);
/// assert_eq!(heading.color.as_deref(), Some("yellow"));
/// assert_eq!(heading.page, Some(13));
/// assert_eq!(heading.location, Some(154));
/// ```
pub fn parse_section_heading(text: &str) -> Option<SectionHeading> {
    let kind = match KIND_RE.captures(text)?.get(1)?.as_str() {
        "Highlight" => HeadingKind::Highlight,
        "Note" => HeadingKind::Note,
        "Bookmark" => HeadingKind::Bookmark,
        _ => return None,
    };

    let color = if kind == HeadingKind::Highlight {
        capture_text(&COLOR_RE, text)
    } else {
        None
    };

    Some(SectionHeading {
        kind,
        color,
        chapter: capture_text(&CHAPTER_RE, text),
        page: capture_number(&PAGE_RE, text)?,
        location: capture_number(&LOCATION_RE, text)?,
    })
}

/// First capture group, trimmed. Empty captures count as absent.
fn capture_text(re: &Regex, text: &str) -> Option<String> {
    let value = re.captures(text)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// `Some(None)` when the pattern is absent, `None` when the digits are not a
/// positive `u32`.
fn capture_number(re: &Regex, text: &str) -> Option<Option<u32>> {
    let Some(digits) = re.captures(text).and_then(|c| c.get(1)) else {
        return Some(None);
    };
    digits.as_str().parse::<u32>().ok().filter(|&n| n > 0).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn heading(
        kind: HeadingKind,
        color: Option<&str>,
        chapter: Option<&str>,
        page: Option<u32>,
        location: Option<u32>,
    ) -> SectionHeading {
        SectionHeading {
            kind,
            color: color.map(String::from),
            chapter: chapter.map(String::from),
            page,
            location,
        }
    }

    #[test]
    fn test_highlight_with_location() {
        assert_eq!(
            parse_section_heading("Highlight(yellow) - Location 361"),
            Some(heading(HeadingKind::Highlight, Some("yellow"), None, None, Some(361)))
        );
    }

    #[test]
    fn test_highlight_with_page() {
        assert_eq!(
            parse_section_heading("Highlight(yellow) - Page 13 · Location 154"),
            Some(heading(HeadingKind::Highlight, Some("yellow"), None, Some(13), Some(154)))
        );
    }

    #[test]
    fn test_highlight_with_chapter() {
        assert_eq!(
            parse_section_heading("Highlight(yellow) - Heading Sub Section > Location 154"),
            Some(heading(
                HeadingKind::Highlight,
                Some("yellow"),
                Some("Heading Sub Section"),
                None,
                Some(154)
            ))
        );
    }

    #[test]
    fn test_highlight_with_page_and_chapter() {
        assert_eq!(
            parse_section_heading("Highlight(blue) - Heading Sub Section > Page 13 · Location 154"),
            Some(heading(
                HeadingKind::Highlight,
                Some("blue"),
                Some("Heading Sub Section"),
                Some(13),
                Some(154)
            ))
        );
    }

    #[test]
    fn test_note_headings() {
        assert_eq!(
            parse_section_heading("Note - Location 795"),
            Some(heading(HeadingKind::Note, None, None, None, Some(795)))
        );
        assert_eq!(
            parse_section_heading("Note - Page 13 · Location 154"),
            Some(heading(HeadingKind::Note, None, None, Some(13), Some(154)))
        );
        assert_eq!(
            parse_section_heading("Note - Heading Sub Section > Page 13 · Location 154"),
            Some(heading(
                HeadingKind::Note,
                None,
                Some("Heading Sub Section"),
                Some(13),
                Some(154)
            ))
        );
    }

    #[test]
    fn test_bookmark() {
        assert_eq!(
            parse_section_heading("Bookmark - Location 1200"),
            Some(heading(HeadingKind::Bookmark, None, None, None, Some(1200)))
        );
    }

    #[test]
    fn test_chapter_with_dash() {
        let parsed = parse_section_heading("Note - Part 1 - Intro > Location 9").unwrap();
        assert_eq!(parsed.chapter.as_deref(), Some("Part 1 - Intro"));
    }

    #[test]
    fn test_highlight_without_color() {
        let parsed = parse_section_heading("Highlight - Location 5").unwrap();
        assert_eq!(parsed.kind, HeadingKind::Highlight);
        assert_eq!(parsed.color, None);
    }

    #[test]
    fn test_non_numeric_page_is_unset() {
        let parsed = parse_section_heading("Highlight(pink) - Page xii · Location 40").unwrap();
        assert_eq!(parsed.page, None);
        assert_eq!(parsed.location, Some(40));
    }

    #[test]
    fn test_out_of_range_numbers_reject_heading() {
        assert_eq!(parse_section_heading("Note - Location 99999999999"), None);
        assert_eq!(parse_section_heading("Note - Page 99999999999 · Location 5"), None);
        assert_eq!(parse_section_heading("Note - Page 0 · Location 7"), None);
        assert_eq!(parse_section_heading("Highlight(blue) - Location 0"), None);

        let max = parse_section_heading("Note - Location 4294967295").unwrap();
        assert_eq!(max.location, Some(u32::MAX));
    }

    #[test]
    fn test_not_a_heading() {
        assert_eq!(parse_section_heading("Invalid Heading Format"), None);
        assert_eq!(parse_section_heading(""), None);
        assert_eq!(parse_section_heading(" Note - Location 1"), None);
        assert_eq!(parse_section_heading("Notes - Location 1"), None);
    }

    proptest! {
        #[test]
        fn prop_location_and_page_survive(page in 1u32..100_000, location in 1u32..1_000_000) {
            let text = format!("Note - Chapter > Page {page} · Location {location}");
            let parsed = parse_section_heading(&text).unwrap();
            prop_assert_eq!(parsed.kind, HeadingKind::Note);
            prop_assert_eq!(parsed.page, Some(page));
            prop_assert_eq!(parsed.location, Some(location));
            prop_assert_eq!(parsed.chapter.as_deref(), Some("Chapter"));
        }

        #[test]
        fn prop_lowercase_text_is_never_a_heading(text in "[a-z ]{0,24}") {
            prop_assert_eq!(parse_section_heading(&text), None);
        }
    }
}
