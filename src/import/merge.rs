//! Folding standalone notes into the highlights they annotate.
//!
//! Exports list a note on a highlight as its own heading/text pair right after
//! the highlight. The merge pass reattaches it.

use crate::model::Marker;

/// Fold each note into an immediately preceding, note-less highlight.
///
/// Single left-to-right pass with one entry of lookback into the output:
/// a note attaches only to the last emitted marker, only when that marker is a
/// highlight, and only when the highlight has no note yet. Everything else is
/// appended unchanged, so relative order is preserved.
pub fn merge_markers(raw: Vec<Marker>) -> Vec<Marker> {
    let mut merged: Vec<Marker> = Vec::with_capacity(raw.len());

    for marker in raw {
        match marker {
            Marker::Highlight(_) => merged.push(marker),
            Marker::Note(note) => match merged.last_mut() {
                Some(Marker::Highlight(highlight)) if highlight.note.is_none() => {
                    highlight.note = Some(note.note);
                }
                _ => merged.push(Marker::Note(note)),
            },
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Highlight, Note};
    use proptest::prelude::*;

    fn highlight(location: u32, note: Option<&str>) -> Marker {
        Marker::Highlight(Highlight {
            section: None,
            chapter: None,
            page: None,
            location: Some(location),
            color: "yellow".into(),
            quote: format!("quote {location}"),
            note: note.map(String::from),
        })
    }

    fn note(location: u32, text: &str) -> Marker {
        Marker::Note(Note {
            section: None,
            chapter: None,
            page: None,
            location: Some(location),
            note: text.into(),
        })
    }

    #[test]
    fn test_note_folds_into_preceding_highlight() {
        let merged = merge_markers(vec![highlight(1, None), note(1, "first")]);
        assert_eq!(merged, vec![highlight(1, Some("first"))]);
    }

    #[test]
    fn test_second_note_is_kept() {
        let merged = merge_markers(vec![
            highlight(1, None),
            note(1, "first"),
            note(1, "second"),
        ]);
        assert_eq!(merged, vec![highlight(1, Some("first")), note(1, "second")]);
    }

    #[test]
    fn test_note_never_overwrites() {
        let merged = merge_markers(vec![highlight(1, Some("existing")), note(1, "new")]);
        assert_eq!(merged, vec![highlight(1, Some("existing")), note(1, "new")]);
    }

    #[test]
    fn test_note_does_not_reach_back_past_a_note() {
        let merged = merge_markers(vec![note(1, "a"), note(2, "b")]);
        assert_eq!(merged, vec![note(1, "a"), note(2, "b")]);
    }

    #[test]
    fn test_note_only_looks_back_one_entry() {
        let merged = merge_markers(vec![
            highlight(1, None),
            highlight(2, Some("x")),
            note(3, "late"),
        ]);
        assert_eq!(
            merged,
            vec![highlight(1, None), highlight(2, Some("x")), note(3, "late")]
        );
    }

    #[test]
    fn test_leading_note_and_empty_input() {
        assert!(merge_markers(Vec::new()).is_empty());
        assert_eq!(
            merge_markers(vec![note(1, "alone"), highlight(2, None)]),
            vec![note(1, "alone"), highlight(2, None)]
        );
    }

    fn arb_marker() -> impl Strategy<Value = Marker> {
        prop_oneof![
            (1u32..50, any::<bool>()).prop_map(|(loc, noted)| highlight(loc, noted.then_some("x"))),
            (1u32..50).prop_map(|loc| note(loc, "n")),
        ]
    }

    proptest! {
        #[test]
        fn prop_merge_keeps_every_highlight_in_order(raw in prop::collection::vec(arb_marker(), 0..24)) {
            let quotes = |markers: &[Marker]| -> Vec<String> {
                markers
                    .iter()
                    .filter_map(|m| match m {
                        Marker::Highlight(h) => Some(h.quote.clone()),
                        Marker::Note(_) => None,
                    })
                    .collect()
            };
            let before = quotes(&raw);
            let raw_notes = raw.iter().filter(|m| m.is_note()).count();

            let merged = merge_markers(raw.clone());

            prop_assert_eq!(quotes(&merged), before);
            let merged_notes = merged.iter().filter(|m| m.is_note()).count();
            prop_assert!(merged_notes <= raw_notes);
            // Every absorbed note shrinks the output by exactly one entry
            prop_assert_eq!(raw.len() - merged.len(), raw_notes - merged_notes);
        }

        #[test]
        fn prop_merge_is_idempotent(raw in prop::collection::vec(arb_marker(), 0..24)) {
            let once = merge_markers(raw);
            prop_assert_eq!(merge_markers(once.clone()), once);
        }
    }
}
