//! Property-based tests for verse text cleanup

use proptest::prelude::*;
use quran_obsidian::normalize::{decode_entities, strip_verse_markers};

const END_OF_AYAH: char = '\u{06DD}';

fn is_arabic_indic_digit(c: char) -> bool {
    ('\u{0660}'..='\u{0669}').contains(&c)
}

/// Arabic letters, spaces, Arabic-Indic and Latin digits, and the end-of-ayah glyph.
fn arabic_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[\u{0621}-\u{064A}]",
            Just(" ".to_string()),
            Just("\u{00A0}".to_string()),
            "[\u{0660}-\u{0669}]",
            "[0-9]",
            Just("\u{06DD}".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn stripping_is_idempotent(text in arabic_text_strategy()) {
        let once = strip_verse_markers(&text).into_owned();
        let twice = strip_verse_markers(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn stripped_text_has_no_marker_sequence(text in arabic_text_strategy()) {
        let stripped = strip_verse_markers(&text);
        let chars: Vec<char> = stripped.chars().collect();
        for pair in chars.windows(2) {
            let marker = pair[0] == END_OF_AYAH && is_arabic_indic_digit(pair[1]);
            prop_assert!(!marker, "marker survived in {:?}", stripped);
        }
    }

    #[test]
    fn text_without_markers_is_unchanged(text in "[a-zA-Z0-9 .,;:\u{0621}-\u{064A}]{0,60}") {
        prop_assert_eq!(strip_verse_markers(&text), text.as_str());
    }

    #[test]
    fn text_without_entities_is_unchanged(text in "[a-zA-Z0-9 .,;:!?'\"()\\[\\]-]{0,80}") {
        prop_assert_eq!(decode_entities(&text), text.as_str());
    }

    #[test]
    fn decoding_plain_output_again_is_stable(word in "[a-z]{1,12}") {
        let encoded = format!("{word} &mdash; &#91;{word}&#93;");
        let decoded = decode_entities(&encoded).into_owned();
        prop_assert_eq!(&decoded, &format!("{word} — [{word}]"));
        prop_assert_eq!(decode_entities(&decoded), decoded.as_str());
    }
}
