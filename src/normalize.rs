//! Verse text cleanup
//!
//!     Two independent passes, each applied to one kind of text only:
//!
//!     - Native-script verses carry an end-of-ayah glyph (U+06DD) followed by the verse number in
//!       Arabic-Indic digits. [strip_verse_markers] removes those sequences along with the
//!       whitespace in front of them (usually a no-break space).
//!     - Translated verses carry HTML character references such as `&mdash;` or `&#91;`.
//!       [decode_entities] resolves them to literal characters.
//!
//!     Both return borrowed text when nothing needs to change.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// End-of-ayah glyph followed by Arabic-Indic digits, with any whitespace run before it.
static VERSE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\x{06DD}[\x{0660}-\x{0669}]+").expect("verse marker pattern is valid")
});

/// Remove every end-of-ayah marker and the whitespace that precedes it.
pub fn strip_verse_markers(text: &str) -> Cow<'_, str> {
    VERSE_MARKER.replace_all(text, "")
}

/// Resolve named and numeric HTML character references.
///
/// Only references terminated by `;` are decoded, and numeric references map straight to the
/// code point they name. Unknown or malformed references are left as they are.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    html_escape::decode_html_entities(text)
}
