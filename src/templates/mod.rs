//! Note templates
//!
//!     One builder per document kind, both rendering through [NoteWriter] so that the markup
//!     dialect (front matter, wiki links, headings, dataview blocks) is produced in one place.
//!
//!     - [SurahNote]: a surah overview listing links to all of its verses.
//!     - [VerseNote]: a single verse with navigation links and one source block per translation.
//!
//!     Obsidian vaults created by earlier versions of the tool already link to these notes, so the
//!     rendered bytes are fixed: field order, blank lines and punctuation must not drift.

mod surah;
mod verse;
mod writer;

pub use surah::SurahNote;
pub use verse::{SourceStyle, VerseNote, VerseSource};
pub use writer::{aliased_link, wiki_link, FrontMatter, NoteWriter};

use std::path::PathBuf;

/// A renderable note with a fixed place in the vault.
pub trait Note {
    /// Link target other notes use to reference this one.
    fn note_name(&self) -> String;

    /// Path relative to the vault root.
    fn relative_path(&self) -> PathBuf;

    /// Full markdown body.
    fn render(&self) -> String;
}
