//! Vault directory layout and note naming
//!
//!     Surahs/<N> - Surah <Transliterated>.md
//!     Verses/Surah <N>/Quran <N>-<V>.md
//!
//! Note names double as wiki-link targets, so the link helpers and the file names are built from
//! the same functions.

use std::path::PathBuf;

pub const SURAHS_DIR: &str = "Surahs";
pub const VERSES_DIR: &str = "Verses";
pub const NOTE_EXTENSION: &str = "md";

/// Naming scheme shared by the generator (links) and the writer (paths).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VaultLayout;

impl VaultLayout {
    /// `1 - Surah Al-Fatihah`
    pub fn surah_note_name(&self, surah: u16, transliterated_name: &str) -> String {
        format!("{surah} - Surah {transliterated_name}")
    }

    /// `Quran 1-7`
    pub fn verse_note_name(&self, surah: u16, verse: u16) -> String {
        format!("Quran {surah}-{verse}")
    }

    /// `Surah 1`, the per-surah folder under the verses root.
    pub fn verse_dir_name(&self, surah: u16) -> String {
        format!("Surah {surah}")
    }

    pub fn surahs_dir(&self) -> PathBuf {
        PathBuf::from(SURAHS_DIR)
    }

    pub fn verses_dir(&self) -> PathBuf {
        PathBuf::from(VERSES_DIR)
    }

    pub fn verse_dir(&self, surah: u16) -> PathBuf {
        self.verses_dir().join(self.verse_dir_name(surah))
    }

    /// Path of a surah note relative to the vault root.
    pub fn surah_path(&self, surah: u16, transliterated_name: &str) -> PathBuf {
        self.surahs_dir()
            .join(note_file_name(self.surah_note_name(surah, transliterated_name)))
    }

    /// Path of a verse note relative to the vault root.
    pub fn verse_path(&self, surah: u16, verse: u16) -> PathBuf {
        self.verse_dir(surah)
            .join(note_file_name(self.verse_note_name(surah, verse)))
    }
}

fn note_file_name(mut name: String) -> String {
    name.push('.');
    name.push_str(NOTE_EXTENSION);
    name
}
