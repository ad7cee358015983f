//! Errors raised when input data does not have the shape the generator relies on.

use thiserror::Error;

/// A translation dataset is missing something the notes need, or has it in the wrong form.
///
/// Every variant is fatal for the run: no document built from the offending dataset is valid.
#[derive(Debug, Error)]
pub enum StructureError {
    #[error("translation `{translation}` is not valid JSON: {source}")]
    Json {
        translation: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("translation `{translation}` has no surah {surah}")]
    MissingSurah { translation: String, surah: u16 },
    #[error("translation `{translation}` has unexpected surah key `{key}`")]
    UnexpectedSurah { translation: String, key: String },
    #[error("translation `{translation}` has no verse {surah}:{verse}")]
    MissingVerse {
        translation: String,
        surah: u16,
        verse: u16,
    },
    #[error("translation `{translation}` has invalid verse key `{key}` in surah {surah}")]
    InvalidVerseKey {
        translation: String,
        surah: u16,
        key: String,
    },
    #[error("translation `{translation}` has an empty ayah record at {surah}:{verse}")]
    EmptyAyah {
        translation: String,
        surah: u16,
        verse: u16,
    },
    #[error("translation `{translation}` has no text by `{translator}` at {surah}:{verse}")]
    MissingTranslatorText {
        translation: String,
        translator: String,
        surah: u16,
        verse: u16,
    },
    #[error("translation `{translation}` has non-text verse content at {surah}:{verse}")]
    NonTextVerse {
        translation: String,
        surah: u16,
        verse: u16,
    },
    #[error("surah {0} is outside 1..=114")]
    SurahOutOfRange(u16),
}
