//! Document generation
//!
//!     [Generator] turns loaded translations into the full set of vault notes:
//!
//!     - one surah note per surah, named and counted from the reference translation;
//!     - one verse note per verse, with one source block per configured translation in the order
//!       the caller listed them.
//!
//!     The generator only borrows its inputs and returns [GeneratedFile] values; writing them is
//!     left to the caller. Surahs are independent of each other, so [Generator::surah] can be
//!     driven from several threads over the same generator.
//!
//!     All translations are checked against the reference when the generator is built. A
//!     translation with fewer verses than the reference fails there, before any note is produced.

use crate::dataset::{Translation, SURAH_COUNT};
use crate::error::StructureError;
use crate::metadata::SurahMetadata;
use crate::templates::{Note, SurahNote, VerseNote, VerseSource};
use std::path::PathBuf;

/// Identifier of the native-script dataset in `quran_db`.
pub const DEFAULT_NATIVE_TRANSLATION: &str = "arabic";

/// Identifier of the dataset that supplies surah names and verse counts.
pub const DEFAULT_REFERENCE_TRANSLATION: &str = "arabic";

/// A rendered note and where it belongs in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative to the vault root.
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn from_note<N: Note + ?Sized>(note: &N) -> Self {
        Self {
            path: note.relative_path(),
            content: note.render(),
        }
    }
}

/// Everything generated for one surah.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSurah {
    pub number: u16,
    pub transliterated_name: String,
    pub surah: GeneratedFile,
    /// Verse notes in verse order.
    pub verses: Vec<GeneratedFile>,
}

impl GeneratedSurah {
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    /// The surah note followed by its verse notes.
    pub fn into_files(self) -> impl Iterator<Item = GeneratedFile> {
        std::iter::once(self.surah).chain(self.verses)
    }
}

#[derive(Debug, Clone)]
pub struct Generator<'a> {
    reference: &'a Translation,
    metadata: &'a SurahMetadata,
    translations: Vec<&'a Translation>,
    native_translation: String,
}

impl<'a> Generator<'a> {
    /// Build a generator over `translations`, rendered in the given order.
    ///
    /// Fails if any translation lacks a surah or verse that the reference has.
    pub fn new<I>(
        reference: &'a Translation,
        metadata: &'a SurahMetadata,
        translations: I,
    ) -> Result<Self, StructureError>
    where
        I: IntoIterator<Item = &'a Translation>,
    {
        let translations: Vec<&'a Translation> = translations.into_iter().collect();
        for translation in &translations {
            check_coverage(reference, translation)?;
        }
        Ok(Self {
            reference,
            metadata,
            translations,
            native_translation: DEFAULT_NATIVE_TRANSLATION.to_string(),
        })
    }

    /// Identifier of the translation rendered as native script.
    pub fn with_native_translation(mut self, id: impl Into<String>) -> Self {
        self.native_translation = id.into();
        self
    }

    pub fn translations(&self) -> &[&'a Translation] {
        &self.translations
    }

    /// Surah note and verse notes for surah `number`.
    pub fn surah(&self, number: u16) -> Result<GeneratedSurah, StructureError> {
        if !(1..=SURAH_COUNT).contains(&number) {
            return Err(StructureError::SurahOutOfRange(number));
        }
        let info = self.reference.surah(number)?;
        let total_verses = info.verse_count();

        let surah_note = SurahNote {
            number,
            native_name: info.native_name(),
            transliterated_name: info.transliterated_name(),
            english_name: info.english_name(),
            total_verses,
            surah_type: self.metadata.surah_type(number),
        };

        let mut verses = Vec::with_capacity(usize::from(total_verses));
        for verse in 1..=total_verses {
            let note = VerseNote {
                surah: number,
                verse,
                total_verses,
                transliterated_name: info.transliterated_name(),
                sources: self.sources(number, verse)?,
            };
            verses.push(GeneratedFile::from_note(&note));
        }

        tracing::debug!(
            surah = number,
            name = info.transliterated_name(),
            verses = total_verses,
            "rendered surah"
        );

        Ok(GeneratedSurah {
            number,
            transliterated_name: info.transliterated_name().to_string(),
            surah: GeneratedFile::from_note(&surah_note),
            verses,
        })
    }

    /// Surahs 1..=114 in order.
    pub fn surahs(&self) -> impl Iterator<Item = Result<GeneratedSurah, StructureError>> + '_ {
        (1..=SURAH_COUNT).map(move |number| self.surah(number))
    }

    /// Every note of the run: each surah note followed by its verse notes, surah by surah.
    pub fn generate_all(&self) -> Result<Vec<GeneratedFile>, StructureError> {
        let mut files = Vec::new();
        for surah in self.surahs() {
            files.extend(surah?.into_files());
        }
        Ok(files)
    }

    fn sources(&self, surah: u16, verse: u16) -> Result<Vec<VerseSource<'a>>, StructureError> {
        self.translations
            .iter()
            .map(|&translation| {
                let text = translation.verse(surah, verse)?;
                Ok(if translation.id() == self.native_translation {
                    VerseSource::native(translation.translator(), text)
                } else {
                    VerseSource::translated(translation.translator(), text)
                })
            })
            .collect()
    }
}

fn check_coverage(reference: &Translation, translation: &Translation) -> Result<(), StructureError> {
    for expected in reference.surahs() {
        let actual = translation.surah(expected.number())?;
        if actual.verse_count() < expected.verse_count() {
            return Err(StructureError::MissingVerse {
                translation: translation.id().to_string(),
                surah: expected.number(),
                verse: actual.verse_count() + 1,
            });
        }
    }
    Ok(())
}
