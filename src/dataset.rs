//! Translation datasets
//!
//!     A translation is loaded from one `quran_db` JSON file:
//!
//!     ```text
//!     {
//!       "1": {
//!         "SurahTransliteratedName": "Al-Fatihah",
//!         "SurahArabicName": "الفاتحة",
//!         "SurahEnglishNames": "The Opening",
//!         "Ayahs": { "1": { "<Translator>": "<verse text>" }, ... }
//!       },
//!       ...
//!     }
//!     ```
//!
//!     The translator's display name only appears as the key of each ayah record. It is read once,
//!     from the first key of verse 1:1 (the JSON is parsed with key order preserved), and then
//!     every other ayah record is required to carry that same key. After loading, a [Translation]
//!     is a validated, read-only view: surahs 1..=114 in order, each with contiguous verses.

use crate::error::StructureError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::Read;

/// Number of surahs every dataset must cover.
pub const SURAH_COUNT: u16 = 114;

/// One translation (or the native-script text), validated and indexed by surah.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    id: String,
    translator: String,
    surahs: Vec<Surah>,
}

/// One surah of a translation. Verse `n` lives at index `n - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surah {
    number: u16,
    transliterated_name: String,
    native_name: String,
    english_name: String,
    verses: Vec<String>,
}

impl Surah {
    pub fn new(
        number: u16,
        transliterated_name: impl Into<String>,
        native_name: impl Into<String>,
        english_name: impl Into<String>,
        verses: Vec<String>,
    ) -> Self {
        Self {
            number,
            transliterated_name: transliterated_name.into(),
            native_name: native_name.into(),
            english_name: english_name.into(),
            verses,
        }
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn transliterated_name(&self) -> &str {
        &self.transliterated_name
    }

    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    pub fn english_name(&self) -> &str {
        &self.english_name
    }

    pub fn verse_count(&self) -> u16 {
        self.verses.len() as u16
    }

    /// Text of a 1-indexed verse.
    pub fn verse(&self, verse: u16) -> Option<&str> {
        let index = usize::from(verse).checked_sub(1)?;
        self.verses.get(index).map(String::as_str)
    }
}

impl Translation {
    /// Assemble a translation from already-validated parts.
    ///
    /// `surahs` must hold surahs 1..=114 in order.
    pub fn new(
        id: impl Into<String>,
        translator: impl Into<String>,
        surahs: Vec<Surah>,
    ) -> Result<Self, StructureError> {
        let id = id.into();
        for expected in 1..=SURAH_COUNT {
            match surahs.get(usize::from(expected - 1)) {
                Some(surah) if surah.number == expected => {}
                Some(surah) => {
                    return Err(StructureError::UnexpectedSurah {
                        translation: id,
                        key: surah.number.to_string(),
                    })
                }
                None => {
                    return Err(StructureError::MissingSurah {
                        translation: id,
                        surah: expected,
                    })
                }
            }
        }
        if let Some(extra) = surahs.get(usize::from(SURAH_COUNT)) {
            return Err(StructureError::UnexpectedSurah {
                translation: id,
                key: extra.number.to_string(),
            });
        }
        Ok(Self {
            id,
            translator: translator.into(),
            surahs,
        })
    }

    /// Parse a translation from its JSON source.
    pub fn from_json(id: impl Into<String>, source: &str) -> Result<Self, StructureError> {
        let id = id.into();
        match serde_json::from_str::<RawTranslation>(source) {
            Ok(raw) => Self::from_raw(id, raw),
            Err(source) => Err(StructureError::Json {
                translation: id,
                source,
            }),
        }
    }

    /// Parse a translation from a JSON stream.
    pub fn from_reader<R: Read>(id: impl Into<String>, reader: R) -> Result<Self, StructureError> {
        let id = id.into();
        match serde_json::from_reader::<_, RawTranslation>(reader) {
            Ok(raw) => Self::from_raw(id, raw),
            Err(source) => Err(StructureError::Json {
                translation: id,
                source,
            }),
        }
    }

    fn from_raw(id: String, raw: RawTranslation) -> Result<Self, StructureError> {
        let mut slots: Vec<Option<RawSurah>> = (0..SURAH_COUNT).map(|_| None).collect();
        for (key, surah) in raw {
            let number = key
                .parse::<u16>()
                .ok()
                .filter(|n| (1..=SURAH_COUNT).contains(n))
                .ok_or_else(|| StructureError::UnexpectedSurah {
                    translation: id.clone(),
                    key: key.clone(),
                })?;
            slots[usize::from(number - 1)] = Some(surah);
        }

        let mut raw_surahs = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            let number = index as u16 + 1;
            let surah = slot.ok_or_else(|| StructureError::MissingSurah {
                translation: id.clone(),
                surah: number,
            })?;
            raw_surahs.push((number, surah));
        }

        let translator = discover_translator(&id, &raw_surahs[0].1)?;
        let surahs = raw_surahs
            .into_iter()
            .map(|(number, surah)| surah.validate(&id, &translator, number))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(translation = %id, %translator, "loaded translation");
        Ok(Self {
            id,
            translator,
            surahs,
        })
    }

    /// File stem the translation was loaded from, e.g. `arabic`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the translator, used as the heading of its source subsection.
    pub fn translator(&self) -> &str {
        &self.translator
    }

    pub fn surahs(&self) -> &[Surah] {
        &self.surahs
    }

    pub fn surah(&self, number: u16) -> Result<&Surah, StructureError> {
        if !(1..=SURAH_COUNT).contains(&number) {
            return Err(StructureError::SurahOutOfRange(number));
        }
        self.surahs
            .get(usize::from(number - 1))
            .ok_or_else(|| StructureError::MissingSurah {
                translation: self.id.clone(),
                surah: number,
            })
    }

    /// Text of verse `surah:verse`, or a structural error naming what is missing.
    pub fn verse(&self, surah: u16, verse: u16) -> Result<&str, StructureError> {
        self.surah(surah)?
            .verse(verse)
            .ok_or_else(|| StructureError::MissingVerse {
                translation: self.id.clone(),
                surah,
                verse,
            })
    }
}

type RawTranslation = BTreeMap<String, RawSurah>;

#[derive(Debug, Deserialize)]
struct RawSurah {
    #[serde(rename = "SurahTransliteratedName")]
    transliterated_name: String,
    #[serde(rename = "SurahArabicName")]
    native_name: String,
    #[serde(rename = "SurahEnglishNames")]
    english_names: EnglishNames,
    #[serde(rename = "Ayahs")]
    ayahs: BTreeMap<String, Map<String, Value>>,
}

/// Most datasets carry a single English name; a few list several.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnglishNames {
    One(String),
    Many(Vec<String>),
}

impl EnglishNames {
    fn joined(self) -> String {
        match self {
            EnglishNames::One(name) => name,
            EnglishNames::Many(names) => names.join(", "),
        }
    }
}

fn discover_translator(id: &str, first: &RawSurah) -> Result<String, StructureError> {
    let ayah = first
        .ayahs
        .get("1")
        .ok_or_else(|| StructureError::MissingVerse {
            translation: id.to_string(),
            surah: 1,
            verse: 1,
        })?;
    ayah.keys()
        .next()
        .cloned()
        .ok_or_else(|| StructureError::EmptyAyah {
            translation: id.to_string(),
            surah: 1,
            verse: 1,
        })
}

impl RawSurah {
    fn validate(self, id: &str, translator: &str, number: u16) -> Result<Surah, StructureError> {
        let mut numbered = BTreeMap::new();
        for (key, ayah) in self.ayahs {
            let verse = key
                .parse::<u16>()
                .ok()
                .filter(|v| *v >= 1)
                .ok_or_else(|| StructureError::InvalidVerseKey {
                    translation: id.to_string(),
                    surah: number,
                    key: key.clone(),
                })?;
            numbered.insert(verse, ayah);
        }

        let mut verses = Vec::with_capacity(numbered.len());
        for (index, (verse, ayah)) in numbered.into_iter().enumerate() {
            let expected = index as u16 + 1;
            if verse != expected {
                return Err(StructureError::MissingVerse {
                    translation: id.to_string(),
                    surah: number,
                    verse: expected,
                });
            }
            if ayah.is_empty() {
                return Err(StructureError::EmptyAyah {
                    translation: id.to_string(),
                    surah: number,
                    verse,
                });
            }
            let text = ayah
                .get(translator)
                .ok_or_else(|| StructureError::MissingTranslatorText {
                    translation: id.to_string(),
                    translator: translator.to_string(),
                    surah: number,
                    verse,
                })?
                .as_str()
                .ok_or_else(|| StructureError::NonTextVerse {
                    translation: id.to_string(),
                    surah: number,
                    verse,
                })?;
            verses.push(text.to_string());
        }

        Ok(Surah {
            number,
            transliterated_name: self.transliterated_name,
            native_name: self.native_name,
            english_name: self.english_names.joined(),
            verses,
        })
    }
}
