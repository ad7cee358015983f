//! Synthetic datasets for tests
//!
//! Real `quran_db` files are several megabytes each; tests build small datasets with the same
//! shape instead. Every surah gets one verse unless told otherwise, and surah 1 is
//! Al-Fatihah with its seven verses.

use crate::dataset::{Surah, Translation, SURAH_COUNT};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Builds a complete 114-surah dataset, as a [Translation] or as `quran_db` JSON.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    id: String,
    translator: String,
    verse_counts: Vec<u16>,
    texts: HashMap<(u16, u16), String>,
}

impl DatasetBuilder {
    pub fn new(id: impl Into<String>, translator: impl Into<String>) -> Self {
        let mut verse_counts = vec![1; usize::from(SURAH_COUNT)];
        verse_counts[0] = 7;
        Self {
            id: id.into(),
            translator: translator.into(),
            verse_counts,
            texts: HashMap::new(),
        }
    }

    /// Give `surah` exactly `count` verses.
    pub fn verses(mut self, surah: u16, count: u16) -> Self {
        self.verse_counts[usize::from(surah - 1)] = count;
        self
    }

    /// Replace the generated text of one verse.
    pub fn text(mut self, surah: u16, verse: u16, text: impl Into<String>) -> Self {
        self.texts.insert((surah, verse), text.into());
        self
    }

    pub fn transliterated_name(surah: u16) -> String {
        match surah {
            1 => "Al-Fatihah".to_string(),
            n => format!("Name-{n}"),
        }
    }

    fn native_name(surah: u16) -> String {
        match surah {
            1 => "الفاتحة".to_string(),
            n => format!("سورة {n}"),
        }
    }

    fn english_name(surah: u16) -> String {
        match surah {
            1 => "The Opening".to_string(),
            n => format!("Chapter {n}"),
        }
    }

    fn verse_text(&self, surah: u16, verse: u16) -> String {
        self.texts
            .get(&(surah, verse))
            .cloned()
            .unwrap_or_else(|| format!("{} {surah}:{verse}", self.id))
    }

    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        for surah in 1..=SURAH_COUNT {
            let mut ayahs = Map::new();
            for verse in 1..=self.verse_counts[usize::from(surah - 1)] {
                let mut ayah = Map::new();
                ayah.insert(
                    self.translator.clone(),
                    Value::String(self.verse_text(surah, verse)),
                );
                ayahs.insert(verse.to_string(), Value::Object(ayah));
            }
            root.insert(
                surah.to_string(),
                json!({
                    "SurahTransliteratedName": Self::transliterated_name(surah),
                    "SurahArabicName": Self::native_name(surah),
                    "SurahEnglishNames": Self::english_name(surah),
                    "Ayahs": ayahs,
                }),
            );
        }
        Value::Object(root)
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    pub fn build(&self) -> Translation {
        let surahs = (1..=SURAH_COUNT)
            .map(|surah| {
                let verses = (1..=self.verse_counts[usize::from(surah - 1)])
                    .map(|verse| self.verse_text(surah, verse))
                    .collect();
                Surah::new(
                    surah,
                    Self::transliterated_name(surah),
                    Self::native_name(surah),
                    Self::english_name(surah),
                    verses,
                )
            })
            .collect();
        Translation::new(self.id.clone(), self.translator.clone(), surahs)
            .expect("builder produces every surah in order")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_and_built_translation_agree() {
        let builder = DatasetBuilder::new("thestudyquran", "The Study Quran")
            .verses(2, 3)
            .text(2, 3, "custom &mdash; text");
        let parsed = Translation::from_json("thestudyquran", &builder.to_json()).unwrap();
        assert_eq!(parsed, builder.build());
        assert_eq!(parsed.verse(2, 3).unwrap(), "custom &mdash; text");
        assert_eq!(parsed.surah(1).unwrap().verse_count(), 7);
    }
}
