//! Static per-surah metadata
//!
//! The bundled table records where each surah was revealed. Surah notes expose it as the `type`
//! front-matter field.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fmt;

const BUNDLED_METADATA: &str = include_str!("../data/surah_metadata.json");

static BUNDLED: Lazy<SurahMetadata> = Lazy::new(|| {
    serde_json::from_str(BUNDLED_METADATA).expect("bundled surah metadata is valid JSON")
});

/// Place-of-revelation category written to the `type` field of a surah note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurahType {
    Meccan,
    Medinan,
    Unknown,
}

impl SurahType {
    /// Classify a place of revelation, ignoring case.
    pub fn from_place(place: &str) -> Self {
        if place.eq_ignore_ascii_case("mecca") {
            SurahType::Meccan
        } else if place.eq_ignore_ascii_case("medina") {
            SurahType::Medinan
        } else {
            SurahType::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurahType::Meccan => "meccan",
            SurahType::Medinan => "medinan",
            SurahType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SurahType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurahInfo {
    pub number: u16,
    pub place: String,
}

/// Ordered metadata entries; entry `n - 1` describes surah `n`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SurahMetadata {
    entries: Vec<SurahInfo>,
}

impl SurahMetadata {
    pub fn new(entries: Vec<SurahInfo>) -> Self {
        Self { entries }
    }

    /// The table shipped with the crate. Parsed once per process.
    pub fn bundled() -> Self {
        Self::shared().clone()
    }

    /// Borrow the shipped table without copying it.
    pub fn shared() -> &'static SurahMetadata {
        &BUNDLED
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn entries(&self) -> &[SurahInfo] {
        &self.entries
    }

    /// Type of a 1-indexed surah. Surahs without an entry are [SurahType::Unknown].
    pub fn surah_type(&self, surah: u16) -> SurahType {
        usize::from(surah)
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(|info| SurahType::from_place(&info.place))
            .unwrap_or(SurahType::Unknown)
    }
}

impl Default for SurahMetadata {
    fn default() -> Self {
        Self::bundled()
    }
}
