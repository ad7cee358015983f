//! # quran-obsidian
//!
//! Generates an Obsidian vault for the Quran: one note per surah, one note per verse, linked
//! together and to each other's neighbours.
//!
//! This is the pure core. It takes translations that are already loaded and returns
//! `(relative path, content)` pairs. Fetching the `quran_db` dataset lives in `quran-db`, and
//! writing files and parsing arguments live in `quran-cli`.
//!
//! ## Layout
//!
//!     .
//!     ├── normalize.rs       # verse-marker stripping, entity decoding
//!     ├── dataset.rs         # validated Translation / Surah model, JSON loading
//!     ├── metadata.rs        # bundled place-of-revelation table
//!     ├── layout.rs          # vault paths and note names
//!     ├── templates          # SurahNote / VerseNote builders over a shared NoteWriter
//!     ├── generator.rs       # Generator: translations -> GeneratedFile values
//!     └── testing.rs         # synthetic datasets shared by the workspace's tests

pub mod dataset;
pub mod error;
pub mod generator;
pub mod layout;
pub mod metadata;
pub mod normalize;
pub mod templates;
pub mod testing;

pub use dataset::{Surah, Translation, SURAH_COUNT};
pub use error::StructureError;
pub use generator::{
    GeneratedFile, GeneratedSurah, Generator, DEFAULT_NATIVE_TRANSLATION,
    DEFAULT_REFERENCE_TRANSLATION,
};
pub use layout::VaultLayout;
pub use metadata::{SurahInfo, SurahMetadata, SurahType};
