//! Local cache of the `quran_db` dataset.
//!
//! The dataset is a git repository of one JSON file per translation. [`DatasetCache`] owns the
//! directory it lives in: it clones the repository on first use, lists the translations present,
//! and loads them into validated [`quran_obsidian::Translation`] values.

pub mod cache;
pub mod error;

pub use cache::{DatasetCache, TranslationSet, DEFAULT_EXCLUDED};
pub use error::DbError;
