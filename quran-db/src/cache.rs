//! Dataset acquisition and translation loading

use crate::error::DbError;
use quran_config::DatasetConfig;
use quran_obsidian::Translation;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

/// Files in the dataset that are not translations of the verses.
pub const DEFAULT_EXCLUDED: [&str; 2] = ["transliteration", "transliteration2"];

const DATASET_DIR: &str = "quran_db";
const TRANSLATION_EXTENSION: &str = "json";

/// A directory holding (or about to hold) a clone of the dataset repository.
#[derive(Debug, Clone)]
pub struct DatasetCache {
    root: PathBuf,
    repository: String,
    excluded: Vec<String>,
}

impl DatasetCache {
    pub fn new(root: impl Into<PathBuf>, repository: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            repository: repository.into(),
            excluded: DEFAULT_EXCLUDED.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Resolve the cache from configuration. Without an explicit `cache_dir` the dataset lives in
    /// `<platform cache dir>/quran_db`.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, DbError> {
        let root = match &config.cache_dir {
            Some(dir) => dir.clone(),
            None => quran_config::project_dirs()
                .ok_or(DbError::MissingCacheDir)?
                .cache_dir()
                .join(DATASET_DIR),
        };
        Ok(Self::new(root, config.repository.clone()).with_excluded(config.excluded.clone()))
    }

    /// Replace the list of file stems that are never offered as translations.
    pub fn with_excluded(mut self, excluded: Vec<String>) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Make sure the dataset is present, cloning it when the cache directory does not exist.
    ///
    /// An existing directory is trusted as-is; it is never updated or validated.
    pub fn ensure(&self) -> Result<&Path, DbError> {
        if self.root.exists() {
            debug!(path = %self.root.display(), "using cached dataset");
            return Ok(&self.root);
        }
        self.clone_repository()?;
        Ok(&self.root)
    }

    fn clone_repository(&self) -> Result<(), DbError> {
        let git = which::which("git").map_err(DbError::GitNotFound)?;
        if let Some(parent) = self.root.parent() {
            fs::create_dir_all(parent).map_err(|source| DbError::io(parent, source))?;
        }

        info!(
            repository = %self.repository,
            path = %self.root.display(),
            "cloning dataset"
        );
        let output = Command::new(git)
            .args(["clone", "--depth", "1"])
            .arg(&self.repository)
            .arg(&self.root)
            .output()
            .map_err(|source| DbError::io(&self.root, source))?;

        if !output.status.success() {
            return Err(DbError::Clone {
                repository: self.repository.clone(),
                path: self.root.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    /// Path of the file backing translation `id`.
    pub fn translation_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{TRANSLATION_EXTENSION}"))
    }

    /// Sorted ids of every translation in the dataset.
    pub fn available_translations(&self) -> Result<Vec<String>, DbError> {
        let root = self.ensure()?;
        let entries = fs::read_dir(root).map_err(|source| DbError::io(root, source))?;

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry.map_err(|source| DbError::io(root, source))?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(TRANSLATION_EXTENSION)
            {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                warn!(path = %path.display(), "skipping dataset file with a non UTF-8 name");
                continue;
            };
            if self.excluded.iter().any(|excluded| excluded == id) {
                continue;
            }
            ids.push(id.to_string());
        }
        ids.sort();
        Ok(ids)
    }

    /// Load and validate one translation.
    pub fn load_translation(&self, id: &str) -> Result<Translation, DbError> {
        self.ensure()?;
        let path = self.translation_path(id);
        if !path.is_file() {
            return Err(DbError::TranslationNotFound {
                id: id.to_string(),
                path,
            });
        }

        debug!(translation = id, path = %path.display(), "loading translation");
        let source = fs::read_to_string(&path).map_err(|source| DbError::io(&path, source))?;
        Ok(Translation::from_json(id, &source)?)
    }

    /// Load the configured translations in order, plus the reference translation.
    ///
    /// The reference is shared with the configured list when it appears there and loaded
    /// separately otherwise.
    pub fn load_set<S: AsRef<str>>(
        &self,
        ids: &[S],
        reference_id: &str,
    ) -> Result<TranslationSet, DbError> {
        let translations = ids
            .iter()
            .map(|id| self.load_translation(id.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let reference = match translations.iter().position(|t| t.id() == reference_id) {
            Some(index) => Reference::Configured(index),
            None => Reference::Separate(self.load_translation(reference_id)?),
        };
        Ok(TranslationSet {
            translations,
            reference,
        })
    }
}

/// Translations loaded for one generation run.
#[derive(Debug, Clone)]
pub struct TranslationSet {
    translations: Vec<Translation>,
    reference: Reference,
}

#[derive(Debug, Clone)]
enum Reference {
    Configured(usize),
    Separate(Translation),
}

impl TranslationSet {
    /// Configured translations, in the order their sources are rendered.
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    /// The translation surah names and verse counts are taken from.
    pub fn reference(&self) -> &Translation {
        match &self.reference {
            Reference::Configured(index) => &self.translations[*index],
            Reference::Separate(translation) => translation,
        }
    }
}
