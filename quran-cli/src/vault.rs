//! Writing generated notes into a vault directory

use quran_obsidian::layout::{SURAHS_DIR, VERSES_DIR};
use quran_obsidian::{GeneratedFile, GeneratedSurah};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct VaultError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Writes [GeneratedFile]s below a vault root, replacing files that already exist.
#[derive(Debug, Clone)]
pub struct VaultWriter {
    root: PathBuf,
}

impl VaultWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the vault root with its `Surahs/` and `Verses/` folders.
    pub fn prepare(&self) -> Result<(), VaultError> {
        for dir in [SURAHS_DIR, VERSES_DIR] {
            create_dir(&self.root.join(dir))?;
        }
        Ok(())
    }

    /// Write one file, creating its parent directory when needed. Returns the absolute path.
    pub fn write_file(&self, file: &GeneratedFile) -> Result<PathBuf, VaultError> {
        let path = self.root.join(&file.path);
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        fs::write(&path, file.content.as_bytes()).map_err(|source| VaultError {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Write a surah note and all of its verse notes. Returns the number of files written.
    pub fn write_surah(&self, surah: GeneratedSurah) -> Result<usize, VaultError> {
        self.write_all(surah.into_files())
    }

    pub fn write_all<I>(&self, files: I) -> Result<usize, VaultError>
    where
        I: IntoIterator<Item = GeneratedFile>,
    {
        let mut written = 0;
        for file in files {
            self.write_file(&file)?;
            written += 1;
        }
        Ok(written)
    }
}

fn create_dir(path: &Path) -> Result<(), VaultError> {
    fs::create_dir_all(path).map_err(|source| VaultError {
        path: path.to_path_buf(),
        source,
    })
}
