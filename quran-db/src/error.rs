use quran_obsidian::StructureError;
use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("unable to resolve a cache directory; set dataset.cache_dir or pass --cache-dir")]
    MissingCacheDir,

    #[error("git is required to fetch the dataset: {0}")]
    GitNotFound(#[source] which::Error),

    #[error("git clone of {repository} into {} failed ({status}): {stderr}", path.display())]
    Clone {
        repository: String,
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("translation `{id}` not found at {}", path.display())]
    TranslationNotFound { id: String, path: PathBuf },

    #[error(transparent)]
    Structure(#[from] StructureError),
}

impl DbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DbError::Io {
            path: path.into(),
            source,
        }
    }
}
