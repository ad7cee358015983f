//! Configuration for quran-obsidian
//!
//! The defaults live in `defaults/quran.default.toml` and are compiled in, so the file doubles as
//! documentation of every setting. [`Loader`] puts the per-user config file, a `--config` file,
//! `QURAN_OBSIDIAN__*` environment variables and command-line overrides over them, in that
//! order, and yields a [`QuranConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, ValueKind};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/quran.default.toml");

/// Prefix of environment overrides, e.g. `QURAN_OBSIDIAN__DATASET__CACHE_DIR`.
pub const ENV_PREFIX: &str = "QURAN_OBSIDIAN";

const USER_CONFIG_FILE: &str = "config.toml";

/// Settings for one quran-obsidian run.
#[derive(Debug, Clone, Deserialize)]
pub struct QuranConfig {
    pub dataset: DatasetConfig,
    pub generation: GenerationConfig,
}

/// Where the `quran_db` dataset comes from and where it is cached.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub repository: String,
    pub excluded: Vec<String>,
    /// `None` selects the platform cache directory.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub reference_translation: String,
    pub native_translation: String,
}

/// Platform directories for quran-obsidian, if the home directory can be resolved.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "quran-obsidian")
}

/// `<config dir>/quran-obsidian/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(USER_CONFIG_FILE))
}

/// Stacks configuration sources, lowest priority first, over the embedded defaults.
///
/// Each `with_*` call adds a layer that wins over every layer added before it.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// TOML file named explicitly by the user, e.g. via `--config`. It must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// TOML file that may or may not be present.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    /// `<config dir>/quran-obsidian/config.toml`, skipped when absent or when the platform has
    /// no config directory.
    pub fn with_user_file(self) -> Self {
        match user_config_path() {
            Some(path) => self.with_optional_file(path),
            None => self,
        }
    }

    /// `QURAN_OBSIDIAN__SECTION__KEY` variables from the process environment.
    pub fn with_env(self) -> Self {
        self.with_environment(environment())
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    fn with_environment(mut self, environment: Environment) -> Self {
        self.builder = self.builder.add_source(environment);
        self
    }

    /// Pin `key` (dotted, e.g. `dataset.cache_dir`) to `value` above every other layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into a [QuranConfig]. Fails on unreadable files or mistyped values.
    pub fn build(self) -> Result<QuranConfig, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("dataset.excluded")
        .try_parsing(true)
}

/// Configuration as shipped, with no user layers applied.
pub fn load_defaults() -> Result<QuranConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(
            config.dataset.repository,
            "https://github.com/ZainRizvi/quran_db.git"
        );
        assert_eq!(
            config.dataset.excluded,
            vec!["transliteration", "transliteration2"]
        );
        assert!(config.dataset.cache_dir.is_none());
        assert_eq!(
            config.generation.reference_translation,
            quran_obsidian::DEFAULT_REFERENCE_TRANSLATION
        );
        assert_eq!(
            config.generation.native_translation,
            quran_obsidian::DEFAULT_NATIVE_TRANSLATION
        );
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("dataset.cache_dir", "/tmp/quran_db")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.dataset.cache_dir, Some(PathBuf::from("/tmp/quran_db")));
    }

    #[test]
    fn file_layers_keep_unset_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[generation]\nreference_translation = \"uthmani\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.generation.reference_translation, "uthmani");
        assert_eq!(config.generation.native_translation, "arabic");
    }

    #[test]
    fn later_file_layers_win() {
        let mut user = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(user, "[generation]\nreference_translation = \"uthmani\"\nnative_translation = \"uthmani\"").unwrap();
        let mut explicit = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(explicit, "[generation]\nnative_translation = \"simple\"").unwrap();

        let config = Loader::new()
            .with_optional_file(user.path())
            .with_file(explicit.path())
            .build()
            .unwrap();
        assert_eq!(config.generation.reference_translation, "uthmani");
        assert_eq!(config.generation.native_translation, "simple");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = Loader::new()
            .with_optional_file(dir.path().join("absent.toml"))
            .build()
            .unwrap();
        assert_eq!(config.generation.native_translation, "arabic");
    }

    #[test]
    fn environment_overrides_files() {
        let vars = HashMap::from([
            (
                "QURAN_OBSIDIAN__DATASET__CACHE_DIR".to_string(),
                "/var/cache/quran_db".to_string(),
            ),
            (
                "QURAN_OBSIDIAN__DATASET__EXCLUDED".to_string(),
                "transliteration,metadata".to_string(),
            ),
        ]);
        let config = Loader::new()
            .with_environment(environment().source(Some(vars)))
            .build()
            .unwrap();
        assert_eq!(
            config.dataset.cache_dir,
            Some(PathBuf::from("/var/cache/quran_db"))
        );
        assert_eq!(config.dataset.excluded, vec!["transliteration", "metadata"]);
    }
}
