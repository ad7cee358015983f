//! `generate` and `list` command handlers

use crate::vault::{VaultError, VaultWriter};
use quran_config::QuranConfig;
use quran_db::{DatasetCache, DbError};
use quran_obsidian::{Generator, StructureError, SurahMetadata};
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Unknown translation(s): {}", .0.join(", "))]
    UnknownTranslations(Vec<String>),

    #[error("No translations given")]
    NoTranslations,

    #[error(transparent)]
    Dataset(#[from] DbError),

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error(transparent)]
    Vault(#[from] VaultError),
}

impl CliError {
    /// Print the error, with a hint where one helps, to stderr.
    pub fn report(&self) {
        eprintln!("Error: {self}");
        if matches!(self, CliError::UnknownTranslations(_) | CliError::NoTranslations) {
            eprintln!("Use 'quran-obsidian list' to see available translations.");
        }
    }
}

/// Split a comma-separated `--translations` value, trimming entries and dropping empty ones.
pub fn parse_translation_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Handle the generate command
pub fn handle_generate_command(
    config: &QuranConfig,
    output: &Path,
    translations: &str,
) -> Result<(), CliError> {
    let ids = parse_translation_list(translations);
    if ids.is_empty() {
        return Err(CliError::NoTranslations);
    }

    let cache = DatasetCache::from_config(&config.dataset)?;
    let available = cache.available_translations()?;
    let unknown: Vec<String> = ids
        .iter()
        .filter(|id| !available.contains(*id))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(CliError::UnknownTranslations(unknown));
    }

    println!("Generating Quran files to {}", output.display());
    println!("Translations: {}", ids.join(", "));
    println!();

    let set = cache.load_set(ids.as_slice(), &config.generation.reference_translation)?;
    let generator = Generator::new(set.reference(), SurahMetadata::shared(), set.translations())?
        .with_native_translation(config.generation.native_translation.as_str());

    let writer = VaultWriter::new(output);
    writer.prepare()?;
    let mut written = 0;
    for surah in generator.surahs() {
        let surah = surah?;
        let (number, name, verses) = (
            surah.number,
            surah.transliterated_name.clone(),
            surah.verse_count(),
        );
        written += writer.write_surah(surah)?;
        println!("Generated Surah {number}: {name} ({verses} verses)");
    }
    info!(files = written, "vault written");

    println!();
    println!("Done! Files written to {}", output.display());
    Ok(())
}

/// Handle the list command
pub fn handle_list_command(config: &QuranConfig) -> Result<(), CliError> {
    let cache = DatasetCache::from_config(&config.dataset)?;
    let translations = cache.available_translations()?;

    println!("Available translations:");
    println!();
    for id in &translations {
        println!("  {id}");
    }
    println!();
    println!("Total: {} translations", translations.len());
    Ok(())
}
