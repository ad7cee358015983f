//! Command-line interface for quran-obsidian
//! Generates an Obsidian vault of surah and verse notes from the `quran_db` dataset.
//!
//! Usage:
//!   quran-obsidian generate -o `<dir>` -t `<a,b,...>`   - Write the vault with the given translations
//!   quran-obsidian list                                 - List translations in the dataset

mod commands;
mod vault;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use quran_config::{ConfigError, Loader, QuranConfig};
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt};

fn build_cli() -> Command {
    Command::new("quran-obsidian")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Generate Obsidian-compatible markdown files for Quran verses and surahs with multiple translations",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Load an additional configuration file")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("cache-dir")
                .long("cache-dir")
                .value_name("DIR")
                .help("Directory holding the quran_db dataset (cloned on first use)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate Quran markdown files")
                .long_about(
                    "Generate Obsidian markdown files for all surahs and verses with specified translations.",
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .help("Output directory for generated files")
                        .value_parser(value_parser!(PathBuf))
                        .required(true),
                )
                .arg(
                    Arg::new("translations")
                        .long("translations")
                        .short('t')
                        .value_name("LIST")
                        .help(
                            "Comma-separated list of translations to include (use 'list' command to see available options)",
                        )
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List available translations")
                .long_about("List all available translations from the quran_db database."),
        )
}

fn main() {
    let mut cli = build_cli();
    let matches = cli.get_matches_mut();

    init_tracing(verbosity_level(matches.get_count("verbose")));

    let Some((name, sub_matches)) = matches.subcommand() else {
        if let Err(err) = cli.print_help() {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
        return;
    };

    let config = load_config(&matches).unwrap_or_else(|err| {
        eprintln!("Error: invalid configuration: {err}");
        std::process::exit(1);
    });

    let result = match name {
        "generate" => {
            let output = sub_matches
                .get_one::<PathBuf>("output")
                .expect("output is required");
            let translations = sub_matches
                .get_one::<String>("translations")
                .expect("translations are required");
            commands::handle_generate_command(&config, output, translations)
        }
        "list" => commands::handle_list_command(&config),
        _ => unreachable!("clap rejects unknown subcommands"),
    };

    if let Err(err) = result {
        err.report();
        std::process::exit(1);
    }
}

fn verbosity_level(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

/// Defaults, then the user file, `--config`, environment, and finally `--cache-dir`.
fn load_config(matches: &ArgMatches) -> Result<QuranConfig, ConfigError> {
    let mut loader = Loader::new().with_user_file();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    if let Some(dir) = matches.get_one::<PathBuf>("cache-dir") {
        loader = loader.set_override("dataset.cache_dir", dir.to_string_lossy().into_owned())?;
    }
    loader.build()
}
