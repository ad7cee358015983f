use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use quran_obsidian::testing::DatasetBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary home holding a fixture dataset, so no test ever clones from the network.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("quran_db");
        fs::create_dir(&cache).unwrap();
        let datasets = [
            DatasetBuilder::new("arabic", "Arabic")
                .text(1, 1, "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ ۝١"),
            DatasetBuilder::new("thestudyquran", "The Study Quran")
                .text(1, 1, "In the Name of God&#44; the Compassionate&#44; the Merciful"),
            DatasetBuilder::new("transliteration", "Transliteration"),
        ];
        for (id, builder) in ["arabic", "thestudyquran", "transliteration"]
            .iter()
            .zip(datasets)
        {
            fs::write(cache.join(format!("{id}.json")), builder.to_json()).unwrap();
        }
        Self { dir }
    }

    fn cache_dir(&self) -> PathBuf {
        self.dir.path().join("quran_db")
    }

    fn output_dir(&self) -> PathBuf {
        self.dir.path().join("vault")
    }

    fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("quran-obsidian");
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .arg("--cache-dir")
            .arg(self.cache_dir());
        cmd
    }
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn list_prints_available_translations() {
    let fixture = Fixture::new();
    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout("Available translations:\n\n  arabic\n  thestudyquran\n\nTotal: 2 translations\n");
}

#[test]
fn no_subcommand_prints_help() {
    let fixture = Fixture::new();
    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("generate").and(predicate::str::contains("list")));
}

#[test]
fn unknown_translation_is_rejected_before_writing() {
    let fixture = Fixture::new();
    fixture
        .command()
        .arg("generate")
        .arg("-o")
        .arg(fixture.output_dir())
        .arg("-t")
        .arg("arabic, sahih,pickthall")
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Error: Unknown translation(s): sahih, pickthall").and(
                predicate::str::contains(
                    "Use 'quran-obsidian list' to see available translations.",
                ),
            ),
        );
    assert!(!fixture.output_dir().exists());
}

#[test]
fn excluded_dataset_files_are_not_valid_translations() {
    let fixture = Fixture::new();
    fixture
        .command()
        .args(["generate", "-t", "transliteration", "-o"])
        .arg(fixture.output_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown translation(s): transliteration",
        ));
}

#[test]
fn generate_writes_the_vault() {
    let fixture = Fixture::new();
    let output = fixture.output_dir();
    fixture
        .command()
        .arg("generate")
        .arg("--output")
        .arg(&output)
        .arg("--translations")
        .arg(" arabic , thestudyquran")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(format!(
                "Generating Quran files to {}\nTranslations: arabic, thestudyquran\n\n\
                 Generated Surah 1: Al-Fatihah (7 verses)\nGenerated Surah 2: Name-2 (1 verses)\n",
                output.display()
            ))
            .and(predicate::str::ends_with(format!(
                "Generated Surah 114: Name-114 (1 verses)\n\nDone! Files written to {}\n",
                output.display()
            ))),
        );

    let surahs = fs::read_dir(output.join("Surahs")).unwrap().count();
    let verse_dirs = fs::read_dir(output.join("Verses")).unwrap().count();
    assert_eq!(surahs, 114);
    assert_eq!(verse_dirs, 114);

    let surah = read(output.join("Surahs").join("1 - Surah Al-Fatihah.md"));
    assert!(surah.contains("total_verses: 7\n"));
    assert!(surah.contains("type: meccan\n"));

    let verse = read(output.join("Verses").join("Surah 1").join("Quran 1-1.md"));
    assert!(verse.contains(
        "##### Arabic\n<big><big><big>بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ</big></big></big>\n--Quran 1:1, Surah Al-Fatihah"
    ));
    assert!(verse.contains(
        "##### The Study Quran\n\"In the Name of God, the Compassionate, the Merciful\"  --Quran 1:1, Surah Al-Fatihah"
    ));
    assert!(output
        .join("Verses")
        .join("Surah 1")
        .join("Quran 1-7.md")
        .is_file());
}

#[test]
fn rerunning_generate_overwrites_notes() {
    let fixture = Fixture::new();
    let output = fixture.output_dir();
    let stale = output.join("Surahs").join("1 - Surah Al-Fatihah.md");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "stale").unwrap();

    fixture
        .command()
        .args(["generate", "-t", "thestudyquran", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert!(read(&stale).starts_with("---\nsurah_num: 1\n"));
}

#[test]
fn explicit_config_file_sets_the_reference_translation() {
    let fixture = Fixture::new();
    let config = fixture.dir.path().join("quran.toml");
    fs::write(
        &config,
        "[generation]\nreference_translation = \"thestudyquran\"\n",
    )
    .unwrap();

    fixture
        .command()
        .arg("--config")
        .arg(&config)
        .args(["generate", "-t", "arabic", "-o"])
        .arg(fixture.output_dir())
        .assert()
        .success();
}

#[test]
fn missing_config_file_fails() {
    let fixture = Fixture::new();
    fixture
        .command()
        .arg("--config")
        .arg(fixture.dir.path().join("absent.toml"))
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid configuration"));
}
