use super::writer::{wiki_link, FrontMatter, NoteWriter};
use super::Note;
use crate::layout::VaultLayout;
use crate::metadata::SurahType;
use std::path::PathBuf;

/// Overview note for one surah.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahNote<'a> {
    pub number: u16,
    pub native_name: &'a str,
    pub transliterated_name: &'a str,
    pub english_name: &'a str,
    pub total_verses: u16,
    pub surah_type: SurahType,
}

impl SurahNote<'_> {
    fn aliases(&self) -> [String; 3] {
        [
            format!("Surah {}", self.native_name),
            format!("Surah {}", self.transliterated_name),
            format!("Surah {}", self.english_name),
        ]
    }

    fn verse_list(&self) -> String {
        (1..=self.total_verses)
            .map(|verse| {
                let target = VaultLayout.verse_note_name(self.number, verse);
                format!("- {}", wiki_link(&target))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Note for SurahNote<'_> {
    fn note_name(&self) -> String {
        VaultLayout.surah_note_name(self.number, self.transliterated_name)
    }

    fn relative_path(&self) -> PathBuf {
        VaultLayout.surah_path(self.number, self.transliterated_name)
    }

    fn render(&self) -> String {
        let front_matter = FrontMatter::new()
            .field("surah_num", self.number)
            .field("name", self.native_name)
            .field("translation", self.english_name)
            .field("total_verses", self.total_verses)
            .field("type", self.surah_type)
            .list("aliases", self.aliases());

        let mut writer = NoteWriter::new();
        writer
            .front_matter(&front_matter)
            .heading(1, format!("Surah **{}**", self.native_name))
            .blank()
            .heading(1, "Notes")
            .blank()
            .heading(1, "References")
            .backlinks_query(self.number)
            .blank()
            .heading(1, "Verses")
            .line(self.verse_list())
            .blank();
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn al_fatihah() -> SurahNote<'static> {
        SurahNote {
            number: 1,
            native_name: "الفاتحة",
            transliterated_name: "Al-Fatihah",
            english_name: "The Opening",
            total_verses: 7,
            surah_type: SurahType::Meccan,
        }
    }

    #[test]
    fn renders_exact_surah_note() {
        let expected = "---
surah_num: 1
name: الفاتحة
translation: The Opening
total_verses: 7
type: meccan
aliases:
  - Surah الفاتحة
  - Surah Al-Fatihah
  - Surah The Opening
---
# Surah **الفاتحة**

# Notes

# References
```dataview
list
from [[]]
where !contains(surah_num, 1)
```

# Verses
- [[Quran 1-1]]
- [[Quran 1-2]]
- [[Quran 1-3]]
- [[Quran 1-4]]
- [[Quran 1-5]]
- [[Quran 1-6]]
- [[Quran 1-7]]

";
        assert_eq!(al_fatihah().render(), expected);
    }

    #[test]
    fn names_and_paths() {
        let note = al_fatihah();
        assert_eq!(note.note_name(), "1 - Surah Al-Fatihah");
        assert_eq!(
            note.relative_path(),
            Path::new("Surahs").join("1 - Surah Al-Fatihah.md")
        );
    }

    #[test]
    fn unknown_type_is_written_as_is() {
        let note = SurahNote {
            surah_type: SurahType::Unknown,
            ..al_fatihah()
        };
        assert!(note.render().contains("\ntype: unknown\n"));
    }
}
