use super::writer::{aliased_link, wiki_link, FrontMatter, NoteWriter};
use super::Note;
use crate::layout::VaultLayout;
use crate::normalize::{decode_entities, strip_verse_markers};
use std::borrow::Cow;
use std::path::PathBuf;

/// How a source block presents its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStyle {
    /// Native script: enlarged, unquoted, citation on its own line.
    Native,
    /// Translation: quoted, citation on the same line.
    Quoted,
}

/// One translation's rendering of a verse, already cleaned for its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseSource<'a> {
    pub translator: &'a str,
    pub text: Cow<'a, str>,
    pub style: SourceStyle,
}

impl<'a> VerseSource<'a> {
    /// Native-script text with its end-of-ayah markers removed.
    pub fn native(translator: &'a str, raw: &'a str) -> Self {
        Self {
            translator,
            text: strip_verse_markers(raw),
            style: SourceStyle::Native,
        }
    }

    /// Translated text with HTML character references decoded.
    pub fn translated(translator: &'a str, raw: &'a str) -> Self {
        Self {
            translator,
            text: decode_entities(raw),
            style: SourceStyle::Quoted,
        }
    }

    fn render(&self, citation: &str) -> String {
        match self.style {
            SourceStyle::Native => format!(
                "##### {}\n<big><big><big>{}</big></big></big>\n--{citation}",
                self.translator, self.text
            ),
            SourceStyle::Quoted => {
                format!("##### {}\n\"{}\"  --{citation}", self.translator, self.text)
            }
        }
    }
}

/// Note for a single verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseNote<'a> {
    pub surah: u16,
    pub verse: u16,
    pub total_verses: u16,
    pub transliterated_name: &'a str,
    /// Rendered in order under `# Sources`.
    pub sources: Vec<VerseSource<'a>>,
}

impl VerseNote<'_> {
    /// Attribution line closing every source block of this verse.
    pub fn citation(&self) -> String {
        format!(
            "Quran {}:{}, Surah {}",
            self.surah, self.verse, self.transliterated_name
        )
    }

    /// Previous/next verse links; either side is dropped at the surah's boundaries.
    pub fn navigation(&self) -> String {
        let mut links = Vec::with_capacity(2);
        if self.verse > 1 {
            let previous = VaultLayout.verse_note_name(self.surah, self.verse - 1);
            links.push(aliased_link(&previous, "prev verse"));
        }
        if self.verse < self.total_verses {
            let next = VaultLayout.verse_note_name(self.surah, self.verse + 1);
            links.push(aliased_link(&next, "next verse"));
        }
        links.join(", ")
    }

    fn aliases(&self) -> [String; 2] {
        [
            format!("Quran {}:{}", self.surah, self.verse),
            format!(
                "Surah {} {}:{}",
                self.transliterated_name, self.surah, self.verse
            ),
        ]
    }
}

impl Note for VerseNote<'_> {
    fn note_name(&self) -> String {
        VaultLayout.verse_note_name(self.surah, self.verse)
    }

    fn relative_path(&self) -> PathBuf {
        VaultLayout.verse_path(self.surah, self.verse)
    }

    fn render(&self) -> String {
        let front_matter = FrontMatter::new()
            .field("surah_num", self.surah)
            .field("verse", self.verse)
            .list("aliases", self.aliases());
        let parent = VaultLayout.surah_note_name(self.surah, self.transliterated_name);
        let citation = self.citation();
        let sources = self
            .sources
            .iter()
            .map(|source| source.render(&citation))
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut writer = NoteWriter::new();
        writer
            .front_matter(&front_matter)
            .line(format!("{}, Verse {}", wiki_link(&parent), self.verse))
            .blank()
            .line(format!("Links: {}", self.navigation()))
            .blank()
            .heading(1, "Sources")
            .blank()
            .line(sources)
            .blank()
            .blank()
            // Existing vaults link to this heading, typo included.
            .heading(1, "Notes Refrencing Verse")
            .backlinks_query(self.surah)
            .blank();
        writer.finish()
    }
}
