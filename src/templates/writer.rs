//! Line-oriented markdown builder shared by the note templates.

use std::fmt::Display;

/// `[[target]]`
pub fn wiki_link(target: &str) -> String {
    format!("[[{target}]]")
}

/// `[[target|alias]]`
pub fn aliased_link(target: &str, alias: &str) -> String {
    format!("[[{target}|{alias}]]")
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

/// YAML-style properties block delimited by `---` lines.
///
/// Values are written verbatim, without YAML quoting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: Vec<(&'static str, FieldValue)>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &'static str, value: impl Display) -> Self {
        self.fields
            .push((key, FieldValue::Scalar(value.to_string())));
        self
    }

    pub fn list<I, S>(mut self, key: &'static str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.fields.push((key, FieldValue::List(items)));
        self
    }

    fn write_to(&self, out: &mut String) {
        out.push_str("---\n");
        for (key, value) in &self.fields {
            match value {
                FieldValue::Scalar(text) => {
                    out.push_str(key);
                    out.push_str(": ");
                    out.push_str(text);
                    out.push('\n');
                }
                FieldValue::List(items) => {
                    out.push_str(key);
                    out.push_str(":\n");
                    for item in items {
                        out.push_str("  - ");
                        out.push_str(item);
                        out.push('\n');
                    }
                }
            }
        }
        out.push_str("---\n");
    }
}

/// Accumulates a note body one line at a time. Every method terminates its output with `\n`.
#[derive(Debug, Default)]
pub struct NoteWriter {
    buf: String,
}

impl NoteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn front_matter(&mut self, front_matter: &FrontMatter) -> &mut Self {
        front_matter.write_to(&mut self.buf);
        self
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// ATX heading; `level` is clamped to 1..=6.
    pub fn heading(&mut self, level: usize, text: impl AsRef<str>) -> &mut Self {
        let level = level.clamp(1, 6);
        for _ in 0..level {
            self.buf.push('#');
        }
        self.buf.push(' ');
        self.line(text)
    }

    /// Dataview query listing notes that link here but are not part of surah `surah`.
    pub fn backlinks_query(&mut self, surah: u16) -> &mut Self {
        self.line("```dataview")
            .line("list")
            .line("from [[]]")
            .line(format!("where !contains(surah_num, {surah})"))
            .line("```")
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_matter_renders_scalars_then_lists() {
        let front_matter = FrontMatter::new()
            .field("surah_num", 1)
            .field("type", "meccan")
            .list("aliases", ["Quran 1:1", "Surah Al-Fatihah 1:1"]);
        let mut writer = NoteWriter::new();
        writer.front_matter(&front_matter);

        assert_eq!(
            writer.finish(),
            "---\nsurah_num: 1\ntype: meccan\naliases:\n  - Quran 1:1\n  - Surah Al-Fatihah 1:1\n---\n"
        );
    }

    #[test]
    fn headings_are_clamped() {
        let mut writer = NoteWriter::new();
        writer.heading(0, "Top").heading(5, "Source").heading(9, "Deep");
        assert_eq!(writer.finish(), "# Top\n##### Source\n###### Deep\n");
    }

    #[test]
    fn backlinks_query_block() {
        let mut writer = NoteWriter::new();
        writer.backlinks_query(36);
        insta::assert_snapshot!(writer.finish().trim_end(), @r"
        ```dataview
        list
        from [[]]
        where !contains(surah_num, 36)
        ```
        ");
    }

    #[test]
    fn links() {
        assert_eq!(wiki_link("Quran 1-1"), "[[Quran 1-1]]");
        assert_eq!(
            aliased_link("Quran 1-2", "next verse"),
            "[[Quran 1-2|next verse]]"
        );
    }
}
