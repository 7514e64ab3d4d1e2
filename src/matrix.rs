//! The coverage table: one row per tested character, one column per font.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::font::Typeface;

/// Columns every table starts with, before the font columns.
pub const HEADER_PREFIX: [&str; 3] = ["Character", "Unicode Name", "Unicode Point"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRow {
    pub codepoint: char,
    /// One entry per font, in the order the fonts were added.
    pub coverage: Vec<bool>,
}

impl CoverageRow {
    pub fn new(codepoint: char) -> Self {
        Self {
            codepoint,
            coverage: Vec::new(),
        }
    }

    /// `U+0041 'A'`, or just `U+0041` for separators, control, format, private use and unassigned codepoints.
    pub fn character(&self) -> String {
        if is_printable(self.codepoint) {
            format!("{} '{}'", self.point(), self.codepoint)
        } else {
            self.point()
        }
    }

    /// The Unicode character name, empty for unassigned codepoints.
    pub fn name(&self) -> String {
        match unicode_names2::name(self.codepoint) {
            Some(name) => name.to_string(),
            None if self.codepoint.is_control() => "<control>".to_string(),
            None => String::new(),
        }
    }

    /// `U+0041`
    pub fn point(&self) -> String {
        format!("U+{:04X}", self.codepoint as u32)
    }

    pub fn record(&self) -> Vec<String> {
        let mut record = vec![self.character(), self.name(), self.point()];
        record.extend(self.coverage.iter().map(bool::to_string));
        record
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageTable {
    fonts: Vec<String>,
    rows: Vec<CoverageRow>,
}

impl CoverageTable {
    /// A table with a row per codepoint, in the given order, and no font columns yet.
    pub fn new(codepoints: &[char]) -> Self {
        Self {
            fonts: Vec::new(),
            rows: codepoints.iter().copied().map(CoverageRow::new).collect(),
        }
    }

    /// Appends a column for `font` and fills it in for every row.
    /// Returns how many of the characters the font covers.
    pub fn add_font<T: Typeface>(&mut self, name: &str, font: &T) -> usize {
        self.fonts.push(name.to_owned());

        let mut covered = 0;
        for row in &mut self.rows {
            let has_glyph = font.has_glyph(row.codepoint);
            covered += has_glyph as usize;
            row.coverage.push(has_glyph);
        }

        covered
    }

    pub fn header(&self) -> Vec<String> {
        HEADER_PREFIX
            .iter()
            .map(|s| s.to_string())
            .chain(self.fonts.iter().cloned())
            .collect()
    }

    pub fn rows(&self) -> &[CoverageRow] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        HEADER_PREFIX.len() + self.fonts.len()
    }

    /// The header followed by every row, as text cells.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        std::iter::once(self.header()).chain(self.rows.iter().map(CoverageRow::record))
    }
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
fn is_printable(c: char) -> bool {
    use GeneralCategory::*;

    c == ' '
        || !matches!(
            get_general_category(c),
            Control
                | Format
                | LineSeparator
                | ParagraphSeparator
                | PrivateUse
                | SpaceSeparator
                | Surrogate
                | Unassigned
        )
}
