//! Single-pass section classifier.
//!
//! A line-by-line state machine over `{none, summary, technical, education,
//! experience}`. Each line is tested against an ordered keyword table; the
//! first keyword found (case-insensitively, as a substring) moves the cursor
//! and the line is consumed as a heading. Other lines go to the section
//! under the cursor, or are dropped as preamble when no heading has been
//! seen yet. Earlier lines are never revisited.

use crate::models::resume::{Section, SectionMap};
use crate::parsing::bullets::clean_line;

/// Priority-ordered heading keywords. Earlier entries win when a line
/// contains several keywords ("Summary of technical experience" is Summary).
pub const BRF_HEADINGS: &[(&str, Section)] = &[
    ("summary", Section::Summary),
    ("technical", Section::Technical),
    ("education", Section::Education),
    ("experience", Section::Experience),
];

/// Keyword → section transition table. Keywords must be lower-case.
#[derive(Debug, Clone, Copy)]
pub struct HeadingTable {
    entries: &'static [(&'static str, Section)],
}

impl HeadingTable {
    pub const fn new(entries: &'static [(&'static str, Section)]) -> Self {
        Self { entries }
    }

    /// Section whose keyword appears first in table order, if any.
    pub fn match_heading(&self, line: &str) -> Option<Section> {
        let lower = line.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, section)| *section)
    }
}

impl Default for HeadingTable {
    fn default() -> Self {
        Self::new(BRF_HEADINGS)
    }
}

/// What the classifier did with one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDisposition {
    /// Before the first heading; discarded.
    Preamble,
    Heading(Section),
    Content(Section),
}

#[derive(Debug)]
pub struct SectionClassifier {
    table: HeadingTable,
    current: Option<Section>,
}

impl SectionClassifier {
    pub fn new(table: HeadingTable) -> Self {
        Self {
            table,
            current: None,
        }
    }

    /// Advances the state machine by one line.
    pub fn step(&mut self, line: &str) -> LineDisposition {
        if let Some(section) = self.table.match_heading(line) {
            self.current = Some(section);
            return LineDisposition::Heading(section);
        }
        match self.current {
            Some(section) => LineDisposition::Content(section),
            None => LineDisposition::Preamble,
        }
    }
}

/// Classification of a whole line sequence.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub sections: SectionMap,
    /// One entry per input line, in order.
    pub dispositions: Vec<LineDisposition>,
}

/// Classifies `lines` (the resume text after the name line) with `table`.
pub fn classify_with<S: AsRef<str>>(lines: &[S], table: HeadingTable) -> Classification {
    let mut classifier = SectionClassifier::new(table);
    let mut sections = SectionMap::default();
    let mut dispositions = Vec::with_capacity(lines.len());

    for line in lines {
        let line = line.as_ref();
        let disposition = classifier.step(line);
        if let LineDisposition::Content(section) = disposition {
            sections.push(section, clean_line(line));
        }
        dispositions.push(disposition);
    }

    Classification {
        sections,
        dispositions,
    }
}

impl Classification {
    /// Lines dropped because no heading had been seen yet.
    pub fn preamble_lines(&self) -> usize {
        self.dispositions
            .iter()
            .filter(|d| **d == LineDisposition::Preamble)
            .count()
    }
}
