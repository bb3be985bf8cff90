use serde::Serialize;

/// Plain text of one uploaded resume, split into lines.
///
/// Produced once per request from the extractor output and never mutated.
/// Trailing whitespace is trimmed from every line; leading whitespace and
/// blank lines are kept so later stages see the document as extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawText {
    lines: Vec<String>,
}

impl RawText {
    pub fn from_text(text: &str) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.split('\n')
                .map(|line| line.trim_end().to_string())
                .collect()
        };
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    /// Index of the first line carrying any text, if there is one.
    pub fn first_content_index(&self) -> Option<usize> {
        self.lines.iter().position(|l| !l.trim().is_empty())
    }
}

/// The person a resume belongs to, as read off its first line.
///
/// `name == first_name + " " + last_name` when `last_name` is non-empty,
/// otherwise `name == first_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
}

impl Candidate {
    /// Download name of the reformatted document: `"{first} {last}.docx"`.
    ///
    /// The space is always present, so a single-token name yields `"Jane .docx"`.
    pub fn output_filename(&self) -> String {
        format!("{} {}.docx", self.first_name, self.last_name)
    }
}

/// The four BRF sections, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Technical,
    Education,
    Experience,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Summary,
        Section::Technical,
        Section::Education,
        Section::Experience,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Technical => "technical",
            Section::Education => "education",
            Section::Experience => "experience",
        }
    }
}

/// Cleaned content lines per section.
///
/// All four sections are always present; a section with no matched lines
/// holds an empty vector. Built once by the classifier and read-only after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionMap {
    summary: Vec<String>,
    technical: Vec<String>,
    education: Vec<String>,
    experience: Vec<String>,
}

impl SectionMap {
    pub(crate) fn push(&mut self, section: Section, line: String) {
        self.slot_mut(section).push(line);
    }

    pub fn get(&self, section: Section) -> &[String] {
        match section {
            Section::Summary => &self.summary,
            Section::Technical => &self.technical,
            Section::Education => &self.education,
            Section::Experience => &self.experience,
        }
    }

    /// Lines of `section` that carry text, in source order.
    pub fn content(&self, section: Section) -> impl Iterator<Item = &str> {
        self.get(section)
            .iter()
            .map(String::as_str)
            .filter(|l| !l.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.get(*s).is_empty())
    }

    fn slot_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Summary => &mut self.summary,
            Section::Technical => &mut self.technical,
            Section::Education => &mut self.education,
            Section::Experience => &mut self.experience,
        }
    }
}

/// One job or project entry rebuilt from the Experience section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectBlock {
    /// Company, location and duration line.
    pub header: String,
    pub role: Option<String>,
    pub bullets: Vec<String>,
}
