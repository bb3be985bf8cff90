// Resume text heuristics: name line, section headings, project blocks.
// Pure and synchronous; nothing here touches I/O.

pub mod bullets;
pub mod experience;
pub mod name;
pub mod sections;

use serde::Serialize;

use crate::models::resume::{Candidate, ProjectBlock, RawText, SectionMap};

/// Everything the document builder needs from one resume.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    pub candidate: Candidate,
    pub sections: SectionMap,
    pub projects: Vec<ProjectBlock>,
    /// Lines before the first recognised heading, discarded.
    pub dropped_lines: usize,
}

/// Runs name extraction, section classification and block reconstruction.
///
/// Lines before the name (blank ones) and the name line itself are not
/// classified. Never fails: empty text gives a placeholder name and empty
/// sections.
pub fn parse_resume(raw: &RawText) -> ParsedResume {
    let candidate = name::extract_candidate(raw);
    let body: &[String] = match raw.first_content_index() {
        Some(i) => &raw.lines()[i + 1..],
        None => &[],
    };
    let classification = sections::classify_with(body, sections::HeadingTable::default());
    let projects = experience::experience_blocks(&classification.sections);

    ParsedResume {
        candidate,
        dropped_lines: classification.preamble_lines(),
        sections: classification.sections,
        projects,
    }
}
