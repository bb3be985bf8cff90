use crate::models::resume::{Candidate, RawText};

/// First name used when the resume has no text at all.
pub const NAME_PLACEHOLDER: &str = "Resume";

/// Reads the candidate's name from the first non-blank line of the resume.
///
/// The first whitespace token becomes the first name and every remaining
/// token, rejoined with single spaces, the last name. The line is assumed to
/// be the name; contact details on the same line end up in `last_name`.
pub fn extract_candidate(raw: &RawText) -> Candidate {
    let line = raw
        .first_content_index()
        .map(|i| raw.lines()[i].as_str())
        .unwrap_or("");
    candidate_from_line(line)
}

pub fn candidate_from_line(line: &str) -> Candidate {
    let mut tokens = line.split_whitespace();
    let first_name = tokens.next().unwrap_or(NAME_PLACEHOLDER).to_string();
    let last_name = tokens.collect::<Vec<_>>().join(" ");

    let name = if last_name.is_empty() {
        first_name.clone()
    } else {
        format!("{first_name} {last_name}")
    };

    Candidate {
        name,
        first_name,
        last_name,
    }
}
