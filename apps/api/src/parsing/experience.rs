//! Project block reconstruction for the Experience section.
//!
//! Resumes carry no markup for job entries, so boundaries are inferred from
//! position and one terminator rule:
//! - the first line of a run is the header (company, location, duration),
//! - the second line is the role,
//! - following lines are bullets until a line ending in `:` starts the next
//!   block.
//!
//! Greedy and forward-only: no backtracking, no lookahead past one line.
//! Headers that wrap onto two lines, or bullets that end in a colon, are
//! misread; both are accepted limitations of the format.

use crate::models::resume::{ProjectBlock, Section, SectionMap};

const BLOCK_TERMINATOR: char = ':';

fn ends_block(line: &str) -> bool {
    line.ends_with(BLOCK_TERMINATOR)
}

/// Segments non-blank, bullet-stripped Experience lines into project blocks.
pub fn reconstruct_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<ProjectBlock> {
    let n = lines.len();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < n {
        let header = lines[i].as_ref().to_string();
        i += 1;

        let role = if i < n {
            i += 1;
            Some(lines[i - 1].as_ref().to_string())
        } else {
            None
        };

        let mut bullets = Vec::new();
        while i < n && !ends_block(lines[i].as_ref()) {
            bullets.push(lines[i].as_ref().to_string());
            i += 1;
        }

        blocks.push(ProjectBlock {
            header,
            role,
            bullets,
        });
    }

    blocks
}

/// Builds the project blocks for a classified resume.
pub fn experience_blocks(sections: &SectionMap) -> Vec<ProjectBlock> {
    let lines: Vec<&str> = sections.content(Section::Experience).collect();
    reconstruct_blocks(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::sections::{classify_with, HeadingTable};

    #[test]
    fn test_unterminated_run_stays_one_block() {
        let lines = [
            "Acme Corp, NYC, 2020-2022",
            "Senior Engineer",
            "Built X",
            "Built Y",
            "Beta Inc, SF, 2018-2020",
            "Engineer",
            "Did Z",
        ];
        let blocks = reconstruct_blocks(&lines);

        // No colon terminators: everything after the first role is one bullet run.
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].header, "Acme Corp, NYC, 2020-2022");
        assert_eq!(blocks[0].role.as_deref(), Some("Senior Engineer"));
        assert_eq!(blocks[0].bullets.len(), 5);
    }

    #[test]
    fn test_colon_headers_split_blocks() {
        let lines = [
            "Acme Corp, NYC, 2020-2022:",
            "Senior Engineer",
            "Built X",
            "Built Y",
            "Beta Inc, SF, 2018-2020:",
            "Engineer",
            "Did Z",
        ];
        let blocks = reconstruct_blocks(&lines);
        assert_eq!(
            blocks,
            vec![
                ProjectBlock {
                    header: "Acme Corp, NYC, 2020-2022:".to_string(),
                    role: Some("Senior Engineer".to_string()),
                    bullets: vec!["Built X".to_string(), "Built Y".to_string()],
                },
                ProjectBlock {
                    header: "Beta Inc, SF, 2018-2020:".to_string(),
                    role: Some("Engineer".to_string()),
                    bullets: vec!["Did Z".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_colon_bullet_becomes_next_header() {
        let lines = [
            "Acme Corp",
            "Engineer",
            "Built X",
            "Key achievements:",
            "Cut costs 30%",
            "Won award",
        ];
        let blocks = reconstruct_blocks(&lines);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].bullets, vec!["Built X"]);
        assert_eq!(blocks[1].header, "Key achievements:");
        assert_eq!(blocks[1].role.as_deref(), Some("Cut costs 30%"));
        assert_eq!(blocks[1].bullets, vec!["Won award"]);
    }

    #[test]
    fn test_role_is_positional_even_with_colon() {
        let blocks = reconstruct_blocks(&["Acme Corp:", "Role:", "Next Co:", "Dev"]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].role.as_deref(), Some("Role:"));
        assert!(blocks[0].bullets.is_empty());
        assert_eq!(blocks[1].header, "Next Co:");
    }

    #[test]
    fn test_single_line_has_no_role() {
        let blocks = reconstruct_blocks(&["Acme Corp"]);
        assert_eq!(
            blocks,
            vec![ProjectBlock {
                header: "Acme Corp".to_string(),
                role: None,
                bullets: vec![],
            }]
        );
    }

    #[test]
    fn test_trailing_header_after_terminator() {
        let blocks = reconstruct_blocks(&["A", "Dev", "B:"]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].header, "B:");
        assert_eq!(blocks[1].role, None);
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        let lines: [&str; 0] = [];
        assert!(reconstruct_blocks(&lines).is_empty());
    }

    #[test]
    fn test_every_line_used_once_in_order() {
        let lines = ["a:", "b", "c", "d:", "e", "f:", "g"];
        let flattened: Vec<String> = reconstruct_blocks(&lines)
            .into_iter()
            .flat_map(|b| {
                std::iter::once(b.header)
                    .chain(b.role)
                    .chain(b.bullets)
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(flattened, lines);
    }

    #[test]
    fn test_experience_blocks_skips_blank_lines() {
        let classification = classify_with(
            &[
                "Experience",
                "Acme Corp, NYC, 2020-2022",
                "",
                "• Senior Engineer",
                "   ",
                "- Built X",
            ],
            HeadingTable::default(),
        );
        let blocks = experience_blocks(&classification.sections);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].role.as_deref(), Some("Senior Engineer"));
        assert_eq!(blocks[0].bullets, vec!["Built X"]);
    }
}
