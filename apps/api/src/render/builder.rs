//! Document builder: lays out a parsed resume as BRF paragraphs.
//!
//! Rendering order is fixed:
//! 1. candidate name, centred, not bold
//! 2. Summary heading + one bulleted paragraph per line, then a blank line
//! 3. Technical Skills heading + plain paragraphs
//! 4. Education heading + plain paragraphs, then a blank line
//! 5. Professional Experience heading + per project: header, role, bullets, blank line
//!
//! Font, size and spacing are applied to every paragraph after content is
//! inserted, as a separate pass.

use crate::models::resume::{Candidate, ProjectBlock, Section, SectionMap};
use crate::render::style::{pt_to_twips, StyleSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// Run and paragraph properties shared by every paragraph of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphFormat {
    pub font_family: String,
    pub font_size_half_points: u32,
    pub space_before_twips: u32,
    pub space_after_twips: u32,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub alignment: Alignment,
    pub bold: bool,
    /// `None` until global formatting has run.
    pub format: Option<ParagraphFormat>,
}

impl Paragraph {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Left,
            bold: false,
            format: None,
        }
    }

    fn blank() -> Self {
        Self::plain("")
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// The rendered resume, ready for serialization.
#[derive(Debug, Clone)]
pub struct OutputDocument {
    pub paragraphs: Vec<Paragraph>,
    /// Suggested download name, `"{first} {last}.docx"`.
    pub filename: String,
    /// Document-wide defaults written into the Normal style.
    pub default_format: ParagraphFormat,
}

struct Builder<'a> {
    style: &'a StyleSheet,
    paragraphs: Vec<Paragraph>,
}

impl<'a> Builder<'a> {
    fn new(style: &'a StyleSheet) -> Self {
        Self {
            style,
            paragraphs: Vec::new(),
        }
    }

    fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    fn heading(&mut self, section: Section) {
        self.push(Paragraph {
            bold: self.style.heading_bold,
            ..Paragraph::plain(self.style.heading(section))
        });
    }

    fn bullet(&mut self, text: &str) {
        let glyph = &self.style.bullet_glyph;
        self.push(Paragraph::plain(format!("{glyph}{text}")));
    }

    fn blank_if(&mut self, enabled: bool) {
        if enabled {
            self.push(Paragraph::blank());
        }
    }

    fn project(&mut self, block: &ProjectBlock) {
        self.push(Paragraph::plain(block.header.as_str()));
        if let Some(role) = &block.role {
            self.push(Paragraph::plain(role.as_str()));
        }
        for bullet in &block.bullets {
            self.bullet(bullet);
        }
        self.blank_if(self.style.blank_after_project);
    }
}

/// Lays out the resume. Missing roles and empty sections simply produce no
/// paragraphs; the four headings are always present.
pub fn build_document(
    candidate: &Candidate,
    sections: &SectionMap,
    projects: &[ProjectBlock],
    style: &StyleSheet,
) -> OutputDocument {
    let mut b = Builder::new(style);

    b.push(Paragraph {
        alignment: Alignment::Center,
        ..Paragraph::plain(candidate.name.as_str())
    });

    b.heading(Section::Summary);
    for line in sections.content(Section::Summary) {
        b.bullet(line);
    }
    b.blank_if(style.blank_after_summary);

    b.heading(Section::Technical);
    for line in sections.content(Section::Technical) {
        b.push(Paragraph::plain(line));
    }

    b.heading(Section::Education);
    for line in sections.content(Section::Education) {
        b.push(Paragraph::plain(line));
    }
    b.blank_if(style.blank_after_education);

    b.heading(Section::Experience);
    for block in projects {
        b.project(block);
    }

    let mut doc = OutputDocument {
        paragraphs: b.paragraphs,
        filename: candidate.output_filename(),
        default_format: format_for(style),
    };
    apply_global_formatting(&mut doc, style);
    doc
}

/// Sets font family, size, spacing and line spacing on every paragraph.
pub fn apply_global_formatting(doc: &mut OutputDocument, style: &StyleSheet) {
    let format = format_for(style);
    for paragraph in &mut doc.paragraphs {
        paragraph.format = Some(format.clone());
    }
    doc.default_format = format;
}

fn format_for(style: &StyleSheet) -> ParagraphFormat {
    ParagraphFormat {
        font_family: style.font_family.clone(),
        font_size_half_points: style.font_size_half_points(),
        space_before_twips: pt_to_twips(style.space_before_pt),
        space_after_twips: pt_to_twips(style.space_after_pt),
        line: style.line_spacing.line_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::RawText;
    use crate::parsing::parse_resume;
    use crate::parsing::name::candidate_from_line;

    fn texts(doc: &OutputDocument) -> Vec<&str> {
        doc.paragraphs.iter().map(|p| p.text.as_str()).collect()
    }

    #[test]
    fn test_empty_sections_render_headings_only() {
        let style = StyleSheet::brf();
        let candidate = candidate_from_line("Jane Q Public");
        let doc = build_document(&candidate, &SectionMap::default(), &[], &style);

        assert_eq!(
            texts(&doc),
            vec![
                "Jane Q Public",
                "Summary :",
                "",
                "Technical Skills :",
                "Education :",
                "",
                "Professional Experience :",
            ]
        );
        let bold: Vec<&str> = doc
            .paragraphs
            .iter()
            .filter(|p| p.bold)
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(
            bold,
            vec![
                "Summary :",
                "Technical Skills :",
                "Education :",
                "Professional Experience :"
            ]
        );
        assert_eq!(doc.filename, "Jane Q Public.docx");
    }

    #[test]
    fn test_name_centered_not_bold() {
        let style = StyleSheet::brf();
        let doc = build_document(
            &candidate_from_line("Jane Doe"),
            &SectionMap::default(),
            &[],
            &style,
        );
        let name = &doc.paragraphs[0];
        assert_eq!(name.alignment, Alignment::Center);
        assert!(!name.bold);
        assert!(doc.paragraphs[1..]
            .iter()
            .all(|p| p.alignment == Alignment::Left));
    }

    #[test]
    fn test_full_layout() {
        let raw = RawText::from_text(
            "Jane Doe\n\
             Summary\n\
             ● Backend engineer\n\
             \n\
             Technical Skills\n\
             • Rust, Go\n\
             Education\n\
             - B.S. CS\n\
             Experience\n\
             Acme Corp, NYC, 2020-2022:\n\
             Senior Engineer\n\
             Built X\n\
             Beta Inc:\n",
        );
        let parsed = parse_resume(&raw);
        let doc = build_document(
            &parsed.candidate,
            &parsed.sections,
            &parsed.projects,
            &StyleSheet::brf(),
        );

        assert_eq!(
            texts(&doc),
            vec![
                "Jane Doe",
                "Summary :",
                "• Backend engineer",
                "",
                "Technical Skills :",
                "Rust, Go",
                "Education :",
                "B.S. CS",
                "",
                "Professional Experience :",
                "Acme Corp, NYC, 2020-2022:",
                "Senior Engineer",
                "• Built X",
                "",
                "Beta Inc:",
                "",
            ]
        );
    }

    #[test]
    fn test_absent_role_omits_paragraph() {
        let block = ProjectBlock {
            header: "Solo Co".to_string(),
            role: None,
            bullets: vec![],
        };
        let doc = build_document(
            &candidate_from_line("A B"),
            &SectionMap::default(),
            &[block],
            &StyleSheet::brf(),
        );
        let tail: Vec<&str> = texts(&doc).into_iter().rev().take(2).collect();
        assert_eq!(tail, vec!["", "Solo Co"]);
    }

    #[test]
    fn test_global_formatting_applied_to_every_paragraph() {
        let style = StyleSheet::brf();
        let doc = build_document(
            &candidate_from_line("Jane Doe"),
            &SectionMap::default(),
            &[],
            &style,
        );
        for p in &doc.paragraphs {
            let f = p.format.as_ref().unwrap();
            assert_eq!(f.font_family, "Times New Roman");
            assert_eq!(f.font_size_half_points, 20);
            assert_eq!(f.space_before_twips, 0);
            assert_eq!(f.space_after_twips, 0);
            assert_eq!(f.line, 240);
        }
        assert_eq!(doc.default_format.font_family, "Times New Roman");
    }

    #[test]
    fn test_separators_follow_style_flags() {
        let style = StyleSheet {
            blank_after_summary: false,
            blank_after_education: false,
            ..StyleSheet::brf()
        };
        let doc = build_document(
            &candidate_from_line("Jane Doe"),
            &SectionMap::default(),
            &[],
            &style,
        );
        assert!(doc.paragraphs.iter().all(|p| !p.is_blank()));
    }
}
