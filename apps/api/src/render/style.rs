//! Fixed style sheet for BRF output.
//!
//! Built once at startup and shared read-only; the builder takes it as an
//! argument so another format variant can sit alongside it.

use crate::models::resume::Section;

/// Paragraph line spacing. Only single spacing is used by BRF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSpacing {
    Single,
}

impl LineSpacing {
    /// Value of `w:spacing/@w:line` with `w:lineRule="auto"` (240ths of a line).
    pub fn line_value(self) -> u32 {
        match self {
            LineSpacing::Single => 240,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub font_family: String,
    pub font_size_pt: u8,
    pub space_before_pt: u8,
    pub space_after_pt: u8,
    pub line_spacing: LineSpacing,
    pub heading_bold: bool,
    /// Prefix for bulleted paragraphs, including its trailing space.
    pub bullet_glyph: String,
    pub summary_heading: String,
    pub technical_heading: String,
    pub education_heading: String,
    pub experience_heading: String,
    pub blank_after_summary: bool,
    pub blank_after_education: bool,
    pub blank_after_project: bool,
}

impl StyleSheet {
    /// BRF v1.0: Times New Roman 10pt, no paragraph spacing, single-spaced.
    pub fn brf() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size_pt: 10,
            space_before_pt: 0,
            space_after_pt: 0,
            line_spacing: LineSpacing::Single,
            heading_bold: true,
            bullet_glyph: "• ".to_string(),
            summary_heading: "Summary :".to_string(),
            technical_heading: "Technical Skills :".to_string(),
            education_heading: "Education :".to_string(),
            experience_heading: "Professional Experience :".to_string(),
            blank_after_summary: true,
            blank_after_education: true,
            blank_after_project: true,
        }
    }

    pub fn heading(&self, section: Section) -> &str {
        match section {
            Section::Summary => &self.summary_heading,
            Section::Technical => &self.technical_heading,
            Section::Education => &self.education_heading,
            Section::Experience => &self.experience_heading,
        }
    }

    /// Font size in half-points, the unit of `w:sz`.
    pub fn font_size_half_points(&self) -> u32 {
        u32::from(self.font_size_pt) * 2
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::brf()
    }
}

/// Points to twentieths of a point, the unit of `w:spacing/@w:before`.
pub fn pt_to_twips(pt: u8) -> u32 {
    u32::from(pt) * 20
}
