//! One conversion, start to finish: extract → parse → build → serialize.
//!
//! Synchronous and self-contained. Every value is created per call and
//! dropped when it returns; the only shared inputs are the read-only style
//! sheet and extractor.

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extraction::{SourceFormat, TextExtractor};
use crate::models::resume::{RawText, Section};
use crate::parsing::{parse_resume, ParsedResume};
use crate::render::{build_document, write_docx, RenderError, StyleSheet};

/// A rendered BRF document and its download name.
#[derive(Debug)]
pub struct ConvertedResume {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Checks an uploaded file name and returns the format it declares.
pub fn validate_upload(filename: Option<&str>) -> Result<SourceFormat, AppError> {
    let filename = filename
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or(AppError::EmptyInput)?;
    SourceFormat::from_filename(filename)
        .ok_or_else(|| AppError::UnsupportedFormat(filename.to_string()))
}

/// Extracts and parses an upload without rendering it.
pub fn analyze(bytes: &[u8], format: SourceFormat, extractor: &dyn TextExtractor) -> ParsedResume {
    let text = extractor.extract(bytes, format);
    let raw = RawText::from_text(&text);
    if raw.is_blank() {
        debug!("No text extracted; rendering a skeleton document");
    }

    let parsed = parse_resume(&raw);
    for section in Section::ALL {
        debug!(
            section = section.key(),
            lines = parsed.sections.get(section).len(),
            "Classified section"
        );
    }
    if parsed.sections.is_empty() && !raw.is_blank() {
        warn!("No section headings recognised; document will contain headings only");
    }
    debug!(
        projects = parsed.projects.len(),
        dropped = parsed.dropped_lines,
        "Reconstructed project blocks"
    );
    parsed
}

/// Converts an upload into a BRF document.
///
/// Extraction problems never fail the conversion; only serialization can.
pub fn convert_resume(
    bytes: &[u8],
    format: SourceFormat,
    extractor: &dyn TextExtractor,
    style: &StyleSheet,
) -> Result<ConvertedResume, RenderError> {
    let parsed = analyze(bytes, format, extractor);
    let doc = build_document(
        &parsed.candidate,
        &parsed.sections,
        &parsed.projects,
        style,
    );
    let bytes = write_docx(&doc)?;
    debug!(
        paragraphs = doc.paragraphs.len(),
        size = bytes.len(),
        "Serialized BRF document"
    );

    Ok(ConvertedResume {
        filename: doc.filename,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    use crate::extraction::docx::paragraphs_from_document_xml;
    use crate::extraction::DefaultExtractor;

    struct FixedText(&'static str);

    impl TextExtractor for FixedText {
        fn extract(&self, _bytes: &[u8], _format: SourceFormat) -> String {
            self.0.to_string()
        }
    }

    fn document_paragraphs(bytes: &[u8]) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        paragraphs_from_document_xml(&xml).unwrap()
    }

    #[test]
    fn test_validate_upload() {
        assert_eq!(validate_upload(Some("cv.PDF")).unwrap(), SourceFormat::Pdf);
        assert_eq!(
            validate_upload(Some("Jane Doe.docx")).unwrap(),
            SourceFormat::Docx
        );
        assert!(matches!(validate_upload(None), Err(AppError::EmptyInput)));
        assert!(matches!(
            validate_upload(Some("  ")),
            Err(AppError::EmptyInput)
        ));
        assert!(matches!(
            validate_upload(Some("cv.doc")),
            Err(AppError::UnsupportedFormat(name)) if name == "cv.doc"
        ));
    }

    #[test]
    fn test_convert_end_to_end() {
        let extractor = FixedText(
            "Jane Q Public\n\
             Summary\n\
             • Backend engineer\n\
             Technical Skills\n\
             Rust\n\
             Education\n\
             B.S. CS\n\
             Experience\n\
             Acme Corp, NYC, 2020-2022\n\
             Senior Engineer\n\
             ● Built X",
        );
        let converted =
            convert_resume(b"ignored", SourceFormat::Pdf, &extractor, &StyleSheet::brf()).unwrap();

        assert_eq!(converted.filename, "Jane Q Public.docx");
        assert_eq!(
            document_paragraphs(&converted.bytes),
            vec![
                "Jane Q Public",
                "Summary :",
                "• Backend engineer",
                "",
                "Technical Skills :",
                "Rust",
                "Education :",
                "B.S. CS",
                "",
                "Professional Experience :",
                "Acme Corp, NYC, 2020-2022",
                "Senior Engineer",
                "• Built X",
                "",
            ]
        );
    }

    #[test]
    fn test_unreadable_upload_yields_skeleton() {
        let converted = convert_resume(
            b"definitely not a pdf",
            SourceFormat::Pdf,
            &DefaultExtractor,
            &StyleSheet::brf(),
        )
        .unwrap();

        assert_eq!(converted.filename, "Resume .docx");
        assert_eq!(
            document_paragraphs(&converted.bytes),
            vec![
                "Resume",
                "Summary :",
                "",
                "Technical Skills :",
                "Education :",
                "",
                "Professional Experience :",
            ]
        );
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let extractor = FixedText("A B\nExperience\nX:\nY\nZ\nW:\nV");
        let first = analyze(b"", SourceFormat::Docx, &extractor);
        let second = analyze(b"", SourceFormat::Docx, &extractor);
        assert_eq!(first.projects, second.projects);
        assert_eq!(first.sections, second.sections);
        assert_eq!(first.projects.len(), 2);
    }
}
