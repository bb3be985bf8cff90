//! Text extraction from uploaded resumes.
//!
//! The extractor contract is "bytes + format → plain text" and it never
//! fails: unreadable input is logged and yields an empty string, so the
//! pipeline can still produce a skeleton document.

pub mod docx;
pub mod pdf;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Failed to open DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to read document.xml: {0}")]
    Read(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(String),
}

/// Upload formats the formatter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Pdf,
    Docx,
}

impl SourceFormat {
    /// Format implied by the file name's suffix, case-insensitively.
    ///
    /// A bare `".docx"` counts; it is still a DOCX upload.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Some(SourceFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(SourceFormat::Docx)
        } else {
            None
        }
    }
}

/// Turns raw upload bytes into plain text.
pub trait TextExtractor: Send + Sync {
    /// Must not fail; return an empty string for unreadable content.
    fn extract(&self, bytes: &[u8], format: SourceFormat) -> String;
}

/// `pdf-extract` for PDF, a ZIP + XML walk for DOCX.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultExtractor;

impl DefaultExtractor {
    pub fn try_extract(&self, bytes: &[u8], format: SourceFormat) -> Result<String, ExtractionError> {
        match format {
            SourceFormat::Pdf => pdf::extract_pdf_text(bytes),
            SourceFormat::Docx => docx::extract_docx_text(bytes),
        }
    }
}

impl TextExtractor for DefaultExtractor {
    fn extract(&self, bytes: &[u8], format: SourceFormat) -> String {
        match self.try_extract(bytes, format) {
            Ok(text) => {
                debug!(?format, chars = text.len(), "Extracted resume text");
                text
            }
            Err(e) => {
                warn!(?format, "Text extraction failed, continuing with empty text: {e}");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(SourceFormat::from_filename("cv.pdf"), Some(SourceFormat::Pdf));
        assert_eq!(SourceFormat::from_filename("CV.PDF"), Some(SourceFormat::Pdf));
        assert_eq!(
            SourceFormat::from_filename("Jane Doe.final.Docx"),
            Some(SourceFormat::Docx)
        );
        assert_eq!(SourceFormat::from_filename(".docx"), Some(SourceFormat::Docx));
        assert_eq!(SourceFormat::from_filename(".PDF"), Some(SourceFormat::Pdf));
    }

    #[test]
    fn test_unsupported_formats_rejected() {
        for name in ["cv.doc", "cv.txt", "cv", "pdf", "cv.pdf.zip", "cv.docx ", ""] {
            assert_eq!(SourceFormat::from_filename(name), None, "{name:?}");
        }
    }

    #[test]
    fn test_garbage_pdf_degrades_to_empty() {
        let text = DefaultExtractor.extract(b"not a pdf at all", SourceFormat::Pdf);
        assert_eq!(text, "");
    }

    #[test]
    fn test_garbage_docx_degrades_to_empty() {
        let text = DefaultExtractor.extract(b"PK\x03\x04 broken", SourceFormat::Docx);
        assert_eq!(text, "");
        assert!(DefaultExtractor
            .try_extract(b"", SourceFormat::Docx)
            .is_err());
    }
}
