use std::panic;

use crate::extraction::ExtractionError;

/// Extracts the text layer of a PDF held in memory.
///
/// The PDF parser can panic on malformed files; that is reported as an
/// ordinary extraction error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(_) => Err(ExtractionError::Pdf("PDF parser panicked".to_string())),
    }
}
