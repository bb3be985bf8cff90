//! DOCX text reader.
//!
//! DOCX files are ZIP archives; the body text lives in `word/document.xml`.
//! Each `w:p` paragraph becomes one line, with the text of its `w:t` runs
//! concatenated. `w:tab` becomes a tab and `w:br`/`w:cr` a line break.

use std::io::{Cursor, Read, Seek};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::extraction::ExtractionError;

type Result<T> = std::result::Result<T, ExtractionError>;

/// Extracts plain text from DOCX bytes, one paragraph per line.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let xml = read_document_xml(&mut archive)?;
    Ok(paragraphs_from_document_xml(&xml)?.join("\n"))
}

fn read_document_xml<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> Result<String> {
    let mut document = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    document.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Paragraph texts of a `word/document.xml` body, in document order.
///
/// Empty paragraphs are kept as empty strings.
pub fn paragraphs_from_document_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                // Tab stops in `w:pPr/w:tabs` share the name; only run content counts.
                b"w:tab" if in_run => current.push('\t'),
                b"w:br" | b"w:cr" if in_run => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text && in_paragraph => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractionError::Xml(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::Xml(format!(
                    "Error at position {}: {:?}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}
