//! WordprocessingML serialization for `OutputDocument`.
//!
//! A DOCX file is a ZIP archive of XML parts. Only the parts Word needs to
//! open a styled document are written:
//! `[Content_Types].xml`, `_rels/.rels`, `word/document.xml`,
//! `word/styles.xml` and `word/_rels/document.xml.rels`.
//!
//! The archive is assembled in an anonymous temp file which the OS removes
//! once the handle drops, on success and on error alike.

use std::borrow::Cow;
use std::io::{Read, Seek, SeekFrom, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::render::builder::{Alignment, OutputDocument, Paragraph, ParagraphFormat};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error while writing document: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP packaging error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML writer error: {0}")]
    Xml(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

/// Serializes `doc` into DOCX bytes.
pub fn write_docx(doc: &OutputDocument) -> Result<Vec<u8>> {
    let document_xml = document_xml(doc)?;
    let styles_xml = styles_xml(&doc.default_format)?;

    let parts: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
        ("_rels/.rels", PACKAGE_RELS_XML.as_bytes()),
        ("word/document.xml", document_xml.as_slice()),
        ("word/styles.xml", styles_xml.as_slice()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.as_bytes()),
    ];

    let mut zip = ZipWriter::new(tempfile::tempfile()?);
    for (name, body) in parts {
        zip.start_file(name, part_options())?;
        zip.write_all(body)?;
    }

    let mut file = zip.finish()?;
    file.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn part_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

// ────────────────────────────────────────────────────────────────────────────
// XML helpers
// ────────────────────────────────────────────────────────────────────────────

fn xml_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Xml(e.to_string())
}

/// Replaces characters XML 1.0 cannot carry with a space. Broken PDF
/// ToUnicode maps routinely yield control codes.
fn xml_safe(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_xml_char(c) { c } else { ' ' })
            .collect(),
    )
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

struct Xml {
    writer: Writer<Vec<u8>>,
}

impl Xml {
    fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_err)?;
        Ok(Self { writer })
    }

    fn element(name: &str, attrs: &[(&str, &str)]) -> BytesStart<'static> {
        let mut start = BytesStart::new(name.to_string());
        for (key, value) in attrs {
            start.push_attribute((*key, *value));
        }
        start
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer
            .write_event(Event::Start(Self::element(name, attrs)))
            .map_err(xml_err)
    }

    fn close(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer
            .write_event(Event::Empty(Self::element(name, attrs)))
            .map_err(xml_err)
    }

    fn text(&mut self, text: &str) -> Result<()> {
        let text = xml_safe(text);
        self.writer
            .write_event(Event::Text(BytesText::new(&text)))
            .map_err(xml_err)
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn write_run_props(xml: &mut Xml, format: &ParagraphFormat, bold: bool) -> Result<()> {
    let font = format.font_family.as_str();
    let size = format.font_size_half_points.to_string();
    xml.empty(
        "w:rFonts",
        &[
            ("w:ascii", font),
            ("w:hAnsi", font),
            ("w:cs", font),
            ("w:eastAsia", font),
        ],
    )?;
    if bold {
        xml.empty("w:b", &[])?;
    }
    xml.empty("w:sz", &[("w:val", size.as_str())])?;
    xml.empty("w:szCs", &[("w:val", size.as_str())])
}

fn write_spacing(xml: &mut Xml, format: &ParagraphFormat) -> Result<()> {
    let before = format.space_before_twips.to_string();
    let after = format.space_after_twips.to_string();
    let line = format.line.to_string();
    xml.empty(
        "w:spacing",
        &[
            ("w:before", before.as_str()),
            ("w:after", after.as_str()),
            ("w:line", line.as_str()),
            ("w:lineRule", "auto"),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Parts
// ────────────────────────────────────────────────────────────────────────────

fn document_xml(doc: &OutputDocument) -> Result<Vec<u8>> {
    let mut xml = Xml::new()?;
    xml.open("w:document", &[("xmlns:w", W_NS)])?;
    xml.open("w:body", &[])?;

    for paragraph in &doc.paragraphs {
        let format = paragraph.format.as_ref().unwrap_or(&doc.default_format);
        write_paragraph(&mut xml, paragraph, format)?;
    }

    // US letter, 1" margins.
    xml.open("w:sectPr", &[])?;
    xml.empty("w:pgSz", &[("w:w", "12240"), ("w:h", "15840")])?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", "1440"),
            ("w:right", "1440"),
            ("w:bottom", "1440"),
            ("w:left", "1440"),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.close("w:sectPr")?;

    xml.close("w:body")?;
    xml.close("w:document")?;
    Ok(xml.finish())
}

fn write_paragraph(xml: &mut Xml, paragraph: &Paragraph, format: &ParagraphFormat) -> Result<()> {
    xml.open("w:p", &[])?;

    xml.open("w:pPr", &[])?;
    write_spacing(xml, format)?;
    if paragraph.alignment == Alignment::Center {
        xml.empty("w:jc", &[("w:val", "center")])?;
    }
    xml.open("w:rPr", &[])?;
    write_run_props(xml, format, paragraph.bold)?;
    xml.close("w:rPr")?;
    xml.close("w:pPr")?;

    if !paragraph.is_blank() {
        xml.open("w:r", &[])?;
        xml.open("w:rPr", &[])?;
        write_run_props(xml, format, paragraph.bold)?;
        xml.close("w:rPr")?;
        xml.open("w:t", &[("xml:space", "preserve")])?;
        xml.text(&paragraph.text)?;
        xml.close("w:t")?;
        xml.close("w:r")?;
    }

    xml.close("w:p")
}

fn styles_xml(format: &ParagraphFormat) -> Result<Vec<u8>> {
    let mut xml = Xml::new()?;
    xml.open("w:styles", &[("xmlns:w", W_NS)])?;

    xml.open("w:docDefaults", &[])?;
    xml.open("w:rPrDefault", &[])?;
    xml.open("w:rPr", &[])?;
    write_run_props(&mut xml, format, false)?;
    xml.close("w:rPr")?;
    xml.close("w:rPrDefault")?;
    xml.open("w:pPrDefault", &[])?;
    xml.open("w:pPr", &[])?;
    write_spacing(&mut xml, format)?;
    xml.close("w:pPr")?;
    xml.close("w:pPrDefault")?;
    xml.close("w:docDefaults")?;

    xml.open(
        "w:style",
        &[
            ("w:type", "paragraph"),
            ("w:default", "1"),
            ("w:styleId", "Normal"),
        ],
    )?;
    xml.empty("w:name", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.open("w:pPr", &[])?;
    write_spacing(&mut xml, format)?;
    xml.close("w:pPr")?;
    xml.open("w:rPr", &[])?;
    write_run_props(&mut xml, format, false)?;
    xml.close("w:rPr")?;
    xml.close("w:style")?;

    xml.close("w:styles")?;
    Ok(xml.finish())
}
