// BRF document rendering: style sheet, paragraph layout, DOCX packaging.

pub mod builder;
pub mod docx;
pub mod style;

pub use builder::build_document;
pub use docx::{write_docx, RenderError};
pub use style::StyleSheet;

/// MIME type of the generated document.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
