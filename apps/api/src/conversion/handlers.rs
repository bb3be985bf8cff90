//! Axum route handlers for the BRF conversion API.

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::conversion::pipeline::{analyze, convert_resume, validate_upload, ConvertedResume};
use crate::errors::AppError;
use crate::extraction::SourceFormat;
use crate::models::resume::{Candidate, ProjectBlock, SectionMap};
use crate::render::DOCX_MIME;
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const UPLOAD_FIELD: &str = "resume";

pub const BANNER: &str = "BRFv1.0 Strict Formatter Running";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub format: SourceFormat,
    pub bytes: Bytes,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub request_id: Uuid,
    pub format: SourceFormat,
    pub filename: String,
    pub candidate: Candidate,
    pub sections: SectionMap,
    pub projects: Vec<ProjectBlock>,
    pub dropped_lines: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> &'static str {
    BANNER
}

/// POST / and POST /api/v1/brf/convert
///
/// Takes a multipart upload (field `resume`, PDF or DOCX) and returns the
/// BRF document as an attachment named after the candidate.
pub async fn handle_convert(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let upload = read_upload(&mut multipart).await?;
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        upload = %upload.filename,
        format = ?upload.format,
        size = upload.bytes.len(),
        "Converting resume to BRF"
    );

    let span = info_span!("brf_convert", %request_id);
    let extractor = state.extractor.clone();
    let style = state.style.clone();
    let converted = tokio::task::spawn_blocking(move || {
        let _guard = span.enter();
        convert_resume(&upload.bytes, upload.format, extractor.as_ref(), &style)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in conversion: {e}")))??;

    info!(%request_id, output = %converted.filename, "BRF document ready");
    docx_response(converted)
}

/// POST /api/v1/brf/preview
///
/// Same upload as convert, but returns the parsed structure as JSON so the
/// section and project heuristics can be inspected.
pub async fn handle_preview(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PreviewResponse>, AppError> {
    let upload = read_upload(&mut multipart).await?;
    let request_id = Uuid::new_v4();
    info!(%request_id, upload = %upload.filename, "Previewing resume parse");

    let format = upload.format;
    let extractor = state.extractor.clone();
    let parsed = tokio::task::spawn_blocking(move || {
        analyze(&upload.bytes, upload.format, extractor.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in preview: {e}")))?;

    Ok(Json(PreviewResponse {
        request_id,
        format,
        filename: parsed.candidate.output_filename(),
        candidate: parsed.candidate,
        sections: parsed.sections,
        projects: parsed.projects,
        dropped_lines: parsed.dropped_lines,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Reads the `resume` field from a multipart body and validates its name.
///
/// Other fields are skipped. A missing field, or one without a file name,
/// is `EmptyInput`.
pub async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let format = validate_upload(filename.as_deref())?;
        let bytes = field.bytes().await?;
        return Ok(Upload {
            filename: filename.unwrap_or_default(),
            format,
            bytes,
        });
    }
    Err(AppError::EmptyInput)
}

fn docx_response(converted: ConvertedResume) -> Result<Response, AppError> {
    let disposition = HeaderValue::from_str(&content_disposition(&converted.filename))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid Content-Disposition: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        converted.bytes,
    )
        .into_response())
}

/// `attachment` disposition carrying the exact name in `filename*` and an
/// ASCII-safe copy in `filename`.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}
