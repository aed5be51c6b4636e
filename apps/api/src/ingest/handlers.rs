//! Axum route handler for document upload and text extraction.

use axum::extract::Multipart;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::extract_text;
use crate::models::request::DocumentKind;

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
    pub kind: DocumentKind,
}

/// POST /api/v1/documents/extract
///
/// Accepts a multipart upload with a single `file` field and returns the
/// extracted plain text. The document kind comes from the part's declared
/// content type, rejected before any extraction is attempted.
pub async fn handle_extract_text(
    mut multipart: Multipart,
) -> Result<axum::Json<ExtractTextResponse>, AppError> {
    let request_id = Uuid::new_v4();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let declared_mime = field
            .content_type()
            .ok_or_else(|| {
                AppError::Validation("Uploaded file has no declared content type".to_string())
            })?
            .to_string();
        let kind = DocumentKind::from_mime(&declared_mime)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        info!(%request_id, "extracting text from {kind:?} upload ({} bytes)", bytes.len());
        let text = extract_text(&bytes, kind)?;

        return Ok(axum::Json(ExtractTextResponse { text, kind }));
    }

    Err(AppError::Validation(
        "Multipart body must contain a 'file' field".to_string(),
    ))
}
