//! Axum route handler for artifact rendering.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{render, RenderContent, RenderTarget};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub content: RenderContent,
    pub target: RenderTarget,
    /// Caller-assigned output filename (extension included).
    pub filename: Option<String>,
}

/// POST /api/v1/render
///
/// Renders a validated record or free text to the selected layout and
/// returns the artifact bytes as a download.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<(HeaderMap, Bytes), AppError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "render requested: {:?}", request.target);

    let bytes = render(&request.content, request.target, &state.page_geometry)?;

    let filename = request
        .filename
        .unwrap_or_else(|| "job-description.txt".to_string());

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|_| AppError::Validation("Invalid filename".to_string()))?,
    );

    Ok((headers, bytes))
}
