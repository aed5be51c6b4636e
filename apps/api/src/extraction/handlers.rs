//! Axum route handlers for the JD pipeline API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::pipeline::{
    create_job_description, extract_structured, refine_job_description, CreatedJd,
};
use crate::models::record::StructuredRecord;
use crate::models::request::CreationRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct RefineResponse {
    pub refined: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub record: StructuredRecord,
    /// Generation calls consumed, for caller-side observability.
    pub attempts: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jd/create
///
/// Validates the field set, generates a JD draft, and refines it in one call
/// (the draft is returned too, so callers can diff the refinement).
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<CreationRequest>,
) -> Result<Json<CreatedJd>, AppError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "JD create requested");

    let created = create_job_description(
        state.llm.as_ref(),
        &request,
        state.retry_policy.request_timeout,
    )
    .await?;
    Ok(Json(created))
}

/// POST /api/v1/jd/refine
///
/// Refines an existing JD text (typically produced by the document
/// extraction endpoint).
pub async fn handle_refine(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, AppError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "JD refine requested");

    let refined = refine_job_description(
        state.llm.as_ref(),
        &request.jd_text,
        state.retry_policy.request_timeout,
    )
    .await?;
    Ok(Json(RefineResponse { refined }))
}

/// POST /api/v1/jd/extract
///
/// Runs the bounded extraction pipeline and returns the validated record.
/// On terminal malformed output the error response carries the last raw
/// model text under `error.details.lastOutput`.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "structured extraction requested");

    let extraction =
        extract_structured(state.llm.as_ref(), state.retry_policy.clone(), &request.jd_text)
            .await?;

    Ok(Json(ExtractResponse {
        record: extraction.record,
        attempts: extraction.attempts,
    }))
}
