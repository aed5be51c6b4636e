//! Extraction pipeline orchestration.
//!
//! Flow: validate input → build prompt → generate → (refine) / (validate +
//! retry). Every stage takes its predecessor's typed output as an argument
//! and returns a typed result or failure — no shared context object, no
//! partial results.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::controller::{Extraction, ExtractionController, RetryPolicy};
use crate::extraction::prompts::{
    build_creation_prompt, build_extraction_prompt, build_refinement_prompt,
};
use crate::llm_client::GenerationClient;
use crate::models::request::CreationRequest;

/// A freshly created JD: the first-pass draft and its refined version.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedJd {
    pub draft: String,
    pub refined: String,
}

/// Runs one generation call under the configured per-call deadline. A call
/// that outlives the deadline is cancelled, never left running.
async fn generate_within(
    client: &dyn GenerationClient,
    prompt: &str,
    deadline: Duration,
) -> Result<String, AppError> {
    match tokio::time::timeout(deadline, client.generate(prompt)).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::Transport(e)),
        Err(_elapsed) => Err(AppError::Cancelled),
    }
}

/// Creates a JD from the request fields, then immediately refines it.
///
/// Field validation happens before any generation call is made; each
/// generation call runs under the caller's per-call deadline.
pub async fn create_job_description(
    client: &dyn GenerationClient,
    request: &CreationRequest,
    deadline: Duration,
) -> Result<CreatedJd, AppError> {
    request.validate()?;

    info!("Creating JD for role '{}'", request.job_title);
    let draft = generate_within(client, &build_creation_prompt(request), deadline).await?;

    let refined = generate_within(client, &build_refinement_prompt(&draft), deadline).await?;
    info!(
        "JD created for role '{}': {} draft chars, {} refined chars",
        request.job_title,
        draft.len(),
        refined.len()
    );

    Ok(CreatedJd { draft, refined })
}

/// Refines an existing JD text (uploaded or pasted).
pub async fn refine_job_description(
    client: &dyn GenerationClient,
    jd_text: &str,
    deadline: Duration,
) -> Result<String, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let refined = generate_within(client, &build_refinement_prompt(jd_text), deadline).await?;
    info!("JD refined: {} chars", refined.len());
    Ok(refined)
}

/// Extracts a validated `StructuredRecord` from a JD text under the bounded
/// retry policy. A fresh single-use controller is constructed per call.
pub async fn extract_structured(
    client: &dyn GenerationClient,
    policy: RetryPolicy,
    jd_text: &str,
) -> Result<Extraction, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let prompt = build_extraction_prompt(jd_text);
    let controller = ExtractionController::new(policy);
    let extraction = controller.run(client, &prompt).await?;

    info!("Structured record extracted in {} attempt(s)", extraction.attempts);
    Ok(extraction)
}
