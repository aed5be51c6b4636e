use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::TransportError;

/// Application-level error type.
///
/// Mirrors the pipeline's failure taxonomy so callers can distinguish
/// "you gave me incomplete input" (Validation/UnsupportedDocument) from
/// "give up, try later" (Transport/Cancelled) from "the model's output
/// could not be trusted" (ModelOutput).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Generation service failure: {0}")]
    Transport(#[from] TransportError),

    #[error("Model output failed validation after {attempts} attempts")]
    ModelOutput { attempts: u32, last_output: String },

    #[error("Generation call cancelled: deadline exceeded")]
    Cancelled,

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::UnsupportedDocument(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_DOCUMENT",
                msg.clone(),
                None,
            ),
            AppError::Extraction(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_FAILED",
                msg.clone(),
                None,
            ),
            AppError::Transport(e) => {
                tracing::error!("Generation transport failure: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_UNAVAILABLE",
                    e.to_string(),
                    None,
                )
            }
            AppError::ModelOutput {
                attempts,
                last_output,
            } => {
                tracing::error!(
                    "Model output invalid after {attempts} attempts ({} bytes of diagnostics)",
                    last_output.len()
                );
                // The last offending output is surfaced for diagnostics,
                // never silently discarded.
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_OUTPUT_INVALID",
                    format!("Model output failed schema validation after {attempts} attempts"),
                    Some(json!({
                        "attempts": attempts,
                        "lastOutput": last_output,
                    })),
                )
            }
            AppError::Cancelled => (
                StatusCode::GATEWAY_TIMEOUT,
                "GENERATION_CANCELLED",
                "Generation call exceeded its deadline".to_string(),
                None,
            ),
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    msg.clone(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
