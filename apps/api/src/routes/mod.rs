pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::extraction::handlers as jd;
use crate::ingest::handlers as documents;
use crate::render::handlers as artifacts;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // JD pipeline
        .route("/api/v1/jd/create", post(jd::handle_create))
        .route("/api/v1/jd/refine", post(jd::handle_refine))
        .route("/api/v1/jd/extract", post(jd::handle_extract))
        // Document text extraction
        .route(
            "/api/v1/documents/extract",
            post(documents::handle_extract_text),
        )
        // Artifact rendering
        .route("/api/v1/render", post(artifacts::handle_render))
        .with_state(state)
}
