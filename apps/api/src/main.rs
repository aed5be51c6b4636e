mod config;
mod errors;
mod extraction;
mod ingest;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::controller::RetryPolicy;
use crate::llm_client::GeminiClient;
use crate::render::default_page_geometry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Rolecraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generation client
    let llm = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("Generation client initialized (model: {})", llm_client::MODEL);

    // Bounded retry policy for structured extraction
    let retry_policy = RetryPolicy {
        max_attempts: config.extraction_max_attempts,
        request_timeout: Duration::from_secs(config.generation_timeout_secs),
    };
    info!(
        "Extraction retry policy: {} attempt(s), {}s deadline per call",
        retry_policy.max_attempts,
        retry_policy.request_timeout.as_secs()
    );

    // Fixed page geometry for the paginated render target
    let page_geometry = default_page_geometry();

    // Build app state
    let state = AppState {
        llm,
        retry_policy,
        page_geometry,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
