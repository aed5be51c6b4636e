use std::sync::Arc;

use crate::extraction::controller::RetryPolicy;
use crate::llm_client::GenerationClient;
use crate::render::paginated::PageGeometry;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is immutable or behind an `Arc`: independent requests run
/// concurrently with no shared mutable state, and each extraction request
/// constructs its own single-use controller from `retry_policy`.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn GenerationClient>,
    /// Bounded retry policy applied per extraction request.
    pub retry_policy: RetryPolicy,
    /// Fixed page dimensions for the paginated render target.
    pub page_geometry: PageGeometry,
}
