//! Artifact Renderer — deterministic conversion of a validated record (or
//! refined free text) into document-shaped output bytes.
//!
//! A record is flattened once into an ordered, whitespace-normalized line
//! form; free text keeps its own lines. The two layout algorithms differ only in
//! arrangement, never in content: for the same input they contain the same
//! ordered content lines. The renderer is pure and stateless — it may run
//! concurrently for different targets against the same record.

pub mod flatten;
pub mod flowed;
pub mod handlers;
pub mod paginated;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::record::StructuredRecord;
use crate::render::flatten::{flatten_record, flatten_text};
use crate::render::flowed::render_flowed;
use crate::render::paginated::{render_paginated, PageGeometry};

pub use paginated::default_page_geometry;

/// The two deterministic layout algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderTarget {
    PaginatedDocument,
    FlowedDocument,
}

/// What to render: a validated record or an already-refined narrative text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderContent {
    Record(StructuredRecord),
    Text(String),
}

/// Renders the content with the selected layout algorithm.
///
/// The geometry check is defensive: a zero-dimension geometry cannot be
/// reached through the public configuration, so hitting it is a programming
/// contract violation, fatal to the call.
pub fn render(
    content: &RenderContent,
    target: RenderTarget,
    geometry: &PageGeometry,
) -> Result<Bytes, AppError> {
    if geometry.width_cols == 0 || geometry.height_lines == 0 {
        return Err(AppError::Render(format!(
            "Page geometry has a zero dimension: {}x{}",
            geometry.width_cols, geometry.height_lines
        )));
    }

    let lines = match content {
        RenderContent::Record(record) => flatten_record(record),
        RenderContent::Text(text) => flatten_text(text),
    };

    let bytes = match target {
        RenderTarget::PaginatedDocument => render_paginated(&lines, geometry),
        RenderTarget::FlowedDocument => render_flowed(&lines),
    };

    Ok(Bytes::from(bytes))
}
