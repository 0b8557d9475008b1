//! System health handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version serving the page
    pub version: String,
}

/// Health check endpoint
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
