//! Route configuration.

use axum::Router;
use axum::routing::get;

use super::handlers;
use super::static_assets::serve_frontend;

/// Create the landing server router.
///
/// `/health` is answered directly; every other path goes to the frontend.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .fallback(serve_frontend)
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
