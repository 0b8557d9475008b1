//! Embedded frontend assets.
//!
//! In release mode: Assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from filesystem (dist/) at runtime.

use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::config::ProbeConfig;
use crate::landing::{LandingContent, render_html};

/// Embedded frontend assets (WASM, JS, CSS, HTML)
///
/// Folder points to Trunk's output directory.
#[derive(RustEmbed)]
#[folder = "dist/"]
#[allow_missing = true]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.wasm"]
#[include = "*.css"]
#[include = "snippets/**/*"]
struct FrontendAssets;

/// Path prefixes owned by the session service, never answered here.
const RESERVED_PREFIXES: &[&str] = &["users/"];

/// Serve embedded frontend assets with SPA fallback routing.
///
/// Routing logic:
/// 1. Paths under the session service's namespace get 404
/// 2. Exact asset match (e.g. /style.css, /app.wasm)
/// 3. Missing file-like paths (with an extension) get 404
/// 4. Everything else gets index.html for client-side routing
/// 5. Without a built bundle, the server-rendered landing page stands in
pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if RESERVED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let asset_path = if path.is_empty() { "index.html" } else { path };

    if let Some(content) = FrontendAssets::get(asset_path) {
        let mime = mime_guess::from_path(asset_path).first_or_octet_stream();
        let cache = if asset_path == "index.html" {
            "no-cache"
        } else {
            "public, max-age=31536000" // hashed asset names
        };
        return (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime.as_ref()),
                (header::CACHE_CONTROL, cache),
            ],
            Body::from(content.data),
        )
            .into_response();
    }

    // Judge the requested path, not the `/` -> index.html rewrite
    if has_extension(path) {
        return StatusCode::NOT_FOUND.into_response();
    }

    match FrontendAssets::get("index.html") {
        Some(index) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/html"),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            Body::from(index.data),
        )
            .into_response(),
        None => landing_page().into_response(),
    }
}

/// The statically rendered landing page.
///
/// Its call-to-action checks the session against the configured session
/// service origin (`NOTES_API_URL` or the default).
pub fn landing_page() -> Html<String> {
    let origin = ProbeConfig::new().api_url;
    Html(render_html(&LandingContent::standard(), &origin))
}

fn has_extension(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|name| name.contains('.'))
}

#[cfg(test)]
#[path = "static_assets_test.rs"]
mod static_assets_test;
