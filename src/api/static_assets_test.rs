use crate::api::static_assets::*;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use rust_embed::RustEmbed;
use serial_test::serial;

async fn body_text(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_root_serves_html() {
    let uri = "/".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_session_service_routes_return_404() {
    let uri = "/users/check-session".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_asset_returns_404() {
    let uri = "/does-not-exist-0f3a.wasm".parse().unwrap();
    let response = serve_frontend(uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_spa_fallback() {
    let uri = "/anything/else".parse().unwrap();
    let response = serve_frontend(uri).await;
    // Should serve index.html (or the rendered page) for client-side routing
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_landing_page_has_copy() {
    let response = landing_page().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Your notes, locked and loaded"));
    assert!(html.contains("Start Writing"));
}

#[tokio::test]
#[serial]
async fn test_landing_page_is_stable() {
    let a = body_text(landing_page().into_response()).await;
    let b = body_text(landing_page().into_response()).await;
    assert_eq!(a, b);
}

#[tokio::test]
#[serial]
async fn test_root_without_bundle_serves_rendered_page() {
    let response = serve_frontend("/".parse().unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    if super::FrontendAssets::get("index.html").is_none() {
        assert!(html.contains("Your notes, locked and loaded"));
        assert!(html.contains("/users/check-session"));
    }
}

#[tokio::test]
async fn test_deep_link_without_bundle_serves_rendered_page() {
    let response = serve_frontend("/welcome".parse().unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    if super::FrontendAssets::get("index.html").is_none() {
        assert!(html.contains("Start Writing"));
    }
}
