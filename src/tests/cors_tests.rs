use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use crate::cors::build_cors_layer;

use super::support::setup_test_app;

#[tokio::test]
async fn allowed_origin_is_echoed_back() {
    let (app, state, _db) = setup_test_app().await;
    let app = app.layer(build_cors_layer(&state.config.cors.allowed_origins));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/hauling")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}

#[tokio::test]
async fn unlisted_origin_gets_no_cors_headers() {
    let (app, state, _db) = setup_test_app().await;
    let app = app.layer(build_cors_layer(&state.config.cors.allowed_origins));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/hauling")
                .header("origin", "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn preflight_announces_the_crud_methods() {
    let (app, state, _db) = setup_test_app().await;
    let app = app.layer(build_cors_layer(&state.config.cors.allowed_origins));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/materials")
                .header("origin", "http://localhost:3000")
                .header("access-control-request-method", "PUT")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let methods = response
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(methods.contains("PUT"));
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn wildcard_entry_allows_any_origin() {
    let (app, _, _db) = setup_test_app().await;
    let app = app.layer(build_cors_layer(&["*".to_string()]));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/hauling")
                .header("origin", "http://anywhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().get("access-control-allow-origin").is_some());
}
