use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::NamedTempFile;
use tower::ServiceExt;

use crate::config::{AppConfig, CorsConfig, DatabaseConfig, ListingDefaultsConfig, ServerConfig};
use crate::state::AppState;

pub fn test_config(db_url: String) -> AppConfig {
    AppConfig {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 8087 },
        database: DatabaseConfig { url: db_url },
        cors: CorsConfig { allowed_origins: vec!["http://localhost:3000".to_string()] },
        listing_defaults: ListingDefaultsConfig {
            description: String::new(),
            price: 0.0,
            image_url: "/images/placeholder.png".to_string(),
            is_active: true,
        },
    }
}

/// Builds the full router against a temporary SQLite database. The temp file
/// is returned so it outlives the test.
pub async fn setup_test_app() -> (Router, AppState, NamedTempFile) {
    let temp_db = NamedTempFile::new().unwrap();
    let db_url = format!("sqlite:{}", temp_db.path().display());

    sqlx::Sqlite::create_database(&db_url).await.unwrap();

    let pool = SqlitePoolOptions::new().max_connections(1).connect(&db_url).await.unwrap();

    crate::db::init_db(&pool).await.unwrap();

    let state = AppState::new(pool, test_config(db_url));
    let app = crate::routes::app(state.clone());
    (app, state, temp_db)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Creates a listing via POST and returns the stored document.
pub async fn create_listing(app: &Router, uri: &str, body: Value) -> Value {
    let response = send_json(app, "POST", uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
