//! HTTP route handlers for the Lagerliste API.
//!
//! - `health`: Health check, version and metrics endpoints
//! - `listing`: Shared CRUD handlers for the hauling, properties and
//!   equipment collections (identical document shape)
//! - `materials`: CRUD handlers for the materials collection

pub mod health;
pub mod listing;
pub mod materials;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::types::EntityKind;

/// Builds the API router. CORS, tracing and body-limit layers are applied by
/// the caller (see `main.rs`), so tests can exercise the same routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/version", get(health::version))
        .route("/api/hauling", listing::handlers(EntityKind::Hauling))
        .route("/api/properties", listing::handlers(EntityKind::Properties))
        .route("/api/equipment", listing::handlers(EntityKind::Equipment))
        .route("/api/materials", materials::handlers())
        .with_state(state)
}
