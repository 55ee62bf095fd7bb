use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;

/// The shared application state.
///
/// Cloned into every handler via Axum's state extraction. The SQLite pool is
/// the only process-wide shared handle; there is no other shared mutable
/// state beyond the metrics counters.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool holding all four listing tables.
    pub db: sqlx::SqlitePool,
    /// The application configuration (CORS allowlist, listing defaults).
    pub config: Arc<AppConfig>,
    /// Operational counters served at `/metrics`.
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        Self { db, config: Arc::new(config), metrics: Metrics::new() }
    }
}
