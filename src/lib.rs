//! # Lagerliste Backend Library
//!
//! Lagerliste is an inventory backend for a small hauling and materials
//! business. It stores listings for four entity kinds (hauling, materials,
//! properties, equipment) in a SQLite-backed document store and exposes them
//! through a JSON REST API under `/api/<kind>`.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **Tokio**: Async runtime
//! - **Serde**: Serialization/deserialization for JSON APIs
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`cors`]: CORS layer built from the configured origin allowlist
//! - [`db`]: Database schema initialization
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`metrics`]: Operational counters
//! - [`routes`]: HTTP API endpoint handlers
//! - [`slug`]: Cross-collection unique URL slug generation
//! - [`state`]: Shared application state
//! - [`store`]: Store-access capabilities shared by the handlers
//! - [`types`]: Data transfer objects and entity definitions
//!
//! ## Invariant
//!
//! A listing's `urlEnd` slug doubles as its public route identifier and must
//! be unique across all four entity kinds combined. The [`slug`] module
//! guarantees this at assignment time; a per-table unique index backs it at
//! the store level.

pub mod config;
pub mod cors;
pub mod db;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod slug;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
