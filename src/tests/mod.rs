//! Integration and unit tests for the Lagerliste application.
//!
//! - **support**: Shared test app setup (temporary SQLite database)
//! - **slug_tests**: Slug sanitization and cross-collection uniqueness
//! - **hauling_api_tests**: CRUD round trips for the shared listing shape
//! - **materials_api_tests**: Materials-specific list fields
//! - **cors_tests**: Origin allowlist behavior of the CORS layer
//! - **cross_kind_tests**: Slug uniqueness across entity kinds over HTTP
//! - **config_tests**: Configuration loading and validation
//! - **error_tests**: Error-to-response mapping
//! - **db_tests**: Schema initialization and the unique slug index

pub mod support;

pub mod cors_tests;
pub mod hauling_api_tests;
