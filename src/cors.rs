use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build a CORS layer from the configured origin allowlist.
///
/// Origins are matched exactly against the configured list. Pass "*" in the
/// origins list to allow all origins (not recommended for production).
/// Preflight OPTIONS requests are answered by this layer without reaching
/// the handlers.
pub fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_all_origins = allowed_origins.iter().any(|o| o == "*");
    let origins: Vec<String> = allowed_origins.to_vec();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            if allow_all_origins {
                return true;
            }
            match origin.to_str() {
                Ok(origin_str) => origins.iter().any(|allowed| allowed == origin_str),
                Err(_) => false,
            }
        }))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}
