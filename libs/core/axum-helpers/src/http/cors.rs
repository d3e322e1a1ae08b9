use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Comma-separated list of origins allowed to call the API
pub const CORS_ALLOWED_ORIGIN_VAR: &str = "CORS_ALLOWED_ORIGIN";

/// Creates a CORS layer for the task API.
///
/// Allows the verbs the API serves, JSON content negotiation headers, and
/// exposes `Location` so browsers can read the URL of a created task.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::LOCATION])
        .max_age(Duration::from_secs(3600))
}

/// Build a CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Returns `Ok(None)` when the variable is unset or blank, and an error
/// when any listed origin is not a valid header value.
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let Ok(origins_str) = std::env::var(CORS_ALLOWED_ORIGIN_VAR) else {
        return Ok(None);
    };

    let allowed_origins = origins_str
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ALLOWED_ORIGIN_VAR, e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Ok(None);
    }

    tracing::info!(origins = %origins_str, "CORS enabled");
    Ok(Some(create_cors_layer(allowed_origins)))
}
