//! HTTP middleware and response helpers.
//!
//! ```ignore
//! use axum_helpers::http::{cors_layer_from_env, security_headers};
//!
//! let app = Router::new().layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod cors;
pub mod json;
pub mod security;

pub use cors::{CORS_ALLOWED_ORIGIN_VAR, cors_layer_from_env, create_cors_layer};
pub use json::{APPLICATION_JSON_UTF8, JsonUtf8};
pub use security::security_headers;
