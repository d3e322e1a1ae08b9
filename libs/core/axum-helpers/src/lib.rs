//! # Axum Helpers
//!
//! Shared HTTP plumbing for the task service.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers), UTF-8 JSON responses
//! - **[`errors`]**: `{"message": ...}` error responses
//! - **[`extractors`]**: Custom extractors (UUID path)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new())?;
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, create_production_app, create_router, health_router, run_health_checks,
    serve_with_shutdown, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{JsonUtf8, cors_layer_from_env, create_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::UuidPath;
