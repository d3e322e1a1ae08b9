//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI documentation and common middleware
//! - Health and readiness endpoints
//! - Graceful shutdown: drain requests, then clean up
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let api_routes = api_routes.merge(health_router(app_info!()));
//! let app = create_router::<ApiDoc>(api_routes)?;
//! create_production_app(app, &config, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_with_shutdown};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
