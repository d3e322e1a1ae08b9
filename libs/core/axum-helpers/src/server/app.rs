use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Wraps the API routes with documentation and cross-cutting middleware.
///
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - API routes merged at the root (they carry their own prefixes)
/// - Request tracing, security headers, response compression
/// - CORS when `CORS_ALLOWED_ORIGIN` is set
/// - 404 with an empty body for unmatched routes
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` contains an invalid origin.
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors_layer) = cors_layer_from_env()? {
        router = router.layer(cors_layer);
    }

    Ok(router.layer(CompressionLayer::new()))
}

/// Bind to `server_config` and serve until SIGINT/SIGTERM.
///
/// See [`serve_with_shutdown`] for the shutdown sequence.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    serve_with_shutdown(listener, router, shutdown_signal(), shutdown_timeout, cleanup).await
}

/// Serve on `listener` until `shutdown` resolves.
///
/// The listener stops accepting, in-flight requests run to completion, and
/// only then does `cleanup` (e.g. closing the database pool) run, for at
/// most `cleanup_timeout`. Cleanup also runs when the server fails.
pub async fn serve_with_shutdown<S, F>(
    listener: TcpListener,
    router: Router,
    shutdown: S,
    cleanup_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()>,
{
    info!("Server starting on {}", listener.local_addr()?);

    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Connections drained, running cleanup (timeout: {:?})", cleanup_timeout);
    match tokio::time::timeout(cleanup_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            cleanup_timeout
        ),
    }

    served
}
