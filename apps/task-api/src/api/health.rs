//! Readiness check against the database pool.

use crate::state::AppState;
use axum::{extract::State, response::Response};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Readiness endpoint: `SELECT 1` through the pool, 503 when it fails.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}
