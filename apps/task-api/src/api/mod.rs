use axum::{Router, routing::get};
use axum_helpers::server::health_router;

use crate::state::AppState;

pub mod health;
pub mod tasks;

/// Every route the service exposes: the task API plus `/health` (liveness
/// with app name and version) and `/ready` (`SELECT 1` through the pool).
///
/// Passed whole to `create_router` so the probes get the same middleware
/// stack as the API.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(tasks::router(state))
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()))
}

fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
