use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::Backoff;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::postgres::connect(config.database.clone(), Backoff::default())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    let state = AppState { config, db };

    // create_router adds docs and middleware to every route, probes included
    let app = create_router::<openapi::ApiDoc>(api::routes(&state))?;

    info!("Starting task API with graceful shutdown (30s cleanup timeout)");

    // Closing any clone of the pool closes it for all of them
    let db = state.db.clone();

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Task API shutdown complete");
    Ok(())
}
