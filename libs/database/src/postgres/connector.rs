use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

use super::PostgresConfig;
use crate::retry::{Backoff, retry};

/// Open the pool, retrying with `backoff` while the server is unreachable.
pub async fn connect(config: PostgresConfig, backoff: Backoff) -> Result<DatabaseConnection, DbErr> {
    let max_connections = config.max_connections;
    let options = config.into_connect_options();

    let db = retry(backoff, || Database::connect(options.clone())).await?;

    info!(max_connections, "Connected to PostgreSQL");
    Ok(db)
}
