//! Shared application state passed to the readiness handler and used to
//! build the domain services.

/// Cloned per handler; clones share the underlying pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
}

#[cfg(test)]
pub(crate) fn test_state(db: database::postgres::DatabaseConnection) -> AppState {
    use crate::config::{Config, Environment};
    use core_config::{AppInfo, server::ServerConfig};
    use database::postgres::PostgresConfig;

    AppState {
        config: Config {
            app: AppInfo {
                name: "task_api",
                version: "0.1.0",
            },
            database: PostgresConfig::default(),
            server: ServerConfig::default(),
            environment: Environment::Development,
        },
        db,
    }
}
