use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{
    ConfigError, FromEnv, env_parse_or,
    settings::{DEFAULT_CONNECTION, Settings},
};

/// PostgreSQL pool configuration
///
/// The pool is the connection factory handed to repositories. Timeouts are
/// in seconds.
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Database connection URL (required)
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    /// Log every SQL statement through `tracing`
    pub sqlx_logging: bool,
    pub sqlx_logging_level: LevelFilter,
}

impl PostgresConfig {
    /// Create a config for `url` with default pool settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(self.sqlx_logging_level);
        opt
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 100,
            min_connections: 5,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 8,
            max_lifetime_secs: 8,
            sqlx_logging: true,
            sqlx_logging_level: LevelFilter::Info,
        }
    }
}

#[cfg(feature = "config")]
impl PostgresConfig {
    /// Build the config from `ConnectionStrings:DefaultConnection` in
    /// `settings` plus pool options from the environment:
    ///
    /// - `DB_MAX_CONNECTIONS` (default: 100)
    /// - `DB_MIN_CONNECTIONS` (default: 5)
    /// - `DB_CONNECT_TIMEOUT_SECS` (default: 8)
    /// - `DB_ACQUIRE_TIMEOUT_SECS` (default: 8)
    /// - `DB_IDLE_TIMEOUT_SECS` (default: 8)
    /// - `DB_MAX_LIFETIME_SECS` (default: 8)
    /// - `DB_SQLX_LOGGING` (default: true)
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: settings.connection_string(DEFAULT_CONNECTION)?,
            max_connections: env_parse_or("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: env_parse_or("DB_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout_secs: env_parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            acquire_timeout_secs: env_parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
            idle_timeout_secs: env_parse_or("DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout_secs)?,
            max_lifetime_secs: env_parse_or("DB_MAX_LIFETIME_SECS", defaults.max_lifetime_secs)?,
            sqlx_logging: env_parse_or("DB_SQLX_LOGGING", defaults.sqlx_logging)?,
            sqlx_logging_level: defaults.sqlx_logging_level,
        })
    }
}

#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    /// Loads the settings file named by `APP_SETTINGS_PATH`, then delegates
    /// to [`PostgresConfig::from_settings`].
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_settings(&Settings::from_env()?)
    }
}
