//! PostgreSQL connection management

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::connect;
pub use health::check_health;

pub use sea_orm::DatabaseConnection;
