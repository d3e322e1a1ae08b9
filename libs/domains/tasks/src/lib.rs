//! Tasks Domain
//!
//! CRUD over to-do tasks, layered as HTTP handlers on top of a validating
//! service on top of a SQL repository.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← Status codes, Location header, id/body agreement
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, delete-existence semantics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL implementation)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{PgTaskRepository, TaskService, handlers};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let service = TaskService::new(PgTaskRepository::new(db));
//! let router: axum::Router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TaskError, TaskResult, messages};
pub use handlers::{TASKS_PATH, TasksApiDoc};
pub use models::TaskItem;
pub use postgres::PgTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
