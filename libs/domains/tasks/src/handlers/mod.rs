mod rest;

use axum::{Router, routing::get};
use axum_helpers::ErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::TaskItem;
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// Base path of the task resource
pub const TASKS_PATH: &str = "/Tasks";

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::list_tasks,
        rest::get_task,
        rest::create_task,
        rest::update_task,
        rest::delete_task,
    ),
    components(
        schemas(TaskItem, ErrorResponse)
    ),
    tags(
        (name = "tasks", description = "Task CRUD operations")
    )
)]
pub struct TasksApiDoc;

/// Create the `/Tasks` router around a service
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    let routes = Router::new()
        .route("/", get(rest::list_tasks::<R>).post(rest::create_task::<R>))
        .route(
            "/{id}",
            get(rest::get_task::<R>)
                .put(rest::update_task::<R>)
                .delete(rest::delete_task::<R>),
        )
        .with_state(shared_service);

    Router::new().nest(TASKS_PATH, routes)
}
