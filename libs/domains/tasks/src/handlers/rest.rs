use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_helpers::{AppError, ErrorResponse, JsonUtf8, UuidPath};
use std::sync::Arc;

use super::TASKS_PATH;
use crate::error::messages;
use crate::models::TaskItem;
use crate::repository::TaskRepository;
use crate::service::TaskService;

type TaskBody = Result<Json<Option<TaskItem>>, JsonRejection>;

/// List all tasks ordered by description
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    responses(
        (status = 200, description = "Tasks ordered by description", body = Vec<TaskItem>),
        (status = 404, description = "No tasks stored"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> Result<Response, AppError> {
    let tasks = service.list_tasks().await?;

    if tasks.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(JsonUtf8(tasks).into_response())
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = TaskItem),
        (status = 400, description = "Invalid task ID", body = ErrorResponse),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> Result<Response, AppError> {
    let task = service.get_task(id).await?.ok_or(AppError::NotFound)?;
    Ok(JsonUtf8(task).into_response())
}

/// Create a task with a caller-supplied ID
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = TaskItem,
    responses(
        (status = 201, description = "Task created", body = TaskItem,
            headers(("Location" = String, description = "URL of the created task"))),
        (status = 400, description = "Invalid task", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    body: TaskBody,
) -> Result<Response, AppError> {
    let Json(task) = body?;
    let created = service.create_task(task).await?;
    let location = format!("{}/{}", TASKS_PATH, created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        JsonUtf8(created),
    )
        .into_response())
}

/// Replace the description and completion flag of an existing task
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    request_body = TaskItem,
    responses(
        (status = 204, description = "Task updated"),
        (status = 400, description = "Invalid task or ID mismatch", body = ErrorResponse),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
    body: TaskBody,
) -> Result<Response, AppError> {
    let Json(task) = body?;

    if task.as_ref().is_some_and(|t| t.id != id) {
        return Err(AppError::BadRequest(messages::ID_MISMATCH.to_string()));
    }

    if service.get_task(id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    // A concurrent delete between the check above and this call still yields 204.
    service.update_task(task).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, description = "Invalid task ID", body = ErrorResponse),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> Result<Response, AppError> {
    if !service.delete_task(id).await? {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
