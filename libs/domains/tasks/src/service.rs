use std::sync::Arc;
use tracing::{field::display, instrument};
use uuid::Uuid;

use crate::error::{TaskError, TaskResult, messages};
use crate::models::TaskItem;
use crate::repository::TaskRepository;

/// Service layer for task validation and orchestration
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All tasks, ordered by description
    pub async fn list_tasks(&self) -> TaskResult<Vec<TaskItem>> {
        self.repository.list().await
    }

    /// Get a task by ID; the nil id is rejected before touching storage
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Option<TaskItem>> {
        validate_id(id)?;
        self.repository.get_by_id(id).await
    }

    /// Validate and insert a task, returning what was stored
    #[instrument(skip(self, task), fields(task_id = task.as_ref().map(|t| display(t.id))))]
    pub async fn create_task(&self, task: Option<TaskItem>) -> TaskResult<TaskItem> {
        let task = require_task(task)?;
        validate_task(&task)?;

        self.repository.create(task.clone()).await?;
        Ok(task)
    }

    /// Validate and overwrite a task. Updating a missing row is not an error here.
    #[instrument(skip(self, task), fields(task_id = task.as_ref().map(|t| display(t.id))))]
    pub async fn update_task(&self, task: Option<TaskItem>) -> TaskResult<()> {
        let task = require_task(task)?;
        validate_task(&task)?;

        self.repository.update(task).await
    }

    /// Delete a task, returning `false` when it did not exist
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<bool> {
        if self.get_task(id).await?.is_none() {
            return Ok(false);
        }

        self.repository.delete(id).await?;
        Ok(true)
    }
}

fn validate_id(id: Uuid) -> TaskResult<()> {
    if id.is_nil() {
        return Err(TaskError::InvalidArgument(messages::INVALID_ID.to_string()));
    }
    Ok(())
}

fn require_task(task: Option<TaskItem>) -> TaskResult<TaskItem> {
    task.ok_or_else(|| TaskError::InvalidArgument(messages::NULL_TASK.to_string()))
}

/// Collects every rule violation so the client sees them all at once.
fn validate_task(task: &TaskItem) -> TaskResult<()> {
    let mut errors = Vec::new();

    if task.id.is_nil() {
        errors.push(messages::INVALID_ID);
    }
    if task.description.trim().is_empty() {
        errors.push(messages::DESCRIPTION_REQUIRED);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TaskError::InvalidArgument(errors.join("\n")))
    }
}
