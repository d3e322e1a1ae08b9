use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::TaskItem;

/// Data access for tasks.
///
/// Implementations perform no validation and treat a missing row as a
/// no-op on update and delete; the service decides what that means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks ordered by description, ascending
    async fn list(&self) -> TaskResult<Vec<TaskItem>>;

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<TaskItem>>;

    /// Insert a task with its caller-supplied id
    async fn create(&self, task: TaskItem) -> TaskResult<()>;

    /// Overwrite description and completed flag of the row matching `task.id`
    async fn update(&self, task: TaskItem) -> TaskResult<()>;

    async fn delete(&self, id: Uuid) -> TaskResult<()>;
}
