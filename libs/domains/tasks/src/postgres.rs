use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{entity, error::TaskResult, models::TaskItem, repository::TaskRepository};

/// PostgreSQL-backed [`TaskRepository`].
///
/// Every call borrows a connection from the pool and hands it back when done.
#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list(&self) -> TaskResult<Vec<TaskItem>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Description)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<TaskItem>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, task: TaskItem) -> TaskResult<()> {
        let id = task.id;
        let active_model: entity::ActiveModel = task.into();

        entity::Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await?;

        tracing::info!(task_id = %id, "Created task");
        Ok(())
    }

    async fn update(&self, task: TaskItem) -> TaskResult<()> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Description, Expr::value(task.description))
            .col_expr(entity::Column::Completed, Expr::value(task.completed))
            .filter(entity::Column::Id.eq(task.id))
            .exec(&self.db)
            .await?;

        tracing::info!(task_id = %task.id, rows = result.rows_affected, "Updated task");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::info!(task_id = %id, rows = result.rows_affected, "Deleted task");
        Ok(())
    }
}
