use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::TaskItem;

/// Sea-ORM entity for the `Tasks` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Id")]
    pub id: Uuid,
    #[sea_orm(column_name = "Description", column_type = "Text")]
    pub description: String,
    #[sea_orm(column_name = "Completed")]
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TaskItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            completed: model.completed,
        }
    }
}

impl From<TaskItem> for ActiveModel {
    fn from(task: TaskItem) -> Self {
        ActiveModel {
            id: Set(task.id),
            description: Set(task.description),
            completed: Set(task.completed),
        }
    }
}
