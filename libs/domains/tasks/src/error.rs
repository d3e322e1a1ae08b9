use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Client-facing validation messages
pub mod messages {
    pub const INVALID_ID: &str = "O 'id' fornecido é inválido.";
    pub const DESCRIPTION_REQUIRED: &str = "Descrição é um campo obrigatório.";
    pub const NULL_TASK: &str = "A tarefa não pode ser nula.";
    pub const ID_MISMATCH: &str = "O ID da URL não corresponde ao ID da tarefa.";
}

#[derive(Debug, Error)]
pub enum TaskError {
    /// Input rejected by validation; the message is returned to the client verbatim
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::InvalidArgument(msg) => AppError::BadRequest(msg),
            TaskError::Database(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
