pub mod handlers;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::http::JsonUtf8;

/// Error body returned with every 400 and 500 response.
///
/// # JSON Example
///
/// ```json
/// { "message": "O 'id' fornecido é inválido." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message of the underlying error
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// `NotFound` renders as a bare 404 with an empty body; every other
/// variant renders its message as an [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    JsonExtractorRejection(#[from] JsonRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::JsonExtractorRejection(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::NotFound => {
                tracing::debug!("Not found");
                return status.into_response();
            }
            AppError::BadRequest(msg) => {
                tracing::info!(message = %msg, "Bad request");
                msg
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(rejection = ?e, "Rejected request body");
                e.body_text()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                msg
            }
        };

        (status, JsonUtf8(ErrorResponse { message })).into_response()
    }
}
