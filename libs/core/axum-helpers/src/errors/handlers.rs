use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback for unmatched routes: 404 with an empty body.
pub async fn not_found() -> Response {
    AppError::NotFound.into_response()
}
