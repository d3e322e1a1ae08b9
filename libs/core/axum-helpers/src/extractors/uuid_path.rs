//! UUID path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// Any textual UUID form accepted by [`Uuid::parse_str`] is allowed. A
/// value that does not parse is rejected with 400 and
/// `{"message": "Invalid UUID: <raw>"}`. The nil UUID is accepted here;
/// rejecting it is the caller's decision.
///
/// # Example
/// ```ignore
/// async fn get_task(UuidPath(id): UuidPath) -> String {
///     format!("Task ID: {}", id)
/// }
///
/// let app = Router::new().route("/Tasks/{id}", get(get_task));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Uuid::parse_str(&raw)
            .map(UuidPath)
            .map_err(|_| AppError::BadRequest(format!("Invalid UUID: {}", raw)))
    }
}
