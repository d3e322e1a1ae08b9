use axum::{
    Json,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Content type of every JSON body the service writes
pub const APPLICATION_JSON_UTF8: &str = "application/json; charset=utf-8";

/// `Json` response that declares its charset.
///
/// A value that fails to serialize keeps axum's plain-text 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonUtf8<T>(pub T);

impl<T: Serialize> IntoResponse for JsonUtf8<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.0).into_response();

        let headers = response.headers_mut();
        if headers
            .get(header::CONTENT_TYPE)
            .is_some_and(|v| v == "application/json")
        {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(APPLICATION_JSON_UTF8),
            );
        }

        response
    }
}
