use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every failing endpoint: `{"error": "<message>"}`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human readable failure description
    pub error: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
