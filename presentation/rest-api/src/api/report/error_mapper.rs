use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::report::errors::AnalysisError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AnalysisError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::generation::errors::GenerationError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, Json(body)) = AnalysisError::InvalidFileType.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid file type. Please upload a PDF.");
    }

    #[test]
    fn should_map_processing_errors_to_internal_error() {
        let (status, Json(body)) =
            AnalysisError::Generation(GenerationError::Transport("timed out".to_string()))
                .into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "timed out");
    }
}
