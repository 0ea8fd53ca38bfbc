use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use agent_core::models::ErrorResponse;

pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level errors with their HTTP status mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            ApiError::MalformedRequest(m) => {
                (StatusCode::BAD_REQUEST, "malformed_request", m.as_str())
            }
            ApiError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            // Internal detail stays out of the wire response.
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Schema violations are a 400 here, not the framework's default 422.
        match rejection {
            JsonRejection::JsonSyntaxError(e) => ApiError::MalformedRequest(e.to_string()),
            JsonRejection::MissingJsonContentType(e) => ApiError::MalformedRequest(e.to_string()),
            JsonRejection::BytesRejection(e) => ApiError::MalformedRequest(e.to_string()),
            JsonRejection::JsonDataError(e) => ApiError::Validation(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
