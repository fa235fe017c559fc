//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use luxhub_domain::error::LuxError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`LuxError`] to an HTTP response with the appropriate status code.
pub struct ApiError(LuxError);

impl From<LuxError> for ApiError {
    fn from(err: LuxError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LuxError::UnknownRoom(_) => {
                (StatusCode::BAD_REQUEST, "Invalid room name".to_string())
            }
            LuxError::InvalidAction(_) => (
                StatusCode::BAD_REQUEST,
                "Action must be ON or OFF".to_string(),
            ),
            LuxError::MalformedPayload(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LuxError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            LuxError::Bus(err) => {
                tracing::error!(error = %err, "bus error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
