//! HTTP error mapping for the customer API.
//!
//! Translates the core error taxonomy into status codes so clients can
//! tell a bad request from a missing customer from a backend failure:
//! validation failures become 400, missing rows become 404, and database
//! failures become 500. Every failure carries the same JSON envelope with
//! `message` and `error` fields.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use klantboek_core::CoreError;
use serde::Serialize;
use tracing::error;

/// Error returned by route handlers, wrapping the core taxonomy.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

/// JSON envelope for all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable summary of the failure.
    pub message: String,
    /// Structured error detail.
    pub error: ErrorDetail,
}

/// Structured detail inside the error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Stable error code for client dispatch.
    pub code: &'static str,
    /// Description of the specific failure.
    pub detail: String,
}

impl ApiError {
    /// Returns the HTTP status for the wrapped error.
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the stable error code for the wrapped error.
    pub fn code(&self) -> &'static str {
        match self.0 {
            CoreError::Validation(_) => "validation_error",
            CoreError::NotFound(_) => "not_found",
            CoreError::Database(_) => "database_error",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }

        let body = ErrorBody {
            message: "Something went wrong".to_string(),
            error: ErrorDetail { code: self.code(), detail: self.0.to_string() },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError(CoreError::Validation("first_name too short".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "validation_error");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError(CoreError::NotFound("no customer with id 9".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn database_maps_to_500() {
        let err = ApiError(CoreError::Database("connection refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "database_error");
    }

    #[test]
    fn envelope_carries_message_and_error_fields() {
        let err = ApiError(CoreError::Validation("city must be one of".to_string()));
        let body = ErrorBody {
            message: "Something went wrong".to_string(),
            error: ErrorDetail { code: err.code(), detail: err.0.to_string() },
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["message"], "Something went wrong");
        assert_eq!(json["error"]["code"], "validation_error");
        assert!(json["error"]["detail"].as_str().unwrap().contains("city"));
    }
}
