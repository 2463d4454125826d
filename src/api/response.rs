//! JSON envelope and error-to-status mapping.
//!
//! Every response, success or failure, is `{status, message, data?}`.

use crate::task::{services::TaskLifecycleError, validation::ValidationError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for unexpected failures.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Uniform response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse<T> {
    /// `true` on success.
    pub status: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Payload, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful envelope carrying `data`.
    #[must_use]
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Creates a successful envelope without a payload.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Failure response: an HTTP status plus the `{status: false, message}`
/// envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
    status: StatusCode,
    message: String,
}

impl ApiErrorResponse {
    /// Creates an error response with an explicit status code.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 Not Found.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 Internal Server Error with the generic message.
    #[must_use]
    pub fn internal_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE)
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            status: false,
            message: self.message,
            data: None,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiErrorResponse {
    fn from(error: ValidationError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl From<TaskLifecycleError> for ApiErrorResponse {
    fn from(error: TaskLifecycleError) -> Self {
        match error {
            TaskLifecycleError::Domain(rule) => Self::bad_request(rule.to_string()),
            TaskLifecycleError::NotFound(_) => Self::not_found("Task not found"),
            TaskLifecycleError::Repository(source) => {
                tracing::error!(error = %source, "task repository failure");
                Self::internal_error()
            }
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        Self::bad_request("Request body must be valid JSON")
    }
}
