//! Error types for the HTTP API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orgchart_core::ServiceError;

/// Errors that can occur in the HTTP API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The resource exists but has nothing to return.
    #[error("no content: {0}")]
    NoContent(String),

    /// The request body could not be parsed, or parsed but was invalid.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Stored data violates an integrity constraint (e.g. a reporting
    /// cycle). This is a server-side fault, not a client error.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::EmployeeNotFound(_) => Self::NotFound(message),
            ServiceError::NoCompensationRecord(_) => Self::NoContent(message),
            ServiceError::InvalidSalary(_) => Self::BadRequest(message),
            ServiceError::CycleDetected(_) => Self::Integrity(message),
            ServiceError::Store(_) => Self::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NoContent(msg) => {
                tracing::debug!(reason = %msg, "Responding with no content");
                return StatusCode::NO_CONTENT.into_response();
            }
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Integrity(msg) => {
                tracing::error!(error = %msg, "Reporting structure integrity violation");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use orgchart_types::EmployeeId;

    use super::*;

    #[test]
    fn service_errors_map_to_distinct_statuses() {
        let id = EmployeeId::from("a");
        let cases = [
            (ServiceError::EmployeeNotFound(id.clone()), StatusCode::NOT_FOUND),
            (ServiceError::NoCompensationRecord(id.clone()), StatusCode::NO_CONTENT),
            (ServiceError::CycleDetected(id), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
