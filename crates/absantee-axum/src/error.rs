//! Axum-specific error types and mappings.
//!
//! This module provides error types for the Axum adapter and mappings
//! from `CoreError` and `PersistenceError` to HTTP status codes and
//! response bodies.

use absantee_core::{CoreError, PersistenceError};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::json::JsonResponse;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No route matches the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// The path exists but does not accept the request method.
    #[error("Method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    /// The status code this error is reported with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let error = match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Internal(msg) => msg,
            other @ (Self::RouteNotFound(_) | Self::MethodNotAllowed { .. }) => {
                other.to_string()
            }
        };
        let body = ErrorBody {
            error,
            status: status.as_u16(),
        };

        (status, JsonResponse(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Persistence(e) => e.into(),
            CoreError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound(msg) => Self::NotFound(msg),
            PersistenceError::Constraint(msg) => Self::BadRequest(msg),
            PersistenceError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            PersistenceError::Serialization(msg) => {
                Self::Internal(format!("Serialization: {msg}"))
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
