//! Failures surfaced to HTTP clients.
//!
//! Every error leaves the API as a JSON `{"error": "..."}` body, including
//! unmatched routes and unsupported methods.

use axum::Json;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use foxhen_domain::error::{FoxhenError, ValidationError};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Everything a handler, fallback or extractor can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Raised by the domain or application layer.
    Domain(FoxhenError),
    /// No route matches the request path.
    RouteNotFound { path: String },
    /// The path exists but does not accept `method`.
    MethodNotAllowed { method: Method, path: String },
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(FoxhenError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Domain(FoxhenError::NotFound(_)) | Self::RouteNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::Domain(FoxhenError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Client-facing message. Storage details stay in the logs.
    fn message(&self) -> String {
        match self {
            Self::Domain(FoxhenError::Storage(_)) => "internal server error".to_string(),
            Self::Domain(FoxhenError::Validation(inner)) => inner.to_string(),
            Self::Domain(FoxhenError::NotFound(inner)) => inner.to_string(),
            Self::RouteNotFound { path } => format!("no route for `{path}`"),
            Self::MethodNotAllowed { method, path } => {
                format!("method {method} not allowed on `{path}`")
            }
        }
    }
}

impl From<FoxhenError> for ApiError {
    fn from(err: FoxhenError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Domain(FoxhenError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
            }
            Self::Domain(err) => tracing::debug!(%status, error = ?err, "request rejected"),
            Self::RouteNotFound { path } => tracing::debug!(%path, "no matching route"),
            Self::MethodNotAllowed { method, path } => {
                tracing::debug!(%method, %path, "method not allowed");
            }
        }

        (
            status,
            Json(ErrorBody {
                error: self.message(),
            }),
        )
            .into_response()
    }
}
