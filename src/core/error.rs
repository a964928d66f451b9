//! Typed error handling for the folio service
//!
//! Every failure that can leave the service boundary is one of these
//! variants, each carrying enough context to render a structured HTTP
//! response. Nothing is swallowed and nothing surfaces a stack trace.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: client sent an invalid payload or query parameter
//! - [`ApiError::NotFound`]: operation targets an id absent from the store
//! - [`ApiError::Unauthorized`]: write route reached without credentials
//! - [`ApiError::Store`]: the entity store failed during an otherwise-valid
//!   request

use crate::core::validation::ValidationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the folio service
#[derive(Debug)]
pub enum ApiError {
    /// Client payload or query parameter violated a validation rule
    Validation(ValidationError),

    /// Operation targeted an id absent from the store
    NotFound { kind: &'static str, id: u64 },

    /// Write route reached without valid credentials
    Unauthorized { message: String },

    /// The entity store (or sanitizer) failed mid-operation
    Store {
        kind: &'static str,
        verb: &'static str,
        source: StoreError,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "{}", e),
            ApiError::NotFound { kind, id } => {
                write!(f, "{} with id '{}' not found", kind, id)
            }
            ApiError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            ApiError::Store { kind, verb, source } => {
                write!(f, "Error {} {}: {}", verb, kind, source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            ApiError::Store { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(e) => e.error_code(),
            ApiError::NotFound { .. } => "RESOURCE_NOT_FOUND",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Store { .. } => "STORE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NotFound { kind, id } => Some(serde_json::json!({
                "kind": kind,
                "id": id,
            })),
            ApiError::Validation(ValidationError::MissingFields { fields }) => {
                Some(serde_json::json!({ "fields": fields }))
            }
            ApiError::Validation(ValidationError::InvalidPagination { param, value }) => {
                Some(serde_json::json!({ "param": param, "value": value }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// Errors raised by an entity store backend
///
/// These are collaborator faults: the request itself was valid, the storage
/// layer failed while serving it. They always surface as a 500 wrapped in
/// [`ApiError::Store`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A lock guarding shared state was poisoned
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),

    /// The backend could not be reached or refused the operation
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// A record could not be serialized for output
    #[error("serialization failed: {0}")]
    Serialization(String),
}
