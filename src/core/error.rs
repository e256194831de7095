//! Typed error handling for the store service
//!
//! Every failure a handler can produce is an [`ApiError`]. Each category
//! knows its HTTP status and a stable error code, and the whole hierarchy
//! converts into an axum response with a `{"error": "..."}` body.
//!
//! # Error Categories
//!
//! - [`EntityError`]: resource resolution failures (unknown identifier)
//! - [`ValidationError`]: write-view validation failures
//! - [`RequestError`]: malformed request bodies
//! - [`StorageError`]: repository failures, reported as 500

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Entity(e) => e.status_code(),
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Request(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Entity(e) => e.error_code(),
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Request(_) => "INVALID_REQUEST",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response body.
    ///
    /// Storage failures are not echoed back to clients.
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            ApiError::Storage(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        ErrorResponse {
            error,
            code: self.error_code(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({ "entity_type": entity_type, "id": id }))
            }
            ApiError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Storage(e) = &self {
            tracing::error!(error = %e, "request failed on storage");
        }
        (status, Json(self.to_response())).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(StorageError::Backend(format!("{err:#}")))
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors raised while resolving a resource
#[derive(Debug, Error)]
pub enum EntityError {
    /// No record with this identifier (or the identifier is not a UUID)
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: String },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field constraint violation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Errors related to write-view validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Required field absent or empty on create
    #[error("Field \"{field}\" is required")]
    MissingField { field: String },

    /// Field present with a non-string JSON value
    #[error("Field \"{field}\" must be a string")]
    InvalidType { field: String },

    /// Constraint violations, in field declaration order
    #[error("{}", .0.first().map(|e| e.message.as_str()).unwrap_or("Validation failed"))]
    FieldErrors(Vec<FieldError>),
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to request decoding
#[derive(Debug, Error)]
pub enum RequestError {
    /// Body is not valid JSON, or is valid JSON but not an object
    #[error("Invalid JSON")]
    InvalidJson,
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a repository backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}
