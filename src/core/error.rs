//! Typed error handling for the catalog service
//!
//! # Error Categories
//!
//! - [`ValidationFailure`]: one or more field rules broken, nothing written
//! - [`EntityError`]: uniqueness violations, unknown ids, stale versions
//! - [`StorageError`]: the backing store could not be reached or failed
//! - [`RequestError`]: malformed HTTP input (body, sort expression)
//! - [`ConfigError`]: configuration loading and validation
//!
//! Every category maps to an HTTP status through [`CatalogError::status_code`]
//! and renders as `{ code, message, details? }`.

use crate::core::validation::Violation;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result alias used across the data access layer and handlers
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Entity(e) => e.status_code(),
            CatalogError::Storage(e) => e.status_code(),
            CatalogError::Request(_) => StatusCode::BAD_REQUEST,
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => "VALIDATION_ERROR",
            CatalogError::Entity(e) => e.error_code(),
            CatalogError::Storage(e) => e.error_code(),
            CatalogError::Request(_) => "BAD_REQUEST",
            CatalogError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Violations carried by a validation failure, empty otherwise
    pub fn violations(&self) -> &[Violation] {
        match self {
            CatalogError::Validation(failure) => &failure.violations,
            _ => &[],
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CatalogError::Validation(failure) => {
                Some(serde_json::json!({ "violations": failure.violations }))
            }
            CatalogError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({ "entityType": entity_type, "id": id }))
            }
            CatalogError::Entity(EntityError::UniquenessViolation {
                entity_type,
                constraint,
                field,
                value,
            }) => Some(serde_json::json!({
                "entityType": entity_type,
                "constraint": constraint,
                "field": field,
                "value": value
            })),
            CatalogError::Entity(EntityError::VersionConflict {
                entity_type,
                id,
                expected,
            }) => Some(serde_json::json!({
                "entityType": entity_type,
                "id": id,
                "expectedVersion": expected
            })),
            _ => None,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Rejected write: every broken rule of the candidate entity
#[derive(Debug, Clone, Error)]
#[error("Validation failed for {entity_type}: {}", join_messages(.violations))]
pub struct ValidationFailure {
    pub entity_type: &'static str,
    pub violations: Vec<Violation>,
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationFailure {
    /// The messages of all violations, in rule order
    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.message).collect()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity operations
#[derive(Debug, Clone, Error)]
pub enum EntityError {
    /// Entity was not found
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: &'static str, id: i64 },

    /// A unique business key is already taken
    #[error("{entity_type} with {field} '{value}' already exists")]
    UniquenessViolation {
        entity_type: &'static str,
        constraint: String,
        field: &'static str,
        value: String,
    },

    /// The write was based on a stale version of the record
    #[error("{entity_type} with id '{id}' was modified concurrently (expected version {expected})")]
    VersionConflict {
        entity_type: &'static str,
        id: i64,
        expected: i32,
    },

    /// Update or delete attempted on a record that was never persisted
    #[error("{entity_type} has no identity; persist it before updating")]
    Transient { entity_type: &'static str },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::UniquenessViolation { .. } => StatusCode::CONFLICT,
            EntityError::VersionConflict { .. } => StatusCode::CONFLICT,
            EntityError::Transient { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::UniquenessViolation { .. } => "UNIQUENESS_VIOLATION",
            EntityError::VersionConflict { .. } => "VERSION_CONFLICT",
            EntityError::Transient { .. } => "ENTITY_NOT_PERSISTED",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Backend could not be reached (connection refused, pool exhausted, ...)
    #[error("Storage backend '{backend}' is unavailable: {message}")]
    Unavailable {
        backend: &'static str,
        message: String,
    },

    /// Query execution or decoding failed
    #[error("{backend} query error: {message}")]
    Query {
        backend: &'static str,
        message: String,
    },
}

impl StorageError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorageError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            StorageError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
            StorageError::Query { .. } => "STORAGE_ERROR",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Malformed HTTP input
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("Invalid query string: {message}")]
    InvalidQuery { message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Invalid sort expression '{value}': only 'id' with 'asc' or 'desc' is supported")]
    InvalidSort { value: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{f}'")).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("IO error reading '{path}': {message}")]
    IoError { path: String, message: String },
}
