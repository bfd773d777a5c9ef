//! Custom error types for contas
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::StatusId;

/// The main error type for contas operations
#[derive(Error, Debug)]
pub enum ContaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for mutation payloads
    #[error("Validation error: {0}")]
    Validation(String),

    /// A filter or payload date that is neither YYYY-MM-DD nor DD/MM/YYYY
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD or DD/MM/YYYY)")]
    InvalidDateFormat(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Status toggle requested for a status outside the paid/pending pair
    #[error("Status {0} cannot be toggled (only statuses 1 and 2 are supported)")]
    UnsupportedStatus(StatusId),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Report rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Export delivery errors
    #[error("Export error: {0}")]
    Export(String),

    /// A mutation the service turned down; carries only the user-facing message
    #[error("{0}")]
    Rejected(String),
}

impl ContaError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for statuses
    pub fn status_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Status",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidDateFormat(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ContaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ContaError {
    fn from(err: csv::Error) -> Self {
        Self::Render(format!("CSV: {}", err))
    }
}

impl From<tera::Error> for ContaError {
    fn from(err: tera::Error) -> Self {
        Self::Render(format!("template: {}", err))
    }
}

impl From<zip::result::ZipError> for ContaError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Render(format!("docx container: {}", err))
    }
}

/// Result type alias for contas operations
pub type ContaResult<T> = Result<T, ContaError>;
