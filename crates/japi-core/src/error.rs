//! Unified error types for the document model and its configuration.

use thiserror::Error;

/// Unified error type for JSON:API document handling.
///
/// The pagination calculator itself never fails; these variants cover
/// document validation, (de)serialization and configuration loading.
#[derive(Error, Debug)]
pub enum JsonApiError {
    // ============ Document Errors ============
    /// A member of a `links` object is neither a URL string nor a link object
    #[error("The {member} member of the links object was not a string or link object")]
    InvalidLink { member: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JsonApiError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLink { .. } => "INVALID_LINK",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an invalid link error for a `links` member.
    #[must_use]
    pub fn invalid_link<T: Into<String>>(member: T) -> Self {
        Self::InvalidLink {
            member: member.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}
