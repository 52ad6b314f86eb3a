//! Shared Error Types
//!
//! This module defines the error type reported by input validation. It is
//! produced before any storage is touched, so it carries only the offending
//! field and a human-readable message that is safe to return to the client.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field is present but malformed
//! - `MissingField` - A required field is empty
//!
//! # Usage
//!
//! ```rust
//! use forum::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! ```
use thiserror::Error;

/// Errors raised while validating client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A required field was empty or absent
    #[error("Missing required field '{field}'")]
    MissingField {
        /// The field that was missing
        field: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Message suitable for the response body
    pub fn client_message(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => message.clone(),
            Self::MissingField { field } => format!("{} is required", field),
        }
    }
}
