//! Shared Error Types
//!
//! Validation failures raised by the wire types in `shared::api` before a
//! request leaves the client or reaches storage on the server. The backend
//! converts them into `ApiError::Validation`.
//!
//! # Usage
//!
//! ```rust
//! use connectx::shared::error::SharedError;
//!
//! let error = SharedError::validation("content", "Post content cannot be empty");
//! assert_eq!(error.field(), "content");
//! ```
use thiserror::Error;

/// Input validation errors shared by client and server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field is missing, blank or malformed
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A text field exceeds its maximum length
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// The offending field
        field: String,
        /// Maximum number of characters
        max: usize,
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

    /// Create a new length error
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } | Self::TooLong { field, .. } => field,
        }
    }
}

/// Reject blank input and input longer than `max` characters.
pub fn require_text(field: &str, value: &str, max: usize) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{field} is required")));
    }
    if value.chars().count() > max {
        return Err(SharedError::too_long(field, max));
    }
    Ok(())
}
