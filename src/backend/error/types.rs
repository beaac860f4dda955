/**
 * Backend Error Types
 *
 * `ApiError` covers every failure a handler can report. The status mapping
 * is a single explicit `match` in `status_code`.
 *
 * | Variant           | Status |
 * |-------------------|--------|
 * | `Validation`      | 400    |
 * | `Unauthenticated` | 401    |
 * | `Forbidden`       | 403    |
 * | `NotFound`        | 404    |
 * | `Storage`         | 500    |
 * | `Internal`        | 500    |
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::storage::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or semantically invalid input
    #[error("{0}")]
    Validation(String),

    /// Missing, invalid or expired credentials
    #[error("{0}")]
    Unauthenticated(String),

    /// Authenticated, but not allowed to act on the resource
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Hashing, signing and other unexpected failures
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Debug representation followed by the `source()` chain
    pub fn debug_chain(&self) -> String {
        use std::error::Error as _;
        use std::fmt::Write as _;

        let mut chain = format!("{self:?}");
        let mut source = self.source();
        while let Some(cause) = source {
            let _ = write!(chain, "\ncaused by: {cause}");
            source = cause.source();
        }
        chain
    }
}
