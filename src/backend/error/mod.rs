//! Backend Error Module
//!
//! Every handler returns `Result<_, ApiError>`. The variant decides the HTTP
//! status; the `render_errors` middleware decides how much of the error the
//! client gets to see.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and the `ErrorReport` extension
//! ├── types.rs      - `ApiError` and its status mapping
//! └── conversion.rs - `From` impls and `IntoResponse`
//! ```
//!
//! # Response Format
//!
//! ```json
//! { "message": "Post not found", "stack": null }
//! ```
//!
//! `stack` is filled in outside production mode only.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;

/// Result alias used by handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Full detail of an error response, attached as a response extension
///
/// `IntoResponse for ApiError` writes a production-safe body and stores the
/// unredacted message and debug chain here for `render_errors` to use.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub message: String,
    pub stack: String,
}
