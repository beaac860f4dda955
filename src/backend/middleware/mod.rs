//! Middleware Module
//!
//! Request-side plumbing shared by every router:
//!
//! - **`auth`** - `AuthUser` extractor resolving the bearer token to a user
//! - **`extract`** - `Payload` (JSON or form body) and `ApiPath` extractors
//!   that reject with `ApiError::Validation`
//! - **`errors`** - `render_errors` middleware and the panic handler

pub mod auth;
pub mod errors;
pub mod extract;

pub use auth::AuthUser;
pub use errors::{handle_panic, render_errors};
pub use extract::{ApiPath, Payload};
