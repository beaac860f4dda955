//! Shared Module
//!
//! Types shared between the server (`backend`) and the HTTP client
//! (`client`). Everything here is plain serde data: the records the API
//! returns, the request bodies it accepts, and the validation rules both
//! sides apply to them.

/// Resource records (users, posts, opportunities, connections, messages)
pub mod models;

/// Request and response bodies
pub mod api;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use api::*;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use models::*;
