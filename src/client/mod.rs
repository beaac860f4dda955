//! Client Module
//!
//! Async wrapper over the REST API for Rust front ends and tools.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs          - Module exports
//! ├── config.rs       - ClientConfig (base URL)
//! ├── credentials.rs  - CredentialProvider and its implementations
//! ├── error.rs        - ClientError
//! ├── api.rs          - ApiClient: auth header, status handling
//! └── resources.rs    - One method per API operation, grouped by resource
//! ```
//!
//! The wrapper does not retry or reinterpret failures: a non-2xx response
//! becomes `ClientError::Status` with the server's error body.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod resources;

pub use api::ApiClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use credentials::{CredentialError, CredentialProvider, FileCredentials, MemoryCredentials};
pub use error::ClientError;
pub use resources::{AuthApi, ConnectionsApi, MessagesApi, OpportunitiesApi, PostsApi, UsersApi};
