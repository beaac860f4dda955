//! Server Module
//!
//! Startup plumbing for the Axum server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - ServerConfig loaded from the environment
//! └── init.rs   - Store selection and app creation
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::{build_store, create_app};
pub use state::AppState;
