//! Connect X - Main Library
//!
//! Backend and client for a professional social network: accounts, profiles,
//! a feed with likes and comments, job opportunities, connection requests
//! and direct messages, served as a JSON REST API.
//!
//! # Module Structure
//!
//! - **`shared`** - Types used by both sides of the wire
//!   - Data model (`UserProfile`, `Post`, `Opportunity`, `Connection`, `Message`)
//!   - Request/response bodies with validation
//!   - Client configuration and shared errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router with auth, users, posts, opportunities, connections and
//!     messages routes
//!   - `Store` trait with in-memory and PostgreSQL implementations
//!   - JWT sessions and bcrypt password hashing
//!
//! - **`client`** - Async HTTP wrapper over the API (only compiled with the
//!   `client` feature)
//!   - One method per operation, grouped by resource
//!   - Pluggable credential storage
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server (Axum, sqlx, bcrypt, jsonwebtoken)
//! - **`client`** - Client wrapper (reqwest, dirs)
//!
//! Both are enabled by default.
//!
//! # Usage
//!
//! ```rust,no_run
//! use connectx::client::{ApiClient, ClientConfig, MemoryCredentials};
//! use connectx::shared::api::LoginRequest;
//!
//! # async fn example() -> Result<(), connectx::client::ClientError> {
//! let client = ApiClient::new(ClientConfig::default(), MemoryCredentials::default())?;
//! let session = client
//!     .auth()
//!     .login(&LoginRequest { email: "alice@x.com".into(), password: "p1".into() })
//!     .await?;
//! println!("logged in as {}", session.user.name);
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// HTTP client for the API
#[cfg(feature = "client")]
pub mod client;
