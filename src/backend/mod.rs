//! Backend Module
//!
//! The Connect X REST API: an Axum server over a pluggable store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup
//! - **`routes`** - Router assembly and gateway layers
//! - **`middleware`** - Auth extractor, body/path extractors, error rendering
//! - **`error`** - `ApiError` and its HTTP mapping
//! - **`storage`** - `Store` trait with in-memory and PostgreSQL backends
//! - **`auth`** - Signup, login, session tokens
//! - **`users`**, **`posts`**, **`opportunities`**, **`connections`**,
//!   **`messages`** - Resource routers
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Extractors and error rendering
//! ├── error/          - Error types
//! ├── storage/        - Store trait, MemoryStore, PgStore
//! ├── auth/           - Authentication
//! ├── users/          - Profiles, search, suggestions
//! ├── posts/          - Feed, likes, comments
//! ├── opportunities/  - Listings and applications
//! ├── connections/    - Connection requests
//! └── messages/       - Direct messages
//! ```
//!
//! # Request Lifecycle
//!
//! 1. `TraceLayer` opens a span, CORS headers are applied
//! 2. The route's extractors run: `AuthUser` (401 on a bad token),
//!    `ApiPath` and `Payload` (400 on malformed input)
//! 3. The handler calls the `Store` and returns `Result<_, ApiError>`
//! 4. `render_errors` shapes failures into `{message, stack}`
//!
//! # Example
//!
//! ```rust,no_run
//! use connectx::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::default()).await?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Persistence backends
pub mod storage;

/// Authentication and user management
pub mod auth;

/// User profiles
pub mod users;

/// Posts, likes and comments
pub mod posts;

/// Job listings and applications
pub mod opportunities;

/// Connection requests between users
pub mod connections;

/// Direct messages
pub mod messages;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
pub use storage::{MemoryStore, PgStore, Store};
