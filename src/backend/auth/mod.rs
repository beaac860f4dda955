//! Authentication Module
//!
//! User accounts, password hashing and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and password hashing
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers (signup, login, me)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → `AuthUser`
//!    extractor verifies the token and loads the user
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs signed with the configured secret
//! - Tokens expire after the configured lifetime (30 days by default)
//! - Invalid credentials return 401 without saying which part was wrong

/// User data model and password hashing
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, signup};
pub use sessions::{Claims, TokenError, TokenService};

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;

/// Routes mounted at `/api/auth`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(get_me))
}
