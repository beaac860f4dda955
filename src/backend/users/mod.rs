//! User profile routes, mounted at `/api/users`.
//!
//! - `GET  /search?query=` - case-insensitive search, 20 results max
//! - `GET  /suggested`     - people the caller has no connection with (auth)
//! - `PUT  /profile`       - partial update of the caller's profile (auth)
//! - `GET  /{id}`          - a single profile

pub mod handlers;

use axum::{
    routing::{get, put},
    Router,
};

use crate::backend::server::state::AppState;

pub use handlers::{get_profile, search_users, suggested_users, update_profile};

pub const SEARCH_LIMIT: usize = 20;
pub const SUGGESTION_LIMIT: usize = 10;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_users))
        .route("/suggested", get(suggested_users))
        .route("/profile", put(update_profile))
        .route("/{id}", get(get_profile))
}
