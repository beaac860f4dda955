//! Connection routes, mounted at `/api/connections`.
//!
//! A connection row is created pending by the requester and accepted by the
//! recipient. There is at most one row per pair of users regardless of who
//! asked first; the store enforces that.

pub mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::server::state::AppState;

pub use handlers::{accept_request, list_connections, pending_requests, remove_connection, send_request};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_connections))
        .route("/requests", get(pending_requests))
        .route("/request", post(send_request))
        .route("/accept/{request_id}", put(accept_request))
        .route("/{user_id}", delete(remove_connection))
}
