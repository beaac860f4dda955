//! Direct message routes, mounted at `/api/messages`.
//!
//! - `GET  /conversations` - one summary per counterpart, newest first
//! - `GET  /{user_id}`     - the conversation with one user, oldest first;
//!   marks messages sent to the caller as read
//! - `POST /`              - send a message

pub mod conversations;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;

pub use handlers::{get_conversation, list_conversations, send_message};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(send_message))
        .route("/conversations", get(list_conversations))
        .route("/{user_id}", get(get_conversation))
}
