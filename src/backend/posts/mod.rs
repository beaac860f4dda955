//! Feed routes, mounted at `/api/posts`.
//!
//! Likes are a set: liking twice leaves one entry, and `DELETE /{id}/like`
//! removes it again. Only the author may delete a post.

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;

pub use handlers::{comment_on_post, create_post, delete_post, get_post, like_post, list_posts, unlike_post};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", get(get_post).delete(delete_post))
        .route("/{id}/like", post(like_post).delete(unlike_post))
        .route("/{id}/comment", post(comment_on_post))
}
