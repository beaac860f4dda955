//! Opportunity routes, mounted at `/api/opportunities`.

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;

pub use handlers::{apply_to_opportunity, create_opportunity, get_opportunity, list_opportunities};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_opportunities).post(create_opportunity))
        .route("/{id}", get(get_opportunity))
        .route("/{id}/apply", post(apply_to_opportunity))
}
