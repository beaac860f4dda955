/**
 * API Routes
 *
 * Mounts each resource router under its `/api` prefix. Which routes need a
 * token is decided per handler by taking an `AuthUser` argument.
 *
 * ## Authentication
 * - `POST /api/auth/signup`, `POST /api/auth/login`, `GET /api/auth/me`
 *
 * ## Users
 * - `GET /api/users/{id}`, `PUT /api/users/profile`,
 *   `GET /api/users/search`, `GET /api/users/suggested`
 *
 * ## Posts
 * - `GET|POST /api/posts`, `GET|DELETE /api/posts/{id}`,
 *   `POST|DELETE /api/posts/{id}/like`, `POST /api/posts/{id}/comment`
 *
 * ## Opportunities
 * - `GET|POST /api/opportunities`, `GET /api/opportunities/{id}`,
 *   `POST /api/opportunities/{id}/apply`
 *
 * ## Connections
 * - `GET /api/connections`, `GET /api/connections/requests`,
 *   `POST /api/connections/request`, `PUT /api/connections/accept/{id}`,
 *   `DELETE /api/connections/{user_id}`
 *
 * ## Messages
 * - `GET /api/messages/conversations`, `GET /api/messages/{user_id}`,
 *   `POST /api/messages`
 */

use axum::Router;

use crate::backend::server::state::AppState;
use crate::backend::{auth, connections, messages, opportunities, posts, users};

pub const AUTH_PATH: &str = "/api/auth";
pub const USERS_PATH: &str = "/api/users";
pub const POSTS_PATH: &str = "/api/posts";
pub const OPPORTUNITIES_PATH: &str = "/api/opportunities";
pub const CONNECTIONS_PATH: &str = "/api/connections";
pub const MESSAGES_PATH: &str = "/api/messages";

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .nest(AUTH_PATH, auth::routes())
        .nest(USERS_PATH, users::routes())
        .nest(POSTS_PATH, posts::routes())
        .nest(OPPORTUNITIES_PATH, opportunities::routes())
        .nest(CONNECTIONS_PATH, connections::routes())
        .nest(MESSAGES_PATH, messages::routes())
}
