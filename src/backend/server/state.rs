/**
 * Application State Management
 *
 * `AppState` is cloned into every handler. It holds the store behind a trait
 * object, the token service and the server configuration; the `FromRef`
 * impls let handlers extract just the part they need.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use std::sync::Arc;
 * use connectx::backend::storage::Store;
 *
 * async fn handler(State(store): State<Arc<dyn Store>>) {
 *     let posts = store.list_posts().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::ServerConfig;
use crate::backend::storage::Store;

#[derive(Clone)]
pub struct AppState {
    /// Persistence backend (Postgres or in-memory)
    pub store: Arc<dyn Store>,
    /// Issues and verifies session tokens
    pub tokens: TokenService,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: ServerConfig) -> Self {
        Self {
            store,
            tokens: TokenService::new(config.jwt_secret.clone(), config.token_ttl),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
