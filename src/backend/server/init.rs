/**
 * Server Initialization
 *
 * Picks the store from configuration and assembles the router.
 *
 * 1. `DATABASE_URL` set: connect a `PgStore` and run migrations. A failure
 *    here aborts startup.
 * 2. Otherwise: an empty `MemoryStore`; data lives as long as the process.
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::storage::{MemoryStore, PgStore, Store, StoreResult};

/// Build the store selected by `config`
pub async fn build_store(config: &ServerConfig) -> StoreResult<Arc<dyn Store>> {
    match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url, config.max_connections).await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data will not persist.");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> StoreResult<Router> {
    tracing::info!(
        "Initializing Connect X API ({} mode)",
        if config.production { "production" } else { "development" }
    );

    let store = build_store(&config).await?;
    let app = create_router(AppState::new(store, config));

    tracing::info!("Router configured");
    Ok(app)
}
