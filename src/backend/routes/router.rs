/**
 * Router Configuration
 *
 * `create_router` combines the root route, the API routers and the JSON
 * fallback, then wraps everything in the gateway layers.
 */

use axum::{middleware, response::Json, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::ApiError;
use crate::backend::middleware::{handle_panic, render_errors};
use crate::backend::routes::api_routes::{
    configure_api_routes, AUTH_PATH, CONNECTIONS_PATH, MESSAGES_PATH, OPPORTUNITIES_PATH, POSTS_PATH, USERS_PATH,
};
use crate::backend::server::state::AppState;
use crate::shared::api::{Endpoints, ServiceInfo};

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store, token service and configuration
///
/// # Returns
///
/// A stateless router ready to be served
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new().route("/", get(service_info));

    let router = configure_api_routes(router);

    router
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(app_state.clone(), render_errors))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// GET /
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Connect X API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            auth: AUTH_PATH.to_string(),
            posts: POSTS_PATH.to_string(),
            users: USERS_PATH.to_string(),
            opportunities: OPPORTUNITIES_PATH.to_string(),
            messages: MESSAGES_PATH.to_string(),
            connections: CONNECTIONS_PATH.to_string(),
        },
    })
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
