/**
 * Error Rendering
 *
 * `render_errors` runs outside every route. For failed responses it writes
 * the final `{message, stack}` body:
 *
 * - responses from `ApiError` carry an `ErrorReport`; outside production the
 *   unredacted message and debug chain from it are used,
 * - other failures (405, framework rejections) get the canonical reason.
 *
 * Panics are turned into `ApiError::Internal` by `handle_panic`, which sits
 * inside this middleware so the same rendering applies.
 */

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;

use crate::backend::error::conversion::GENERIC_SERVER_ERROR;
use crate::backend::error::{ApiError, ErrorReport};
use crate::backend::server::state::AppState;
use crate::shared::api::ErrorBody;

pub async fn render_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let production = state.config.production;
    let report = response.extensions().get::<ErrorReport>().cloned();
    if production && report.is_some() {
        return response;
    }

    let body = match report {
        Some(report) => ErrorBody {
            message: report.message,
            stack: Some(report.stack),
        },
        None => ErrorBody {
            message: if production && status.is_server_error() {
                GENERIC_SERVER_ERROR.to_string()
            } else {
                status.canonical_reason().unwrap_or("Error").to_string()
            },
            stack: None,
        },
    };

    let bytes = match serde_json::to_vec(&body) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to serialize error body: {:?}", e);
            return response;
        }
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts
        .headers
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::from_parts(parts, Body::from(bytes))
}

/// `CatchPanicLayer` handler
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    ApiError::internal(format!("Handler panicked: {detail}")).into_response()
}
