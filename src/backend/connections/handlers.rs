//! HTTP handlers for connection requests

use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::{ApiPath, AuthUser, Payload};
use crate::backend::storage::{StorageError, Store};
use crate::shared::api::{ConnectionRequestBody, MessageResponse};
use crate::shared::models::{Connection, ConnectionStatus, PendingRequest, UserProfile};

/// GET /api/connections
///
/// Profiles of everyone with an accepted connection to the caller.
pub async fn list_connections(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<UserProfile>>> {
    let connections = store
        .connections_for(user.id, Some(ConnectionStatus::Accepted))
        .await?;

    let mut profiles = Vec::with_capacity(connections.len());
    for other in connections.iter().filter_map(|c| c.counterpart(user.id)) {
        if let Some(other) = store.find_user(other).await? {
            profiles.push(other.profile());
        }
    }

    Ok(Json(profiles))
}

/// GET /api/connections/requests
///
/// Pending requests addressed to the caller.
pub async fn pending_requests(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<PendingRequest>>> {
    let connections = store
        .connections_for(user.id, Some(ConnectionStatus::Pending))
        .await?;

    let mut requests = Vec::new();
    for connection in connections.into_iter().filter(|c| c.recipient == user.id) {
        if let Some(requester) = store.find_user(connection.requester).await? {
            requests.push(PendingRequest {
                connection,
                requester: requester.profile(),
            });
        }
    }

    Ok(Json(requests))
}

/// POST /api/connections/request
pub async fn send_request(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Payload(body): Payload<ConnectionRequestBody>,
) -> ApiResult<(StatusCode, Json<Connection>)> {
    let recipient = body.recipient_id;

    if recipient == user.id {
        return Err(ApiError::validation("You cannot connect with yourself"));
    }

    if store.find_user(recipient).await?.is_none() {
        return Err(ApiError::not_found("User not found"));
    }

    if store.connection_between(user.id, recipient).await?.is_some() {
        tracing::warn!("Connection between {} and {} already exists", user.id, recipient);
        return Err(ApiError::validation("Connection already exists"));
    }

    let connection = store
        .create_connection(Connection::request(user.id, recipient))
        .await
        .map_err(|e| match e {
            StorageError::Duplicate(_) => ApiError::validation("Connection already exists"),
            other => ApiError::from(other),
        })?;

    tracing::info!("Connection request {} sent: {} -> {}", connection.id, user.id, recipient);
    Ok((StatusCode::CREATED, Json(connection)))
}

/// PUT /api/connections/accept/{request_id}
pub async fn accept_request(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiPath(request_id): ApiPath<Uuid>,
) -> ApiResult<Json<Connection>> {
    let not_found = || ApiError::not_found("Connection request not found");

    let connection = store.find_connection(request_id).await?.ok_or_else(not_found)?;

    if connection.recipient != user.id {
        tracing::warn!("User {} tried to accept request {} addressed to {}", user.id, request_id, connection.recipient);
        return Err(ApiError::forbidden("Not authorized to accept this request"));
    }
    if connection.status == ConnectionStatus::Accepted {
        return Err(ApiError::validation("Connection already accepted"));
    }

    let connection = store.accept_connection(request_id).await?.ok_or_else(not_found)?;

    tracing::info!("Connection {} accepted", connection.id);
    Ok(Json(connection))
}

/// DELETE /api/connections/{user_id}
pub async fn remove_connection(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiPath(other): ApiPath<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    if !store.delete_connection_between(user.id, other).await? {
        return Err(ApiError::not_found("Connection not found"));
    }

    tracing::info!("Connection between {} and {} removed", user.id, other);
    Ok(Json(MessageResponse::new("Connection removed")))
}
