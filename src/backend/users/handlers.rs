//! HTTP handlers for user profiles

use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{SEARCH_LIMIT, SUGGESTION_LIMIT};
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::{ApiPath, AuthUser, Payload};
use crate::backend::storage::Store;
use crate::shared::api::{SearchParams, UpdateProfileRequest};
use crate::shared::models::UserProfile;

/// GET /api/users/{id}
pub async fn get_profile(
    State(store): State<Arc<dyn Store>>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<UserProfile>> {
    let user = store
        .find_user(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user.profile()))
}

/// PUT /api/users/profile
pub async fn update_profile(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Payload(update): Payload<UpdateProfileRequest>,
) -> ApiResult<Json<UserProfile>> {
    update.validate()?;

    let updated = store
        .update_user(user.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    tracing::info!("Profile updated: {}", updated.id);
    Ok(Json(updated.profile()))
}

/// GET /api/users/search?query=
pub async fn search_users(
    State(store): State<Arc<dyn Store>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<UserProfile>>> {
    let query = params.query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::validation("Search query is required"));
    }

    let users = store.search_users(query, SEARCH_LIMIT).await?;
    Ok(Json(users.iter().map(|u| u.profile()).collect()))
}

/// GET /api/users/suggested
///
/// Excludes the caller and anyone with a pending or accepted connection.
pub async fn suggested_users(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<UserProfile>>> {
    let mut exclude: Vec<Uuid> = store
        .connections_for(user.id, None)
        .await?
        .iter()
        .filter_map(|c| c.counterpart(user.id))
        .collect();
    exclude.push(user.id);

    let users = store.users_excluding(&exclude, SUGGESTION_LIMIT).await?;
    Ok(Json(users.iter().map(|u| u.profile()).collect()))
}
