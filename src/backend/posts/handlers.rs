//! HTTP handlers for posts, likes and comments

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::{ApiPath, AuthUser, Payload};
use crate::backend::storage::Store;
use crate::shared::api::{CommentRequest, CreatePostRequest, MessageResponse};
use crate::shared::models::{Comment, Post};

fn post_not_found() -> ApiError {
    ApiError::not_found("Post not found")
}

/// GET /api/posts
pub async fn list_posts(State(store): State<Arc<dyn Store>>) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(store.list_posts().await?))
}

/// POST /api/posts
pub async fn create_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Payload(request): Payload<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    request.validate()?;

    let post = Post::new(user.id, user.name, request.content.trim().to_string(), request.image_url);
    let post = store.create_post(post).await?;

    tracing::info!("Post {} created by {}", post.id, post.author);
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(store): State<Arc<dyn Store>>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Post>> {
    let post = store.find_post(id).await?.ok_or_else(post_not_found)?;
    Ok(Json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    let post = store.find_post(id).await?.ok_or_else(post_not_found)?;

    if !post.is_author(user.id) {
        tracing::warn!("User {} tried to delete post {} by {}", user.id, post.id, post.author);
        return Err(ApiError::forbidden("Not authorized to delete this post"));
    }

    if !store.delete_post(id).await? {
        return Err(post_not_found());
    }

    tracing::info!("Post {} deleted", id);
    Ok(Json(MessageResponse::new("Post removed")))
}

/// POST /api/posts/{id}/like
pub async fn like_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Post>> {
    let post = store.add_like(id, user.id).await?.ok_or_else(post_not_found)?;
    Ok(Json(post))
}

/// DELETE /api/posts/{id}/like
pub async fn unlike_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Post>> {
    let post = store.remove_like(id, user.id).await?.ok_or_else(post_not_found)?;
    Ok(Json(post))
}

/// POST /api/posts/{id}/comment
pub async fn comment_on_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    Payload(request): Payload<CommentRequest>,
) -> ApiResult<Json<Post>> {
    request.validate()?;

    let comment = Comment {
        id: Uuid::new_v4(),
        author: user.id,
        author_name: user.name,
        text: request.text.trim().to_string(),
        created_at: Utc::now(),
    };

    let post = store.add_comment(id, comment).await?.ok_or_else(post_not_found)?;
    tracing::info!("Comment added to post {}", post.id);
    Ok(Json(post))
}
