//! HTTP handlers for direct messages

use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use uuid::Uuid;

use super::conversations::group_threads;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::{ApiPath, AuthUser, Payload};
use crate::backend::storage::Store;
use crate::shared::api::SendMessageRequest;
use crate::shared::models::{ConversationSummary, Message};

/// GET /api/messages/conversations
pub async fn list_conversations(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<ConversationSummary>>> {
    let messages = store.messages_for(user.id).await?;

    let mut summaries = Vec::new();
    for thread in group_threads(user.id, messages) {
        if let Some(with) = store.find_user(thread.with).await? {
            summaries.push(ConversationSummary {
                with: with.profile(),
                last_message: thread.last_message,
                unread_count: thread.unread_count,
            });
        }
    }

    Ok(Json(summaries))
}

/// GET /api/messages/{user_id}
pub async fn get_conversation(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiPath(other): ApiPath<Uuid>,
) -> ApiResult<Json<Vec<Message>>> {
    if store.find_user(other).await?.is_none() {
        return Err(ApiError::not_found("User not found"));
    }

    let marked = store.mark_read(other, user.id).await?;
    if marked > 0 {
        tracing::debug!("Marked {} messages from {} as read", marked, other);
    }

    Ok(Json(store.messages_between(user.id, other).await?))
}

/// POST /api/messages
pub async fn send_message(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Payload(request): Payload<SendMessageRequest>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    request.validate()?;

    if request.recipient == user.id {
        return Err(ApiError::validation("You cannot message yourself"));
    }

    if store.find_user(request.recipient).await?.is_none() {
        return Err(ApiError::not_found("Recipient not found"));
    }

    let message = store
        .create_message(Message::new(user.id, request.recipient, request.content.trim().to_string()))
        .await?;

    tracing::info!("Message {} sent: {} -> {}", message.id, message.sender, message.recipient);
    Ok((StatusCode::CREATED, Json(message)))
}
