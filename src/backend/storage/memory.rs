//! In-memory `Store` implementation.
//!
//! All tables sit behind one `RwLock`, so every mutation (including the
//! set inserts for likes and applicants and the pair check for connections)
//! is a single critical section. Vectors keep insertion order, which is the
//! creation order the API sorts by.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StorageError, Store, StoreResult};
use crate::backend::auth::users::User;
use crate::shared::api::UpdateProfileRequest;
use crate::shared::models::{Comment, Connection, ConnectionStatus, Message, Opportunity, Post};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    posts: Vec<Post>,
    opportunities: Vec<Opportunity>,
    connections: Vec<Connection>,
    messages: Vec<Message>,
}

/// Process-local store for development and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StorageError::Duplicate("email"));
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn update_user(&self, id: Uuid, update: &UpdateProfileRequest) -> StoreResult<Option<User>> {
        let mut tables = self.tables.write().await;
        Ok(tables.users.get_mut(&id).map(|user| {
            user.apply(update);
            user.clone()
        }))
    }

    async fn search_users(&self, query: &str, limit: usize) -> StoreResult<Vec<User>> {
        let needle = query.to_lowercase();
        let tables = self.tables.read().await;
        let mut found: Vec<User> = tables
            .users
            .values()
            .filter(|u| u.profile().matches(&needle))
            .cloned()
            .collect();
        found.sort_by_cached_key(|u| u.name.to_lowercase());
        found.truncate(limit);
        Ok(found)
    }

    async fn users_excluding(&self, exclude: &[Uuid], limit: usize) -> StoreResult<Vec<User>> {
        let tables = self.tables.read().await;
        let mut found: Vec<User> = tables
            .users
            .values()
            .filter(|u| !exclude.contains(&u.id))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found.truncate(limit);
        Ok(found)
    }

    async fn create_post(&self, post: Post) -> StoreResult<Post> {
        self.tables.write().await.posts.push(post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        Ok(self.tables.read().await.posts.iter().rev().cloned().collect())
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        Ok(tables.posts.len() != before)
    }

    async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        Ok(tables.posts.iter_mut().find(|p| p.id == post_id).map(|post| {
            post.like(user_id);
            post.clone()
        }))
    }

    async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        Ok(tables.posts.iter_mut().find(|p| p.id == post_id).map(|post| {
            post.unlike(user_id);
            post.clone()
        }))
    }

    async fn add_comment(&self, post_id: Uuid, comment: Comment) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        Ok(tables.posts.iter_mut().find(|p| p.id == post_id).map(|post| {
            post.comments.push(comment);
            post.clone()
        }))
    }

    async fn create_opportunity(&self, opportunity: Opportunity) -> StoreResult<Opportunity> {
        self.tables.write().await.opportunities.push(opportunity.clone());
        Ok(opportunity)
    }

    async fn list_opportunities(&self) -> StoreResult<Vec<Opportunity>> {
        Ok(self.tables.read().await.opportunities.iter().rev().cloned().collect())
    }

    async fn find_opportunity(&self, id: Uuid) -> StoreResult<Option<Opportunity>> {
        let tables = self.tables.read().await;
        Ok(tables.opportunities.iter().find(|o| o.id == id).cloned())
    }

    async fn add_applicant(&self, opportunity_id: Uuid, user_id: Uuid) -> StoreResult<Option<Opportunity>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .opportunities
            .iter_mut()
            .find(|o| o.id == opportunity_id)
            .map(|opportunity| {
                if !opportunity.has_applied(user_id) {
                    opportunity.applicants.push(user_id);
                }
                opportunity.clone()
            }))
    }

    async fn create_connection(&self, connection: Connection) -> StoreResult<Connection> {
        let mut tables = self.tables.write().await;
        if tables
            .connections
            .iter()
            .any(|c| c.links(connection.requester, connection.recipient))
        {
            return Err(StorageError::Duplicate("connection"));
        }
        tables.connections.push(connection.clone());
        Ok(connection)
    }

    async fn find_connection(&self, id: Uuid) -> StoreResult<Option<Connection>> {
        let tables = self.tables.read().await;
        Ok(tables.connections.iter().find(|c| c.id == id).cloned())
    }

    async fn connection_between(&self, a: Uuid, b: Uuid) -> StoreResult<Option<Connection>> {
        let tables = self.tables.read().await;
        Ok(tables.connections.iter().find(|c| c.links(a, b)).cloned())
    }

    async fn accept_connection(&self, id: Uuid) -> StoreResult<Option<Connection>> {
        let mut tables = self.tables.write().await;
        Ok(tables.connections.iter_mut().find(|c| c.id == id).map(|connection| {
            connection.status = ConnectionStatus::Accepted;
            connection.updated_at = Utc::now();
            connection.clone()
        }))
    }

    async fn delete_connection_between(&self, a: Uuid, b: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.connections.len();
        tables.connections.retain(|c| !c.links(a, b));
        Ok(tables.connections.len() != before)
    }

    async fn connections_for(&self, user: Uuid, status: Option<ConnectionStatus>) -> StoreResult<Vec<Connection>> {
        let tables = self.tables.read().await;
        Ok(tables
            .connections
            .iter()
            .rev()
            .filter(|c| c.counterpart(user).is_some())
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect())
    }

    async fn create_message(&self, message: Message) -> StoreResult<Message> {
        self.tables.write().await.messages.push(message.clone());
        Ok(message)
    }

    async fn messages_between(&self, a: Uuid, b: Uuid) -> StoreResult<Vec<Message>> {
        let key = crate::shared::models::ConversationKey::new(a, b);
        let tables = self.tables.read().await;
        Ok(tables
            .messages
            .iter()
            .filter(|m| m.conversation_key() == key)
            .cloned()
            .collect())
    }

    async fn messages_for(&self, user: Uuid) -> StoreResult<Vec<Message>> {
        let tables = self.tables.read().await;
        Ok(tables
            .messages
            .iter()
            .filter(|m| m.sender == user || m.recipient == user)
            .cloned()
            .collect())
    }

    async fn mark_read(&self, sender: Uuid, recipient: Uuid) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        let mut updated = 0;
        for message in tables
            .messages
            .iter_mut()
            .filter(|m| m.sender == sender && m.recipient == recipient && !m.read)
        {
            message.read = true;
            updated += 1;
        }
        Ok(updated)
    }
}
