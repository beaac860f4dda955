//! Storage Module
//!
//! The persistence boundary of the backend. Handlers talk to a `Store`
//! trait object; two implementations exist:
//!
//! - **`memory`** - `MemoryStore`, process-local tables behind a single
//!   `tokio::sync::RwLock`. Used when `DATABASE_URL` is not set and in tests.
//! - **`postgres`** - `PgStore`, PostgreSQL through a `sqlx` pool, schema in
//!   `migrations/`.
//!
//! # Invariants owned by the store
//!
//! - Likes and applicants are sets: inserting an existing member is a no-op.
//! - At most one connection exists per unordered pair of users; a second
//!   insert fails with `StorageError::Duplicate`.
//! - Email addresses are unique; a second insert fails with
//!   `StorageError::Duplicate`.
//! - Lists come back in API order: posts and opportunities newest first,
//!   messages oldest first.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::api::UpdateProfileRequest;
use crate::shared::models::{Comment, Connection, ConnectionStatus, Message, Opportunity, Post};

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a store
#[derive(Debug, Error)]
pub enum StorageError {
    /// A uniqueness constraint was violated (the payload names the record kind)
    #[error("duplicate {0}")]
    Duplicate(&'static str),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StorageError>;

/// Persistence operations used by the resource routers
#[async_trait]
pub trait Store: Send + Sync {
    // Users
    async fn create_user(&self, user: User) -> StoreResult<User>;
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn update_user(&self, id: Uuid, update: &UpdateProfileRequest) -> StoreResult<Option<User>>;
    /// Case-insensitive substring search over name, email and headline, ordered by
    /// lowercased name.
    async fn search_users(&self, query: &str, limit: usize) -> StoreResult<Vec<User>>;
    /// Newest users whose id is not in `exclude`.
    async fn users_excluding(&self, exclude: &[Uuid], limit: usize) -> StoreResult<Vec<User>>;

    // Posts
    async fn create_post(&self, post: Post) -> StoreResult<Post>;
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;
    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>>;
    async fn delete_post(&self, id: Uuid) -> StoreResult<bool>;
    async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Option<Post>>;
    async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Option<Post>>;
    async fn add_comment(&self, post_id: Uuid, comment: Comment) -> StoreResult<Option<Post>>;

    // Opportunities
    async fn create_opportunity(&self, opportunity: Opportunity) -> StoreResult<Opportunity>;
    async fn list_opportunities(&self) -> StoreResult<Vec<Opportunity>>;
    async fn find_opportunity(&self, id: Uuid) -> StoreResult<Option<Opportunity>>;
    async fn add_applicant(&self, opportunity_id: Uuid, user_id: Uuid) -> StoreResult<Option<Opportunity>>;

    // Connections
    async fn create_connection(&self, connection: Connection) -> StoreResult<Connection>;
    async fn find_connection(&self, id: Uuid) -> StoreResult<Option<Connection>>;
    async fn connection_between(&self, a: Uuid, b: Uuid) -> StoreResult<Option<Connection>>;
    async fn accept_connection(&self, id: Uuid) -> StoreResult<Option<Connection>>;
    async fn delete_connection_between(&self, a: Uuid, b: Uuid) -> StoreResult<bool>;
    /// Connections involving `user`, optionally filtered by status, newest first.
    async fn connections_for(&self, user: Uuid, status: Option<ConnectionStatus>) -> StoreResult<Vec<Connection>>;

    // Messages
    async fn create_message(&self, message: Message) -> StoreResult<Message>;
    async fn messages_between(&self, a: Uuid, b: Uuid) -> StoreResult<Vec<Message>>;
    async fn messages_for(&self, user: Uuid) -> StoreResult<Vec<Message>>;
    /// Mark every unread message from `sender` to `recipient` as read.
    async fn mark_read(&self, sender: Uuid, recipient: Uuid) -> StoreResult<u64>;
}
