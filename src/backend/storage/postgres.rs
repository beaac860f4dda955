//! PostgreSQL `Store` implementation.
//!
//! Likes, comments and applicants live in their own tables and are loaded in
//! one batch per list query with `= ANY($1)`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

use super::{StorageError, Store, StoreResult};
use crate::backend::auth::users::User;
use crate::shared::api::UpdateProfileRequest;
use crate::shared::models::{
    Comment, Connection, ConnectionStatus, Message, Opportunity, OpportunityKind, Post,
};

const USER_COLUMNS: &str =
    "id, name, email, password_hash, headline, bio, location, skills, avatar_url, created_at, updated_at";

/// Store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    author: Uuid,
    author_name: String,
    content: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct OpportunityRow {
    id: Uuid,
    author: Uuid,
    title: String,
    company: String,
    description: String,
    location: Option<String>,
    kind: String,
    created_at: DateTime<Utc>,
}

impl PgStore {
    /// Connect to `database_url` and bring the schema up to date
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    /// * `max_connections` - Pool size
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    /// Wrap an existing pool; the schema is assumed to be migrated
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn hydrate_posts(&self, rows: Vec<PostRow>) -> StoreResult<Vec<Post>> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();

        let like_rows = sqlx::query(
            r#"
            SELECT post_id, user_id FROM post_likes
            WHERE post_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut likes: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in like_rows {
            likes
                .entry(row.get("post_id"))
                .or_default()
                .push(row.get("user_id"));
        }

        let comment_rows = sqlx::query(
            r#"
            SELECT id, post_id, author, author_name, text, created_at FROM post_comments
            WHERE post_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut comments: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for row in comment_rows {
            comments.entry(row.get("post_id")).or_default().push(Comment {
                id: row.get("id"),
                author: row.get("author"),
                author_name: row.get("author_name"),
                text: row.get("text"),
                created_at: row.get("created_at"),
            });
        }

        Ok(rows
            .into_iter()
            .map(|row| Post {
                likes: likes.remove(&row.id).unwrap_or_default(),
                comments: comments.remove(&row.id).unwrap_or_default(),
                id: row.id,
                author: row.author,
                author_name: row.author_name,
                content: row.content,
                image_url: row.image_url,
                created_at: row.created_at,
            })
            .collect())
    }

    async fn hydrate_opportunities(&self, rows: Vec<OpportunityRow>) -> StoreResult<Vec<Opportunity>> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();

        let applicant_rows = sqlx::query(
            r#"
            SELECT opportunity_id, user_id FROM opportunity_applicants
            WHERE opportunity_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut applicants: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in applicant_rows {
            applicants
                .entry(row.get("opportunity_id"))
                .or_default()
                .push(row.get("user_id"));
        }

        Ok(rows
            .into_iter()
            .map(|row| Opportunity {
                applicants: applicants.remove(&row.id).unwrap_or_default(),
                kind: OpportunityKind::from_str(&row.kind).unwrap_or_default(),
                id: row.id,
                author: row.author,
                title: row.title,
                company: row.company,
                description: row.description,
                location: row.location,
                created_at: row.created_at,
            })
            .collect())
    }
}

fn classify(err: sqlx::Error, kind: &'static str) -> StorageError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Duplicate(kind),
        _ => StorageError::Database(err),
    }
}

/// Escape LIKE wildcards so the query is matched literally
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn connection_from_row(row: &PgRow) -> Connection {
    Connection {
        id: row.get("id"),
        requester: row.get("requester"),
        recipient: row.get("recipient"),
        status: ConnectionStatus::from_str(row.get::<String, _>("status").as_str()).unwrap_or_default(),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn message_from_row(row: &PgRow) -> Message {
    Message {
        id: row.get("id"),
        sender: row.get("sender"),
        recipient: row.get("recipient"),
        content: row.get("content"),
        read: row.get("is_read"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, user: User) -> StoreResult<User> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users ({USER_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.headline)
        .bind(&user.bio)
        .bind(&user.location)
        .bind(&user.skills)
        .bind(&user.avatar_url)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "email"))
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn update_user(&self, id: Uuid, update: &UpdateProfileRequest) -> StoreResult<Option<User>> {
        Ok(sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                headline = COALESCE($3, headline),
                bio = COALESCE($4, bio),
                location = COALESCE($5, location),
                skills = COALESCE($6, skills),
                avatar_url = COALESCE($7, avatar_url),
                updated_at = $8
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.name.as_deref().map(str::trim))
        .bind(&update.headline)
        .bind(&update.bio)
        .bind(&update.location)
        .bind(&update.skills)
        .bind(&update.avatar_url)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn search_users(&self, query: &str, limit: usize) -> StoreResult<Vec<User>> {
        Ok(sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS} FROM users
            WHERE name ILIKE $1 ESCAPE '\' OR email ILIKE $1 ESCAPE '\' OR headline ILIKE $1 ESCAPE '\'
            ORDER BY lower(name)
            LIMIT $2
            "#
        ))
        .bind(like_pattern(query))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn users_excluding(&self, exclude: &[Uuid], limit: usize) -> StoreResult<Vec<User>> {
        Ok(sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS} FROM users
            WHERE NOT (id = ANY($1))
            ORDER BY created_at DESC
            LIMIT $2
            "#
        ))
        .bind(exclude)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_post(&self, post: Post) -> StoreResult<Post> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author, author_name, content, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id)
        .bind(post.author)
        .bind(&post.author_name)
        .bind(&post.content)
        .bind(&post.image_url)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author, author_name, content, image_url, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        self.hydrate_posts(rows).await
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author, author_name, content, image_url, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(self.hydrate_posts(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Option<Post>> {
        sqlx::query(
            r#"
            INSERT INTO post_likes (post_id, user_id, created_at)
            SELECT $1, $2, $3 WHERE EXISTS (SELECT 1 FROM posts WHERE id = $1)
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.find_post(post_id).await
    }

    async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<Option<Post>> {
        sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        self.find_post(post_id).await
    }

    async fn add_comment(&self, post_id: Uuid, comment: Comment) -> StoreResult<Option<Post>> {
        sqlx::query(
            r#"
            INSERT INTO post_comments (id, post_id, author, author_name, text, created_at)
            SELECT $1, $2, $3, $4, $5, $6 WHERE EXISTS (SELECT 1 FROM posts WHERE id = $2)
            "#,
        )
        .bind(comment.id)
        .bind(post_id)
        .bind(comment.author)
        .bind(&comment.author_name)
        .bind(&comment.text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        self.find_post(post_id).await
    }

    async fn create_opportunity(&self, opportunity: Opportunity) -> StoreResult<Opportunity> {
        sqlx::query(
            r#"
            INSERT INTO opportunities (id, author, title, company, description, location, kind, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(opportunity.id)
        .bind(opportunity.author)
        .bind(&opportunity.title)
        .bind(&opportunity.company)
        .bind(&opportunity.description)
        .bind(&opportunity.location)
        .bind(opportunity.kind.as_str())
        .bind(opportunity.created_at)
        .execute(&self.pool)
        .await?;

        Ok(opportunity)
    }

    async fn list_opportunities(&self) -> StoreResult<Vec<Opportunity>> {
        let rows = sqlx::query_as::<_, OpportunityRow>(
            r#"
            SELECT id, author, title, company, description, location, kind, created_at
            FROM opportunities
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        self.hydrate_opportunities(rows).await
    }

    async fn find_opportunity(&self, id: Uuid) -> StoreResult<Option<Opportunity>> {
        let row = sqlx::query_as::<_, OpportunityRow>(
            r#"
            SELECT id, author, title, company, description, location, kind, created_at
            FROM opportunities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(self.hydrate_opportunities(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn add_applicant(&self, opportunity_id: Uuid, user_id: Uuid) -> StoreResult<Option<Opportunity>> {
        sqlx::query(
            r#"
            INSERT INTO opportunity_applicants (opportunity_id, user_id, created_at)
            SELECT $1, $2, $3 WHERE EXISTS (SELECT 1 FROM opportunities WHERE id = $1)
            ON CONFLICT (opportunity_id, user_id) DO NOTHING
            "#,
        )
        .bind(opportunity_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.find_opportunity(opportunity_id).await
    }

    async fn create_connection(&self, connection: Connection) -> StoreResult<Connection> {
        sqlx::query(
            r#"
            INSERT INTO connections (id, requester, recipient, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(connection.id)
        .bind(connection.requester)
        .bind(connection.recipient)
        .bind(connection.status.as_str())
        .bind(connection.created_at)
        .bind(connection.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| classify(e, "connection"))?;

        Ok(connection)
    }

    async fn find_connection(&self, id: Uuid) -> StoreResult<Option<Connection>> {
        let row = sqlx::query(
            r#"
            SELECT id, requester, recipient, status, created_at, updated_at
            FROM connections
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(connection_from_row))
    }

    async fn connection_between(&self, a: Uuid, b: Uuid) -> StoreResult<Option<Connection>> {
        let row = sqlx::query(
            r#"
            SELECT id, requester, recipient, status, created_at, updated_at
            FROM connections
            WHERE (requester = $1 AND recipient = $2) OR (requester = $2 AND recipient = $1)
            "#,
        )
        .bind(a)
        .bind(b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(connection_from_row))
    }

    async fn accept_connection(&self, id: Uuid) -> StoreResult<Option<Connection>> {
        let row = sqlx::query(
            r#"
            UPDATE connections SET status = 'accepted', updated_at = $2
            WHERE id = $1
            RETURNING id, requester, recipient, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(connection_from_row))
    }

    async fn delete_connection_between(&self, a: Uuid, b: Uuid) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM connections
            WHERE (requester = $1 AND recipient = $2) OR (requester = $2 AND recipient = $1)
            "#,
        )
        .bind(a)
        .bind(b)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn connections_for(&self, user: Uuid, status: Option<ConnectionStatus>) -> StoreResult<Vec<Connection>> {
        let rows = sqlx::query(
            r#"
            SELECT id, requester, recipient, status, created_at, updated_at
            FROM connections
            WHERE (requester = $1 OR recipient = $1)
              AND ($2::TEXT IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user)
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(connection_from_row).collect())
    }

    async fn create_message(&self, message: Message) -> StoreResult<Message> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, sender, recipient, content, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id)
        .bind(message.sender)
        .bind(message.recipient)
        .bind(&message.content)
        .bind(message.read)
        .bind(message.created_at)
        .execute(&self.pool)
        .await?;

        Ok(message)
    }

    async fn messages_between(&self, a: Uuid, b: Uuid) -> StoreResult<Vec<Message>> {
        let rows = sqlx::query(
            r#"
            SELECT id, sender, recipient, content, is_read, created_at
            FROM messages
            WHERE (sender = $1 AND recipient = $2) OR (sender = $2 AND recipient = $1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(a)
        .bind(b)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(message_from_row).collect())
    }

    async fn messages_for(&self, user: Uuid) -> StoreResult<Vec<Message>> {
        let rows = sqlx::query(
            r#"
            SELECT id, sender, recipient, content, is_read, created_at
            FROM messages
            WHERE sender = $1 OR recipient = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(message_from_row).collect())
    }

    async fn mark_read(&self, sender: Uuid, recipient: Uuid) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE messages SET is_read = TRUE
            WHERE sender = $1 AND recipient = $2 AND NOT is_read
            "#,
        )
        .bind(sender)
        .bind(recipient)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ali"), "%ali%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
