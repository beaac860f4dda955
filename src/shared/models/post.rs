//! Post Data Structure
//!
//! A post in the feed, with its set of likes and ordered comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment ID
    pub id: Uuid,
    /// Author user ID
    pub author: Uuid,
    /// Author name at the time of commenting
    pub author_name: String,
    /// Comment body
    pub text: String,
    /// When the comment was written
    pub created_at: DateTime<Utc>,
}

/// A feed post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID
    pub id: Uuid,
    /// Author user ID
    pub author: Uuid,
    /// Author name at the time of posting
    pub author_name: String,
    /// Post body
    pub content: String,
    /// Optional attached image
    #[serde(default)]
    pub image_url: Option<String>,
    /// Users who liked the post; each user appears at most once
    #[serde(default)]
    pub likes: Vec<Uuid>,
    /// Comments in the order they were added
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// When the post was created
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with no likes or comments
    pub fn new(author: Uuid, author_name: String, content: String, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            author_name,
            content,
            image_url,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add `user` to the likes set. Returns false if already present.
    pub fn like(&mut self, user: Uuid) -> bool {
        if self.likes.contains(&user) {
            return false;
        }
        self.likes.push(user);
        true
    }

    /// Remove `user` from the likes set. Returns false if absent.
    pub fn unlike(&mut self, user: Uuid) -> bool {
        let before = self.likes.len();
        self.likes.retain(|id| *id != user);
        before != self.likes.len()
    }

    /// Whether `user` wrote this post
    pub fn is_author(&self, user: Uuid) -> bool {
        self.author == user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_is_idempotent() {
        let alice = Uuid::new_v4();
        let mut post = Post::new(alice, "alice".into(), "hello".into(), None);
        assert!(post.like(alice));
        assert!(!post.like(alice));
        assert_eq!(post.likes, vec![alice]);
    }

    #[test]
    fn test_unlike() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let mut post = Post::new(alice, "alice".into(), "hello".into(), None);
        post.like(alice);
        post.like(bob);
        assert!(post.unlike(alice));
        assert!(!post.unlike(alice));
        assert_eq!(post.likes, vec![bob]);
    }
}
