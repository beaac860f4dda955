//! User Profile Data Structure
//!
//! The public view of a user account. The password hash never leaves the
//! server, so it has no place in this type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public profile of a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, the login identity
    pub email: String,
    /// One-line professional headline
    #[serde(default)]
    pub headline: Option<String>,
    /// Free-form biography
    #[serde(default)]
    pub bio: Option<String>,
    /// City / region
    #[serde(default)]
    pub location: Option<String>,
    /// Listed skills
    #[serde(default)]
    pub skills: Vec<String>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Case-insensitive substring match on name, email and headline.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self
                .headline
                .as_deref()
                .is_some_and(|h| h.to_lowercase().contains(needle))
    }
}
