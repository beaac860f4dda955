/**
 * User Model
 *
 * The stored form of an account. Unlike `UserProfile` it carries the
 * bcrypt password hash, so it never leaves the backend; handlers respond
 * with `User::profile()`.
 */

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::api::UpdateProfileRequest;
use crate::shared::models::UserProfile;

/// User struct representing a stored account
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Normalized (trimmed, lowercase) email, unique
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub avatar_url: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with an empty profile
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Normalized email
    /// * `password_hash` - Output of [`hash_password`]
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            headline: None,
            bio: None,
            location: None,
            skills: Vec::new(),
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public view of this account
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            headline: self.headline.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            skills: self.skills.clone(),
            avatar_url: self.avatar_url.clone(),
            created_at: self.created_at,
        }
    }

    /// Apply a partial profile update; `None` fields are left as they are
    pub fn apply(&mut self, update: &UpdateProfileRequest) {
        if let Some(name) = &update.name {
            self.name = name.trim().to_string();
        }
        if let Some(headline) = &update.headline {
            self.headline = Some(headline.clone());
        }
        if let Some(bio) = &update.bio {
            self.bio = Some(bio.clone());
        }
        if let Some(location) = &update.location {
            self.location = Some(location.clone());
        }
        if let Some(skills) = &update.skills {
            self.skills = skills.clone();
        }
        if let Some(avatar_url) = &update.avatar_url {
            self.avatar_url = Some(avatar_url.clone());
        }
        self.updated_at = Utc::now();
    }
}

/// Hash a plain-text password with bcrypt
///
/// # Arguments
/// * `password` - Plain-text password
/// * `cost` - bcrypt cost factor (`bcrypt::DEFAULT_COST` in production)
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Check a plain-text password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_hides_password_hash() {
        let user = User::new("alice".into(), "alice@x.com".into(), "secret-hash".into());
        let json = serde_json::to_string(&user.profile()).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("alice@x.com"));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut user = User::new("alice".into(), "alice@x.com".into(), "hash".into());
        user.apply(&UpdateProfileRequest {
            name: Some("  Alice Smith ".into()),
            skills: Some(vec!["rust".into()]),
            ..Default::default()
        });
        assert_eq!(user.name, "Alice Smith");
        assert_eq!(user.skills, vec!["rust".to_string()]);
        assert_eq!(user.headline, None);
    }

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("p1", 4).unwrap();
        assert!(verify_password("p1", &hash).unwrap());
        assert!(!verify_password("p2", &hash).unwrap());
    }
}
