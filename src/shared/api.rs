//! Request and response bodies of the REST API.
//!
//! Request types carry a `validate` method that both the client and the
//! server call; the server never trusts that the client did.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_text, SharedError};
use crate::shared::models::{OpportunityKind, UserProfile};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_POST_LEN: usize = 3000;
pub const MAX_COMMENT_LEN: usize = 1000;
pub const MAX_MESSAGE_LEN: usize = 2000;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Sign up request
///
/// `name` is optional; when omitted the local part of the email is used.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// Login identity
    #[serde(alias = "identity")]
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Password is required"));
        }
        if let Some(name) = &self.name {
            require_text("name", name, MAX_NAME_LEN)?;
        }
        Ok(())
    }

    /// Lowercased, trimmed email
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }

    /// The name to store: the explicit one, or the email's local part
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .trim()
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    #[serde(alias = "identity")]
    pub email: String,
    pub password: String,
}

/// Returned by signup and login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Bearer token
    pub token: String,
    pub user: UserProfile,
}

/// Partial profile update; absent fields are left untouched
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(name) = &self.name {
            require_text("name", name, MAX_NAME_LEN)?;
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text("content", &self.content, MAX_POST_LEN)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CommentRequest {
    pub text: String,
}

impl CommentRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text("text", &self.text, MAX_COMMENT_LEN)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateOpportunityRequest {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub kind: Option<OpportunityKind>,
}

impl CreateOpportunityRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text("title", &self.title, MAX_TITLE_LEN)?;
        require_text("company", &self.company, MAX_TITLE_LEN)?;
        require_text("description", &self.description, MAX_DESCRIPTION_LEN)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequestBody {
    pub recipient_id: Uuid,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SendMessageRequest {
    pub recipient: Uuid,
    pub content: String,
}

impl SendMessageRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_text("content", &self.content, MAX_MESSAGE_LEN)
    }
}

/// Query string of `GET /api/users/search`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// Plain acknowledgement body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every error response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub stack: Option<String>,
}

/// Body of `GET /`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Endpoints {
    pub auth: String,
    pub posts: String,
    pub users: String,
    pub opportunities: String,
    pub messages: String,
    pub connections: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), SharedError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(SharedError::validation("email", "Invalid email format")),
    }
}
