/**
 * Session Tokens
 *
 * HS256 JWTs that identify a user. The signing secret and lifetime come from
 * `ServerConfig` and live in a `TokenService` held by `AppState`.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token rejected: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("invalid user ID in token: {0}")]
    Subject(#[from] uuid::Error),

    #[error("system clock is before the Unix epoch")]
    Clock,

    #[error("token lifetime of {0:?} overflows the expiry timestamp")]
    Lifetime(Duration),
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<str>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: Arc::from(secret.into()),
            ttl,
        }
    }

    /// Create a token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID (UUID)
    /// * `email` - User email
    pub fn create_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TokenError::Clock)?
            .as_secs();
        let exp = now
            .checked_add(self.ttl.as_secs())
            .ok_or(TokenError::Lifetime(self.ttl))?;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp,
            iat: now,
        };

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        Ok(encode(&Header::default(), &claims, &key)?)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let token_data = decode::<Claims>(token, &key, &Validation::default())?;
        Ok(token_data.claims)
    }

    /// Verify a token and return the user ID it names
    pub fn user_id(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.verify_token(token)?;
        Ok(Uuid::parse_str(&claims.sub)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::from_secs(30 * 24 * 60 * 60))
    }

    #[test]
    fn test_verify_token() {
        let user_id = Uuid::new_v4();
        let token = service().create_token(user_id, "test@example.com").unwrap();

        let claims = service().verify_token(&token).unwrap();
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_user_id_from_token() {
        let user_id = Uuid::new_v4();
        let token = service().create_token(user_id, "test@example.com").unwrap();
        assert_eq!(service().user_id(&token).unwrap(), user_id);
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(service().verify_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().create_token(Uuid::new_v4(), "test@example.com").unwrap();
        let other = TokenService::new("other-secret", Duration::from_secs(60));
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let key = EncodingKey::from_secret(b"test-secret");
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".into(),
            exp: 1_000,
            iat: 0,
        };
        let token = encode(&Header::default(), &claims, &key).unwrap();
        assert!(matches!(service().verify_token(&token), Err(TokenError::Jwt(_))));
    }

    #[test]
    fn test_overflowing_lifetime_is_an_error() {
        let ttl = Duration::from_secs(u64::MAX - 10);
        let result = TokenService::new("test-secret", ttl).create_token(Uuid::new_v4(), "test@example.com");
        assert!(matches!(result, Err(TokenError::Lifetime(d)) if d == ttl));
    }
}
