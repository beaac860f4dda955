/**
 * Authentication Extractor
 *
 * Protected handlers take an `AuthUser` argument. Extraction:
 * 1. reads the `Authorization: Bearer <token>` header,
 * 2. verifies the token signature and expiry,
 * 3. loads the user the token names.
 *
 * Any failure rejects the request with `ApiError::Unauthenticated` (401)
 * before the handler runs.
 */

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::backend::auth::users::User;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// The authenticated caller
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

/// Token from an `Authorization` header value, if it has the Bearer scheme
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| {
                tracing::warn!("Missing or malformed Authorization header");
                ApiError::unauthenticated("Not authorized, no token")
            })?;

        let user_id = state.tokens.user_id(token).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            ApiError::unauthenticated("Not authorized, token failed")
        })?;

        let user = state.store.find_user(user_id).await?.ok_or_else(|| {
            tracing::warn!("Token names unknown user: {}", user_id);
            ApiError::unauthenticated("Not authorized, user not found")
        })?;

        Ok(AuthUser(user))
    }
}
