/**
 * Signup Handler
 *
 * POST /api/auth/signup
 *
 * # Registration Process
 *
 * 1. Validate email format and password presence
 * 2. Reject an email that is already registered
 * 3. Hash password using bcrypt
 * 4. Create user
 * 5. Return a token and the new profile
 *
 * Emails are normalized (trimmed, lowercased) before lookup and storage.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::users::{hash_password, User};
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::Payload;
use crate::backend::server::state::AppState;
use crate::backend::storage::StorageError;
use crate::shared::api::{AuthResponse, SignupRequest};

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid email, empty password or name, email taken
/// * `500 Internal Server Error` - Storage, hashing or token failure
pub async fn signup(
    State(state): State<AppState>,
    Payload(request): Payload<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    request.validate().map_err(|e| {
        tracing::warn!("Signup validation failed: {}", e);
        ApiError::from(e)
    })?;

    let email = request.normalized_email();
    tracing::info!("Signup request for: {}", email);

    if state.store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!("User already exists: {}", email);
        return Err(ApiError::validation("User already exists"));
    }

    let cost = state.config.bcrypt_cost;
    let password = request.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost)).await??;

    let user = state
        .store
        .create_user(User::new(request.display_name(), email, password_hash))
        .await
        .map_err(|e| match e {
            StorageError::Duplicate(_) => ApiError::validation("User already exists"),
            other => ApiError::from(other),
        })?;

    let token = state.tokens.create_token(user.id, &user.email)?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.profile(),
        }),
    ))
}
