/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Unknown email and wrong password produce the same 401 so the response
 * does not reveal which accounts exist.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::users::verify_password;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::Payload;
use crate::backend::server::state::AppState;
use crate::shared::api::{normalize_email, AuthResponse, LoginRequest};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If storage, hash verification or token generation fails
pub async fn login(
    State(state): State<AppState>,
    Payload(request): Payload<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let email = normalize_email(&request.email);
    tracing::info!("Login request for: {}", email);

    let user = state.store.find_user_by_email(&email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        ApiError::unauthenticated(INVALID_CREDENTIALS)
    })?;

    let password = request.password;
    let hash = user.password_hash.clone();
    if !tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(ApiError::unauthenticated(INVALID_CREDENTIALS));
    }

    let token = state.tokens.create_token(user.id, &user.email)?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}
