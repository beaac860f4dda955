/**
 * Get Current User Handler
 *
 * GET /api/auth/me
 *
 * The `AuthUser` extractor has already verified the token and loaded the
 * user, so this handler only shapes the response.
 */

use axum::response::Json;

use crate::backend::middleware::AuthUser;
use crate::shared::models::UserProfile;

pub async fn get_me(AuthUser(user): AuthUser) -> Json<UserProfile> {
    Json(user.profile())
}
