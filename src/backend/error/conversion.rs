/**
 * Error Conversion
 *
 * `From` impls that let handlers use `?` on lower-level errors, and the
 * `IntoResponse` impl that turns an `ApiError` into a JSON response.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::sessions::TokenError;
use crate::backend::error::{types::ApiError, ErrorReport};
use crate::shared::api::ErrorBody;
use crate::shared::SharedError;

pub const GENERIC_SERVER_ERROR: &str = "Internal Server Error";

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError::Internal(format!("Failed to create token: {err}"))
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Internal(format!("Password hashing failed: {err}"))
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("Blocking task failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    /// The body never carries a stack and 5xx messages are generic; the full
    /// detail rides along as an `ErrorReport` extension.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("{} {}: {:?}", status.as_u16(), message, self);
        } else {
            tracing::debug!("{} {}", status.as_u16(), message);
        }

        let body = ErrorBody {
            message: if status == StatusCode::INTERNAL_SERVER_ERROR {
                GENERIC_SERVER_ERROR.to_string()
            } else {
                message.clone()
            },
            stack: None,
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(ErrorReport {
            message,
            stack: self.debug_chain(),
        });
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_response_body_is_production_safe() {
        let response = ApiError::internal("secret detail").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let report = response.extensions().get::<ErrorReport>().cloned().unwrap();
        assert_eq!(report.message, "secret detail");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, GENERIC_SERVER_ERROR);
        assert_eq!(body.stack, None);
    }

    #[tokio::test]
    async fn test_client_error_keeps_message() {
        let response = ApiError::not_found("Post not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "Post not found");
    }

    #[test]
    fn test_from_shared_error() {
        let error: ApiError = SharedError::validation("content", "content is required").into();
        assert!(matches!(error, ApiError::Validation(ref m) if m == "content is required"));
    }

    #[tokio::test]
    async fn test_failed_blocking_task_is_internal() {
        let join_error = tokio::task::spawn_blocking(|| panic!("hasher crashed"))
            .await
            .unwrap_err();
        let error = ApiError::from(join_error);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.to_string().starts_with("Blocking task failed"));
    }
}
