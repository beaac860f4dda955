//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

use crate::client::credentials::CredentialError;
use crate::shared::api::ErrorBody;
use crate::shared::config::ConfigError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response, or the body could not be read
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("request failed ({status}): {}", body.message)]
    Status { status: StatusCode, body: ErrorBody },

    #[error("credential storage error: {0}")]
    Credentials(#[from] CredentialError),

    #[error("invalid client configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status of a `Status` error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}
