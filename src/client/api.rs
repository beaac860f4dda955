//! `ApiClient`: the transport shared by every resource group.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::client::config::ClientConfig;
use crate::client::credentials::CredentialProvider;
use crate::client::error::ClientError;
use crate::client::resources::{AuthApi, ConnectionsApi, MessagesApi, OpportunitiesApi, PostsApi, UsersApi};
use crate::shared::api::ErrorBody;

/// HTTP client for the Connect X API
///
/// Cheap to clone; clones share the connection pool and the credential
/// provider.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: Client,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, credentials: impl CredentialProvider + 'static) -> Result<Self, ClientError> {
        Self::with_credentials(config, Arc::new(credentials))
    }

    /// Build a client around a shared credential provider
    pub fn with_credentials(
        config: ClientConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Ok(Self {
            config,
            http,
            credentials,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &dyn CredentialProvider {
        self.credentials.as_ref()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn posts(&self) -> PostsApi<'_> {
        PostsApi::new(self)
    }

    pub fn opportunities(&self) -> OpportunitiesApi<'_> {
        OpportunitiesApi::new(self)
    }

    pub fn connections(&self) -> ConnectionsApi<'_> {
        ConnectionsApi::new(self)
    }

    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi::new(self)
    }

    /// Start a request to `path`, with the bearer token attached when the
    /// provider has one
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.api_url(path));
        match self.credentials.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode a JSON response body
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = check(builder.send().await?).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Pass 2xx responses through; turn anything else into `ClientError::Status`
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await?;
    let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or(ErrorBody {
        message: if text.is_empty() {
            status.to_string()
        } else {
            text
        },
        stack: None,
    });

    tracing::debug!("Request failed: {} {}", status, body.message);
    Err(ClientError::Status { status, body })
}
