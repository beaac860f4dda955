//! Client configuration

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the base URL
pub const API_URL_ENV: &str = "CONNECTX_API_URL";

/// Where the client sends requests
#[derive(Debug, Clone)]
pub struct ClientConfig {
    app: AppConfig,
}

impl Default for ClientConfig {
    /// `CONNECTX_API_URL` if set and valid, else [`DEFAULT_API_URL`]
    fn default() -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            match Self::new(url) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Ignoring {}: {}", API_URL_ENV, e),
            }
        }
        Self {
            app: AppConfig {
                server_url: Some(DEFAULT_API_URL.to_string()),
            },
        }
    }
}

impl ClientConfig {
    /// Configuration for an explicit base URL, e.g. `http://127.0.0.1:5000/api`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(base_url))
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        if app.server_url.is_none() {
            return Err(ConfigError::MissingValue("server_url"));
        }
        Ok(Self { app })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Get the full URL for an API path such as `/posts`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}
