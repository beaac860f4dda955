//! Token storage for the client.
//!
//! `ApiClient` reads the bearer token from a `CredentialProvider` before each
//! request and writes it after signup or login. Two implementations:
//!
//! - `MemoryCredentials` - lives as long as the client; one per session
//! - `FileCredentials` - JSON key-value file, by default
//!   `<config dir>/connectx/credentials.json`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed credentials file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no configuration directory on this platform")]
    NoConfigDir,
}

/// Source and sink of the session token
pub trait CredentialProvider: Send + Sync {
    /// Current token, if any
    fn token(&self) -> Option<String>;

    fn store(&self, token: &str) -> Result<(), CredentialError>;

    fn clear(&self) -> Result<(), CredentialError>;
}

#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: Mutex<Option<String>>,
}

impl MemoryCredentials {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl CredentialProvider for MemoryCredentials {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn store(&self, token: &str) -> Result<(), CredentialError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Token persisted in a JSON file
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/connectx/credentials.json`
    pub fn default_location() -> Result<Self, CredentialError> {
        let dir = dirs::config_dir().ok_or(CredentialError::NoConfigDir)?;
        Ok(Self::at(dir.join("connectx").join("credentials.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, CredentialError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        Ok(())
    }
}

impl CredentialProvider for FileCredentials {
    fn token(&self) -> Option<String> {
        match self.read() {
            Ok(mut entries) => entries.remove(TOKEN_KEY),
            Err(e) => {
                tracing::warn!("Failed to read credentials from {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn store(&self, token: &str) -> Result<(), CredentialError> {
        let mut entries = self.read()?;
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write(&entries)
    }

    fn clear(&self) -> Result<(), CredentialError> {
        let mut entries = self.read()?;
        if entries.remove(TOKEN_KEY).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_credentials() {
        let credentials = MemoryCredentials::default();
        assert_eq!(credentials.token(), None);
        credentials.store("abc").unwrap();
        assert_eq!(credentials.token().as_deref(), Some("abc"));
        credentials.clear().unwrap();
        assert_eq!(credentials.token(), None);
    }

    #[test]
    fn test_file_credentials_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("credentials.json");

        let credentials = FileCredentials::at(&path);
        assert_eq!(credentials.token(), None);
        credentials.store("abc").unwrap();

        let reopened = FileCredentials::at(&path);
        assert_eq!(reopened.token().as_deref(), Some("abc"));

        reopened.clear().unwrap();
        assert_eq!(credentials.token(), None);
    }

    #[test]
    fn test_file_credentials_keep_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let credentials = FileCredentials::at(&path);
        credentials.store("abc").unwrap();
        credentials.clear().unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("theme"));
        assert!(!raw.contains("abc"));
    }

    #[test]
    fn test_malformed_file_yields_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "not json").unwrap();

        let credentials = FileCredentials::at(&path);
        assert_eq!(credentials.token(), None);
        assert!(matches!(credentials.store("abc"), Err(CredentialError::Json(_))));
    }
}
