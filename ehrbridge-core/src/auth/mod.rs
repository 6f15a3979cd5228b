//! Authentication capability.
//!
//! The pipeline only needs the current Bearer token for each call. Refreshing
//! that token belongs to whoever implements [`TokenProvider`].

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;

use crate::error::EhrError;

/// An async Bearer token provider.
///
/// Notes:
/// - Called once per outbound request; implementations should return a
///   cached snapshot rather than hit the network every time.
/// - Returning an error aborts the call before any I/O.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns an access token suitable for the `Authorization: Bearer <token>` header.
    async fn token(&self) -> Result<String, EhrError>;
}

/// Fixed token, useful for tests and for tokens managed entirely outside the process.
pub struct StaticTokenProvider {
    token: SecretString,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, EhrError> {
        Ok(self.token.expose_secret().to_string())
    }
}

/// Token slot an external refresher can overwrite while requests read it.
///
/// Reads before the first [`SharedTokenProvider::set`] fail with `Unauthenticated`.
#[derive(Clone, Default)]
pub struct SharedTokenProvider {
    token: Arc<RwLock<Option<SecretString>>>,
}

impl SharedTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, token: impl Into<String>) {
        *self.token.write().await = Some(SecretString::from(token.into()));
    }
}

#[async_trait]
impl TokenProvider for SharedTokenProvider {
    async fn token(&self) -> Result<String, EhrError> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.expose_secret().to_string())
            .ok_or_else(|| EhrError::Unauthenticated("no access token available yet".into()))
    }
}
