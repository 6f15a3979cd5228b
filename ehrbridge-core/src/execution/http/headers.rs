//! HTTP Headers Utility
//!
//! Header construction shared by the pipeline and providers.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::EhrError;

/// HTTP header builder for remote EHR requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Start from an existing set of per-request headers.
    pub fn from_headers(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, EhrError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            EhrError::Unauthenticated(format!("access token is not a valid header value: {e}"))
        })?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    pub fn with_content_type(mut self, mime: &str) -> Result<Self, EhrError> {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(mime)
                .map_err(|e| EhrError::invalid_argument(format!("Invalid content type: {e}")))?,
        );
        Ok(self)
    }

    /// Ask for JSON unless the caller already chose an `Accept` value.
    pub fn with_json_accept(mut self) -> Self {
        self.headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static("application/json"));
        self
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an `Authorization` value for logs without exposing the token.
///
/// Keeps the first and last four characters of tokens longer than eight.
pub fn mask_bearer(value: &str) -> String {
    let Some(token) = value.strip_prefix("Bearer ") else {
        return "****".to_string();
    };
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "Bearer ****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("Bearer {head}...{tail}")
}
