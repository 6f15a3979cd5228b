//! HTTP client builder utilities
//!
//! One place that turns an [`HttpConfig`] into a configured `reqwest::Client`.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::EhrError;
use crate::types::HttpConfig;

/// Build an HTTP client from HttpConfig
///
/// # Returns
/// * `Ok(reqwest::Client)` - Configured HTTP client
/// * `Err(EhrError)` - Invalid header or client construction failure
pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client, EhrError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| EhrError::internal(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if !config.headers.is_empty() {
        let mut headers = HeaderMap::new();
        for (k, v) in &config.headers {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|e| EhrError::internal(format!("Invalid header name '{k}': {e}")))?;
            let value = HeaderValue::from_str(v)
                .map_err(|e| EhrError::internal(format!("Invalid header value for '{k}': {e}")))?;
            headers.insert(name, value);
        }
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| EhrError::internal(format!("Failed to create HTTP client: {e}")))
}
