//! HTTP transport abstraction.
//!
//! The pipeline never talks to `reqwest` directly; it hands a fully encoded
//! request to an [`HttpTransport`]. Tests substitute recording or synthetic
//! transports to observe the final URL/headers/body without any network I/O.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::error::EhrError;

/// Transport-level request data, already encoded.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    /// Overrides the client-wide timeout for this request only.
    pub timeout: Option<Duration>,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Executes one encoded HTTP request.
///
/// Implementations must map connection-level failures (DNS, refused
/// connection, timeouts) to `EhrError::Unavailable` and must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpTransportRequest)
    -> Result<HttpTransportResponse, EhrError>;
}

/// Default transport backed by a shared, pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, EhrError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await.map_err(EhrError::from)?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(EhrError::from)?;

        Ok(HttpTransportResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
