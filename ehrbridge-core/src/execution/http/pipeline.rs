//! Request pipeline
//!
//! Executes one [`HttpRequest`] against the remote system: URL construction,
//! body encoding, Bearer auth, transport I/O, rate-limit telemetry and status
//! classification. Single attempt, no retries.

use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;

use super::headers::{HttpHeaderBuilder, mask_bearer};
use super::request::{ContentType, HttpRequest, RequestBody, WireResponse};
use super::status::classify_http_error;
use super::transport::{HttpTransport, HttpTransportRequest};
use crate::auth::TokenProvider;
use crate::error::EhrError;
use crate::observability::{NoopTelemetrySink, TelemetrySink};

/// Response header forwarded to telemetry as a gauge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitGauge {
    /// Response header name (case-insensitive).
    pub header: String,
    /// Gauge name reported to the sink.
    pub metric: String,
}

/// Executes HTTP requests relative to a fixed base URL.
#[derive(Clone)]
pub struct RequestPipeline {
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
    transport: Arc<dyn HttpTransport>,
    telemetry: Arc<dyn TelemetrySink>,
    rate_limit: Option<RateLimitGauge>,
}

impl std::fmt::Debug for RequestPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPipeline")
            .field("base_url", &self.base_url)
            .field("rate_limit", &self.rate_limit)
            .finish_non_exhaustive()
    }
}

impl RequestPipeline {
    pub fn new(
        base_url: impl Into<String>,
        token_provider: Arc<dyn TokenProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token_provider,
            transport,
            telemetry: Arc::new(NoopTelemetrySink),
            rate_limit: None,
        }
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn with_rate_limit(mut self, gauge: RateLimitGauge) -> Self {
        self.rate_limit = Some(gauge);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute and return the raw response. Status >= 400 is an error.
    pub async fn execute(&self, request: &HttpRequest) -> Result<WireResponse, EhrError> {
        let url = self.build_url(request)?;
        let body = encode_body(request)?;

        let token = self.token_provider.token().await?;
        let mut headers = HttpHeaderBuilder::from_headers(request.headers.clone())
            .with_bearer_auth(&token)?
            .with_json_accept();
        if let Some(content_type) = &request.content_type {
            headers = headers.with_content_type(content_type.mime())?;
        }

        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(
            request_id = %request_id,
            method = %request.method,
            url = %url,
            authorization = %mask_bearer(&format!("Bearer {token}")),
            timeout = ?request.timeout,
            "dispatching remote EHR request"
        );

        let response = self
            .transport
            .execute(HttpTransportRequest {
                method: request.method.clone(),
                url: url.to_string(),
                headers: headers.build(),
                body,
                timeout: request.timeout,
            })
            .await?;

        tracing::debug!(request_id = %request_id, status = response.status, "remote EHR responded");

        let response = WireResponse {
            status: response.status,
            headers: response.headers,
            body: response.body,
        };
        self.record_rate_limit(&request.path, &response);

        if response.status >= 400 {
            return Err(classify_http_error(response.status, &response.text()));
        }
        Ok(response)
    }

    /// Execute and decode a JSON response body.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
    ) -> Result<T, EhrError> {
        let response = self.execute(request).await?;
        serde_json::from_slice(&response.body)
            .map_err(|e| EhrError::internal(format!("failed to decode response body: {e}")))
    }

    /// Execute and ignore the response body.
    pub async fn execute_unit(&self, request: &HttpRequest) -> Result<(), EhrError> {
        self.execute(request).await.map(|_| ())
    }

    fn build_url(&self, request: &HttpRequest) -> Result<Url, EhrError> {
        if request.path.contains('?') {
            return Err(EhrError::internal(format!(
                "request path {:?} must not contain a query string",
                request.path
            )));
        }
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            request.path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined)
            .map_err(|e| EhrError::internal(format!("invalid request URL {joined:?}: {e}")))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    fn record_rate_limit(&self, path: &str, response: &WireResponse) {
        let Some(gauge) = &self.rate_limit else {
            return;
        };
        let Some(raw) = response.header(&gauge.header) else {
            return;
        };
        match raw.trim().parse::<f64>() {
            Ok(value) => {
                self.telemetry
                    .record_gauge(&gauge.metric, value, &[("path", path.to_string())]);
            }
            Err(e) => {
                tracing::warn!(
                    header = %gauge.header,
                    value = %raw,
                    error = %e,
                    "ignoring unparseable rate-limit header"
                );
            }
        }
    }
}

fn encode_body(request: &HttpRequest) -> Result<Option<Vec<u8>>, EhrError> {
    match (&request.body, &request.content_type) {
        (_, Some(ContentType::Other(mime))) => Err(EhrError::invalid_argument(format!(
            "unsupported content type {mime:?}"
        ))),
        (Some(_), None) => Err(EhrError::invalid_argument(
            "request body provided without a content type",
        )),
        (None, _) => Ok(None),
        (Some(RequestBody::Json(value)), Some(ContentType::Json)) => serde_json::to_vec(value)
            .map(Some)
            .map_err(|e| EhrError::internal(format!("failed to encode JSON body: {e}"))),
        (Some(RequestBody::Form(values)), Some(ContentType::Json)) => {
            serde_json::to_vec(&values.to_json_object())
                .map(Some)
                .map_err(|e| EhrError::internal(format!("failed to encode JSON body: {e}")))
        }
        (Some(RequestBody::Form(values)), Some(ContentType::FormUrlEncoded)) => {
            Ok(Some(values.to_form_string().into_bytes()))
        }
        (Some(RequestBody::Json(_)), Some(ContentType::FormUrlEncoded)) => Err(
            EhrError::invalid_argument("a JSON body cannot be sent form-url-encoded"),
        ),
    }
}
