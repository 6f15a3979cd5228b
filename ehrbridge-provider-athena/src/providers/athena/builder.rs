//! athena Builder Implementation
//!
//! Wires an [`AthenaConfig`] together with a token source, a transport and a
//! telemetry sink into an [`AthenaClient`].

use std::sync::Arc;

use ehrbridge_core::auth::TokenProvider;
use ehrbridge_core::observability::{MetricsGaugeSink, TelemetrySink};

use super::client::AthenaClient;
use super::config::AthenaConfig;
use crate::error::EhrError;
use crate::execution::http::{
    HttpTransport, RateLimitGauge, ReqwestTransport, RequestPipeline, build_http_client,
};

/// athena Client Builder
///
/// A token provider is mandatory. Transport defaults to a pooled
/// `reqwest::Client` built from [`AthenaConfig::http`]; telemetry defaults to
/// the process-wide `metrics` recorder.
#[derive(Clone)]
pub struct AthenaClientBuilder {
    config: AthenaConfig,
    token_provider: Option<Arc<dyn TokenProvider>>,
    transport: Option<Arc<dyn HttpTransport>>,
    http_client: Option<reqwest::Client>,
    telemetry: Option<Arc<dyn TelemetrySink>>,
}

impl std::fmt::Debug for AthenaClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AthenaClientBuilder")
            .field("config", &self.config)
            .field("has_token_provider", &self.token_provider.is_some())
            .field("has_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

impl AthenaClientBuilder {
    pub fn new(config: AthenaConfig) -> Self {
        Self {
            config,
            token_provider: None,
            transport: None,
            http_client: None,
            telemetry: None,
        }
    }

    /// Source of the Bearer token attached to every request.
    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Replace the HTTP transport entirely. Takes precedence over
    /// [`with_http_client`](Self::with_http_client).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a preconfigured `reqwest::Client`; `AthenaConfig::http` is then ignored.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = Some(sink);
        self
    }

    pub fn build(self) -> Result<AthenaClient, EhrError> {
        let token_provider = self
            .token_provider
            .ok_or_else(|| EhrError::invalid_argument("athena client requires a token provider"))?;

        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => Arc::new(ReqwestTransport::new(build_http_client(
                &self.config.http,
            )?)),
        };
        let telemetry = self
            .telemetry
            .unwrap_or_else(|| Arc::new(MetricsGaugeSink));

        let pipeline = RequestPipeline::new(self.config.practice_url(), token_provider, transport)
            .with_telemetry(telemetry)
            .with_rate_limit(RateLimitGauge {
                header: self.config.rate_limit_header.clone(),
                metric: self.config.rate_limit_metric.clone(),
            });

        tracing::debug!(
            base_url = %pipeline.base_url(),
            eligibility_check = self.config.enable_insurance_eligibility_check,
            "athena client ready"
        );
        Ok(AthenaClient::new(pipeline, self.config))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use ehrbridge_core::auth::StaticTokenProvider;
    use ehrbridge_core::execution::http::{HttpTransportRequest, HttpTransportResponse};
    use ehrbridge_core::observability::MemoryTelemetrySink;
    use reqwest::header::{HeaderMap, HeaderValue};

    use super::*;
    use crate::error::Code;

    /// Records requests and answers every one with a fixed body.
    #[derive(Default)]
    struct CannedTransport {
        seen: Mutex<Vec<HttpTransportRequest>>,
        headers: HeaderMap,
    }

    #[async_trait]
    impl HttpTransport for CannedTransport {
        async fn execute(
            &self,
            request: HttpTransportRequest,
        ) -> Result<HttpTransportResponse, EhrError> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpTransportResponse {
                status: 200,
                headers: self.headers.clone(),
                body: br#"{"pong": "true"}"#.to_vec(),
            })
        }
    }

    fn config() -> AthenaConfig {
        AthenaConfig::new("https://api.preview.platform.athenahealth.com/v1/", "195900")
    }

    #[test]
    fn token_provider_is_required() {
        let err = AthenaClientBuilder::new(config()).build().unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[test]
    fn pipeline_is_rooted_at_practice() {
        let client = AthenaClientBuilder::new(config())
            .token_provider(Arc::new(StaticTokenProvider::new("t")))
            .build()
            .unwrap();
        assert_eq!(
            client.pipeline().base_url(),
            "https://api.preview.platform.athenahealth.com/v1/195900"
        );
    }

    #[tokio::test]
    async fn custom_transport_and_telemetry() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("41"));
        let transport = Arc::new(CannedTransport {
            headers,
            ..Default::default()
        });
        let sink = Arc::new(MemoryTelemetrySink::new());

        let client = AthenaClientBuilder::new(config())
            .token_provider(Arc::new(StaticTokenProvider::new("t")))
            .transport(transport.clone())
            .telemetry(sink.clone())
            .build()
            .unwrap();

        assert!(client.is_healthy().await);
        let seen = transport.seen.lock().unwrap();
        assert_eq!(
            seen[0].url,
            "https://api.preview.platform.athenahealth.com/v1/195900/ping"
        );
        let samples = sink.samples();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].name, "athena.ratelimit.remaining");
        assert_eq!(samples[0].value, 41.0);
    }
}
