//! athena client
//!
//! One method per remote operation, grouped by area:
//! - `patients`: demographics, matching, search, goals and orders
//! - `care_team`: care team members and recipient classes
//! - `pharmacy`: preferred/default pharmacies and clinical provider search
//! - `insurance`: insurance records, benefit details and eligibility checks
//! - `labs`: lab results, documents and the change feeds
//! - `payments`: payments and stored cards
//!
//! Each method builds an [`HttpRequest`], runs it through the shared
//! [`RequestPipeline`] and reshapes failures with the operation's
//! [`ErrorPolicy`](super::policy::ErrorPolicy).

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use super::config::AthenaConfig;
use super::policy::Operation;
use crate::error::EhrError;
use crate::execution::http::{HttpRequest, RequestPipeline};

mod care_team;
mod insurance;
mod labs;
mod patients;
mod payments;
mod pharmacy;

#[derive(Clone, Debug)]
pub struct AthenaClient {
    pipeline: RequestPipeline,
    config: AthenaConfig,
}

impl AthenaClient {
    pub(crate) fn new(pipeline: RequestPipeline, config: AthenaConfig) -> Self {
        Self { pipeline, config }
    }

    pub fn config(&self) -> &AthenaConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    /// `true` iff athena answers the ping with `{"pong":"true"}`.
    pub async fn is_healthy(&self) -> bool {
        match self
            .pipeline
            .execute_json::<crate::standards::athena::types::AthenaPing>(&HttpRequest::get("ping"))
            .await
        {
            Ok(ping) => ping.pong == "true",
            Err(e) => {
                tracing::warn!(error = %e, "athena health check failed");
                false
            }
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: HttpRequest,
    ) -> Result<T, EhrError> {
        self.pipeline
            .execute_json(&request)
            .await
            .map_err(|e| operation.reshape(e))
    }

    async fn call_unit(&self, operation: Operation, request: HttpRequest) -> Result<(), EhrError> {
        self.pipeline
            .execute_unit(&request)
            .await
            .map_err(|e| operation.reshape(e))
    }
}

/// Escape one path segment.
fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// The only element of a response array.
fn exactly_one<T>(mut items: Vec<T>) -> Result<T, EhrError> {
    let count = items.len();
    match items.pop() {
        Some(item) if count == 1 => Ok(item),
        _ => Err(EhrError::internal(format!(
            "expected 1 result, received {count}"
        ))),
    }
}

/// Maps a converter failure on a successful response.
fn conversion_failed(what: &'static str) -> impl FnOnce(EhrError) -> EhrError {
    move |e| EhrError::internal(format!("failed to build {what} response: {}", e.message()))
}

fn require_id(value: Option<&str>, message: &'static str) -> Result<String, EhrError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(EhrError::invalid_argument(message)),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::error::Code;

    #[tokio::test]
    async fn healthy_only_on_true_pong() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", path("ping").as_str())
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body(r#"{"pong":"true"}"#)
            .create_async()
            .await;
        assert!(client_for(&server).is_healthy().await);
        m.assert_async().await;

        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", path("ping").as_str())
            .with_status(200)
            .with_body(r#"{"pong":"false"}"#)
            .create_async()
            .await;
        assert!(!client_for(&server).is_healthy().await);
    }

    #[tokio::test]
    async fn unhealthy_on_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", path("ping").as_str())
            .with_status(503)
            .create_async()
            .await;
        assert!(!client_for(&server).is_healthy().await);
    }

    #[test]
    fn exactly_one_reports_count() {
        assert_eq!(exactly_one(vec![7]).unwrap(), 7);
        let err = exactly_one(Vec::<i32>::new()).unwrap_err();
        assert_eq!(err.code(), Code::Internal);
        assert_eq!(err.message(), "expected 1 result, received 0");
        let err = exactly_one(vec![1, 2]).unwrap_err();
        assert_eq!(err.message(), "expected 1 result, received 2");
    }

    #[test]
    fn segments_are_escaped() {
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
        assert_eq!(segment("29"), "29");
    }
}
