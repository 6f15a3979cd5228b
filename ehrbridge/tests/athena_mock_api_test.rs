//! End-to-end operation tests against a wiremock athena.
//!
//! Each test spins up its own `MockServer` and builds a client rooted at
//! `{server}/195900`.

use std::sync::Arc;
use std::time::Duration;

use ehrbridge::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRACTICE: &str = "195900";

fn practice_path(suffix: &str) -> String {
    format!("/{PRACTICE}/{suffix}")
}

fn client(server: &MockServer) -> AthenaClient {
    client_with(AthenaConfig::new(server.uri(), PRACTICE), None)
}

fn client_with(config: AthenaConfig, telemetry: Option<Arc<dyn TelemetrySink>>) -> AthenaClient {
    let mut builder = AthenaClientBuilder::new(config)
        .token_provider(Arc::new(StaticTokenProvider::new("test-token")));
    if let Some(sink) = telemetry {
        builder = builder.telemetry(sink);
    }
    builder.build().unwrap()
}

fn john() -> serde_json::Value {
    json!([{
        "patientid": "29",
        "firstname": "John",
        "lastname": "Heidenreich",
        "dob": "01/01/1950",
        "sex": "M",
        "homephone": "5556666888",
        "departmentid": "2"
    }])
}

#[tokio::test]
async fn get_patient_sends_bearer_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(practice_path("patients/29")))
        .and(query_param("show2015edcehrtvalues", "true"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(john()))
        .expect(1)
        .mount(&server)
        .await;

    let patient = client(&server).get_patient("29").await.unwrap();
    assert_eq!(patient.patient_id.as_deref(), Some("29"));
    assert_eq!(patient.date_of_birth, Some(Date::new(1950, 1, 1)));
    assert_eq!(
        patient.name.and_then(|n| n.given_name).as_deref(),
        Some("John")
    );
}

#[tokio::test]
async fn get_patient_with_no_records_is_internal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(practice_path("patients/29")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = client(&server).get_patient("29").await.unwrap_err();
    assert_eq!(err.code(), Code::Internal);
    assert_eq!(err.message(), "expected 1 result, received 0");
}

#[tokio::test]
async fn undecodable_body_is_internal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(practice_path("chart/29/pharmacies/preferred")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_preferred_pharmacies("29", "2")
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::Internal);
    assert!(err.message().contains("failed to decode response body"));
}

#[tokio::test]
async fn default_pharmacy_not_found_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(practice_path("chart/29/pharmacies/default")))
        .and(query_param("departmentid", "2"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error":"no default pharmacy"}"#),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .get_default_pharmacy("29", "2")
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
    assert!(err.message().contains(r#"{"error":"no default pharmacy"}"#));
}

#[tokio::test]
async fn empty_care_team_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(practice_path("chart/29/careteam")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"members": []})))
        .mount(&server)
        .await;

    let err = client(&server).get_care_team("29", "2").await.unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
}

#[tokio::test]
async fn disabled_eligibility_check_never_calls_athena() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .trigger_patient_insurance_eligibility_check("29", "7", "30", None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::Unimplemented);
}

#[tokio::test]
async fn enabled_eligibility_check_posts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(practice_path("patients/29/insurances/7/benefitdetails")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": "true"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = AthenaConfig::builder()
        .base_url(server.uri())
        .practice_id(PRACTICE)
        .enable_insurance_eligibility_check(true)
        .build()
        .unwrap();
    client_with(config, None)
        .trigger_patient_insurance_eligibility_check("29", "7", "30", Some(&Date::new(2023, 3, 1)))
        .await
        .unwrap();
}

#[tokio::test]
async fn eligibility_check_outlives_the_client_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(practice_path("patients/29/insurances/7/benefitdetails")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(1500))
                .set_body_json(json!({"success": "true"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(practice_path("patients/29/insurances/7/benefitdetails")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(1500))
                .set_body_json(json!({"ansi271": {}})),
        )
        .mount(&server)
        .await;

    let config = AthenaConfig::builder()
        .base_url(server.uri())
        .practice_id(PRACTICE)
        .http_config(
            HttpConfig::builder()
                .timeout(Some(Duration::from_millis(500)))
                .build(),
        )
        .enable_insurance_eligibility_check(true)
        .insurance_eligibility_check_timeout(Duration::from_secs(10))
        .build()
        .unwrap();
    let client = client_with(config, None);

    client
        .trigger_patient_insurance_eligibility_check("29", "7", "30", None)
        .await
        .unwrap();

    // Other operations keep the client-wide timeout.
    let err = client
        .get_patient_insurance_benefit_details("29", "7", "30", None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::Internal);
    assert!(err.message().contains("timed out"));
}

#[tokio::test]
async fn rate_limit_header_becomes_gauge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(practice_path("patients/29/insurances")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-remaining", "118")
                .set_body_json(json!({"insurances": []})),
        )
        .mount(&server)
        .await;

    let sink = Arc::new(MemoryTelemetrySink::new());
    let client = client_with(AthenaConfig::new(server.uri(), PRACTICE), Some(sink.clone()));
    let insurances = client.get_patient_insurances("29").await.unwrap();
    assert!(insurances.is_empty());

    let samples = sink.samples();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].name, "athena.ratelimit.remaining");
    assert_eq!(samples[0].value, 118.0);
    assert_eq!(samples[0].tags, vec![("path", "patients/29/insurances".to_string())]);
}

#[tokio::test]
async fn policy_shapes_the_same_status_differently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(practice_path("patients/29/insurances")))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(practice_path("chart/29/careteam")))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client(&server);
    // Passthrough keeps the raw kind, CoerceInternal does not.
    let raw = client.get_patient_insurances("29").await.unwrap_err();
    assert_eq!(raw.code(), Code::Unknown);
    let coerced = client.get_care_team("29", "2").await.unwrap_err();
    assert_eq!(coerced.code(), Code::Internal);
    assert!(coerced.message().starts_with("failed to get care team: "));
}

#[tokio::test]
async fn missing_token_surfaces_through_policy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tokens = SharedTokenProvider::new();
    let client = AthenaClientBuilder::new(AthenaConfig::new(server.uri(), PRACTICE))
        .token_provider(Arc::new(tokens.clone()))
        .build()
        .unwrap();

    let err = client.get_patient_insurances("29").await.unwrap_err();
    assert_eq!(err.code(), Code::Unauthenticated);

    tokens.set("late-token").await;
    server.reset().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer late-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"insurances": []})))
        .expect(1)
        .mount(&server)
        .await;
    client.get_patient_insurances("29").await.unwrap();
}

#[tokio::test]
async fn unreachable_host_is_unavailable_before_policy() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = AthenaClientBuilder::new(AthenaConfig::new(
        format!("http://127.0.0.1:{port}"),
        PRACTICE,
    ))
    .token_provider(Arc::new(StaticTokenProvider::new("t")))
    .build()
    .unwrap();

    let err = client.get_patient_insurances("29").await.unwrap_err();
    assert_eq!(err.code(), Code::Unavailable);
    let err = client.get_patient("29").await.unwrap_err();
    assert_eq!(err.code(), Code::Internal);
    assert!(!client.is_healthy().await);
}

#[tokio::test]
async fn one_client_serves_concurrent_callers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(practice_path("patients/29")))
        .respond_with(ResponseTemplate::new(200).set_body_json(john()))
        .expect(8)
        .mount(&server)
        .await;

    let api: Arc<dyn AthenaApi> = Arc::new(client(&server));
    let calls = (0..8).map(|_| {
        let api = api.clone();
        async move { api.get_patient("29").await }
    });
    let results = futures::future::join_all(calls).await;
    assert!(results.iter().all(|r| r.is_ok()));
}

#[tokio::test]
async fn ping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(practice_path("ping")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pong": "true"})))
        .mount(&server)
        .await;

    assert!(client(&server).is_healthy().await);
}
