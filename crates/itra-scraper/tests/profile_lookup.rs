//! Integration tests for `ItraClient::extract_performance_index`.
//!
//! Covers both lookup strategies (`GetRunnerSpace` JSON and HTML profile page)
//! against a `wiremock` server, plus URL rejection before any request.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use itra_scraper::{ItraClient, ScraperError, ScraperSettings};

const API_PATH: &str = "/api/RunnerSpace/GetRunnerSpace";
const MEMBER: &str = "p3z7u3wRI8fpW0uxAv2OTA";

fn test_client(server: &MockServer) -> ItraClient {
    ItraClient::new(ScraperSettings {
        site_origin: server.uri(),
        timeout_secs: 2,
        user_agent: "itra-test/0.1".to_owned(),
        ..ScraperSettings::default()
    })
    .expect("failed to build test ItraClient")
}

fn api_url(server: &MockServer) -> String {
    format!("{}{API_PATH}?memberString={MEMBER}", server.uri())
}

async fn mount_api(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("memberString", MEMBER))
        .respond_with(response)
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// API strategy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_payload_returns_index_and_name() {
    let server = MockServer::start().await;
    mount_api(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "runnerSpace": {"performanceIndex": 712, "fullName": "A. Runner"}
        })),
    )
    .await;

    let lookup = test_client(&server)
        .extract_performance_index(&api_url(&server))
        .await;

    assert!(lookup.success, "expected success, got: {lookup:?}");
    assert_eq!(lookup.error, None);
    assert_eq!(lookup.performance_index, "712");
    assert_eq!(lookup.runner_name, "A. Runner");
}

#[tokio::test]
async fn api_payload_without_full_name_uses_sentinel() {
    let server = MockServer::start().await;
    mount_api(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"runnerSpace": {"performanceIndex": "633"}})),
    )
    .await;

    let lookup = test_client(&server)
        .extract_performance_index(&api_url(&server))
        .await;

    assert!(lookup.success);
    assert_eq!(lookup.performance_index, "633");
    assert_eq!(lookup.runner_name, "Unknown Runner");
}

#[tokio::test]
async fn malformed_api_payload_fails_lookup() {
    let server = MockServer::start().await;
    mount_api(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let client = test_client(&server);
    let err = client.lookup_profile(&api_url(&server)).await.unwrap_err();
    assert!(matches!(err, ScraperError::MalformedPayload { .. }), "got: {err:?}");

    let lookup = client.extract_performance_index(&api_url(&server)).await;
    assert!(!lookup.success);
    assert!(lookup.error.is_some());
    assert_eq!(lookup.performance_index, "N/A");
}

#[tokio::test]
async fn api_payload_without_index_is_field_not_found() {
    let server = MockServer::start().await;
    mount_api(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"runnerSpace": {"fullName": "No Index"}})),
    )
    .await;

    let client = test_client(&server);
    let err = client.lookup_profile(&api_url(&server)).await.unwrap_err();
    assert!(matches!(err, ScraperError::FieldNotFound { .. }), "got: {err:?}");

    let lookup = client.extract_performance_index(&api_url(&server)).await;
    assert!(!lookup.success);
}

// ---------------------------------------------------------------------------
// HTML strategy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profile_page_returns_index_and_heading_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/RunnerSpace/Hoover.Beau/5249134"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><h1>Beau Hoover</h1><div class="pi-score">742</div></body></html>"#,
        ))
        .mount(&server)
        .await;

    let url = format!("{}/RunnerSpace/Hoover.Beau/5249134", server.uri());
    let lookup = test_client(&server).extract_performance_index(&url).await;

    assert!(lookup.success);
    assert_eq!(lookup.performance_index, "742");
    assert_eq!(lookup.runner_name, "Beau Hoover");
}

#[tokio::test]
async fn profile_page_without_any_match_is_placeholder_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/RunnerSpace/Doe.Jane/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><p>This runner has no results yet.</p></body></html>",
        ))
        .mount(&server)
        .await;

    let url = format!("{}/RunnerSpace/Doe.Jane/42", server.uri());
    let lookup = test_client(&server).extract_performance_index(&url).await;

    assert!(lookup.success, "a missing index is not a failure");
    assert_eq!(lookup.performance_index, "N/A");
    assert_eq!(lookup.runner_name, "Unknown Runner");
}

#[tokio::test]
async fn profile_page_not_found_fails_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/RunnerSpace/Gone.Runner/7"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/RunnerSpace/Gone.Runner/7", server.uri());
    let client = test_client(&server);
    let err = client.lookup_profile(&url).await.unwrap_err();
    assert!(matches!(err, ScraperError::HttpStatus { status: 404, .. }), "got: {err:?}");

    let lookup = client.extract_performance_index(&url).await;
    assert!(!lookup.success);
}

// ---------------------------------------------------------------------------
// URL rejection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unsupported_url_shape_is_rejected_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    for url in [
        format!("{}/Races/RaceResults/1", server.uri()),
        format!("{}/RunnerSpace/Doe.Jane", server.uri()),
        "ftp://example.com".to_owned(),
        String::new(),
    ] {
        let lookup = client.extract_performance_index(&url).await;
        assert!(!lookup.success, "{url:?} should be rejected");
        assert!(
            lookup.error.as_deref().is_some_and(|e| e.starts_with("Invalid URL")),
            "unexpected error for {url:?}: {lookup:?}"
        );
    }
}
