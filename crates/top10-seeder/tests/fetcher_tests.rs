//! Retry policy tests for the resilient fetcher against a stub HTTP server

use std::time::{Duration, Instant};
use top10_seeder::{FetchError, Fetcher, SeederConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(backoff_step_ms: u64) -> Fetcher {
    let config = SeederConfig::builder()
        .contact_email("ops@example.com")
        .timeout_secs(5)
        .max_attempts(4)
        .backoff_step_ms(backoff_step_ms)
        .build();
    Fetcher::new(&config).unwrap()
}

async fn always(server: &MockServer, status: u16, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/resource"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_503_is_retried_until_attempts_exhausted() {
    let server = MockServer::start().await;
    always(&server, 503, 4).await;

    let err = fetcher(1)
        .fetch(&format!("{}/resource", server.uri()), &[])
        .await
        .unwrap_err();

    match err {
        FetchError::RetriesExhausted { attempts, status, .. } => {
            assert_eq!(attempts, 4);
            assert_eq!(status.as_u16(), 503);
        },
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_429_is_retried() {
    let server = MockServer::start().await;
    always(&server, 429, 4).await;

    let err = fetcher(1)
        .fetch(&format!("{}/resource", server.uri()), &[])
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(429));
}

#[tokio::test]
async fn test_404_fails_without_retry() {
    let server = MockServer::start().await;
    always(&server, 404, 1).await;

    let err = fetcher(1)
        .fetch(&format!("{}/resource", server.uri()), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 404));
}

#[tokio::test]
async fn test_400_fails_without_retry() {
    let server = MockServer::start().await;
    always(&server, 400, 1).await;

    let result = fetcher(1)
        .fetch(&format!("{}/resource", server.uri()), &[])
        .await;
    assert!(matches!(result, Err(FetchError::Status { .. })));
}

#[tokio::test]
async fn test_recovers_after_transient_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resource"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/resource"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let response = fetcher(1)
        .fetch(&format!("{}/resource", server.uri()), &[])
        .await
        .unwrap();
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_backoff_is_linear_between_attempts() {
    let server = MockServer::start().await;
    always(&server, 502, 4).await;

    let started = Instant::now();
    let _ = fetcher(40)
        .fetch(&format!("{}/resource", server.uri()), &[])
        .await;

    // 40 + 80 + 120 ms; no sleep after the last attempt
    assert!(started.elapsed() >= Duration::from_millis(240));
}

#[tokio::test]
async fn test_sends_identification_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(header("user-agent", "usa-top10-seeder/1.0 (ops@example.com) reqwest"))
        .and(query_param("srsearch", "Miami, Florida"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let body: serde_json::Value = fetcher(1)
        .fetch_json(
            &format!("{}/w/api.php", server.uri()),
            &[("srsearch", "Miami, Florida"), ("format", "json")],
        )
        .await
        .unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resource"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let result: Result<serde_json::Value, _> = fetcher(1)
        .fetch_json(&format!("{}/resource", server.uri()), &[])
        .await;
    assert!(matches!(result, Err(FetchError::Decode { .. })));
}
