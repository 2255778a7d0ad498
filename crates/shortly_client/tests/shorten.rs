use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use shortly_client::{FailureKind, HttpShortener, ShortenSettings, Shortener};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_settings(server: &MockServer) -> ShortenSettings {
    ShortenSettings {
        endpoint: server.uri(),
        completed_utc: Arc::new(|| "2026-02-01T12:00:00+00:00".to_string()),
        ..ShortenSettings::default()
    }
}

#[tokio::test]
async fn posts_json_and_returns_short_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({"url": "https://example.com/a/very/long/path"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "short_url": "http://s.ly/abc"
        })))
        .mount(&server)
        .await;

    let shortener = HttpShortener::new(test_settings(&server));
    let shortening = shortener
        .shorten("https://example.com/a/very/long/path")
        .await
        .expect("shorten ok");

    assert_eq!(shortening.short_url, "http://s.ly/abc");
    assert_eq!(shortening.shortened_at, "2026-02-01T12:00:00+00:00");
}

#[tokio::test]
async fn ignores_extra_response_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "short_url": "http://s.ly/abc",
            "id": 1234,
        })))
        .mount(&server)
        .await;

    let shortener = HttpShortener::new(test_settings(&server));
    let shortening = shortener
        .shorten("https://example.com")
        .await
        .expect("shorten ok");

    assert_eq!(shortening.short_url, "http://s.ly/abc");
}

#[tokio::test]
async fn fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let shortener = HttpShortener::new(test_settings(&server));
    let err = shortener.shorten("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"short_url": "http://s.ly/slow"})),
        )
        .mount(&server)
        .await;

    let settings = ShortenSettings {
        request_timeout: Duration::from_millis(50),
        ..test_settings(&server)
    };
    let shortener = HttpShortener::new(settings);
    let err = shortener.shorten("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fails_on_malformed_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let shortener = HttpShortener::new(test_settings(&server));
    let err = shortener.shorten("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn fails_when_short_url_field_is_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "http://s.ly/abc"
        })))
        .mount(&server)
        .await;

    let shortener = HttpShortener::new(test_settings(&server));
    let err = shortener.shorten("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn fails_when_server_is_unreachable() {
    // Bind a port, then release it so the connection is refused.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let settings = ShortenSettings {
        endpoint: format!("http://127.0.0.1:{}", port),
        ..ShortenSettings::default()
    };

    let shortener = HttpShortener::new(settings);
    let err = shortener.shorten("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn rejects_invalid_endpoint() {
    let settings = ShortenSettings {
        endpoint: "not a url".to_string(),
        ..ShortenSettings::default()
    };

    let shortener = HttpShortener::new(settings);
    let err = shortener.shorten("https://example.com").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}
