//! Tests for the HTTP chat client against a local stub of the completions API.

mod common;

use std::time::Duration;

use chatshot::{
    ChatClient, ClientConfig, CompletionRequest, DomainError, OpenAiClient, PromptPair,
};
use common::{closed_port_url, completion_body, StubServer};

fn client_for(base_url: &str) -> OpenAiClient {
    OpenAiClient::new(ClientConfig::new("sk-test").with_base_url(base_url))
        .expect("Failed to build client")
}

fn request() -> CompletionRequest {
    CompletionRequest::from_prompts("gpt-4.1-mini", &PromptPair::default())
}

#[tokio::test]
async fn test_posts_json_with_bearer_auth() {
    let stub = StubServer::replying("Hello").await;
    let client = client_for(&stub.base_url);

    let response = client.complete(&request()).await.expect("completion failed");
    assert_eq!(response.first_content(), Some("Hello"));
    assert_eq!(response.usage.map(|u| u.total_tokens), Some(21));

    let captured = stub.requests();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].header("authorization"), Some("Bearer sk-test"));
    assert_eq!(captured[0].body["model"], "gpt-4.1-mini");
    assert_eq!(captured[0].body["messages"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_attribution_headers_are_sent_when_configured() {
    let stub = StubServer::replying("ok").await;
    let mut config = ClientConfig::new("sk-test").with_base_url(&stub.base_url);
    config.referer = Some("https://lexai-chat.com".to_string());
    config.title = Some("Lexar.Chat".to_string());
    let client = OpenAiClient::new(config).expect("Failed to build client");

    client.complete(&request()).await.expect("completion failed");

    let captured = stub.requests();
    assert_eq!(captured[0].header("http-referer"), Some("https://lexai-chat.com"));
    assert_eq!(captured[0].header("x-title"), Some("Lexar.Chat"));
}

#[tokio::test]
async fn test_attribution_headers_absent_by_default() {
    let stub = StubServer::replying("ok").await;
    let client = client_for(&stub.base_url);

    client.complete(&request()).await.expect("completion failed");

    let captured = stub.requests();
    assert!(captured[0].header("http-referer").is_none());
    assert!(captured[0].header("x-title").is_none());
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let stub = StubServer::spawn(401, r#"{"error":{"message":"Incorrect API key provided"}}"#).await;
    let client = client_for(&stub.base_url);

    let err = client.complete(&request()).await.unwrap_err();
    assert!(err.is_authentication(), "unexpected error: {err}");
    assert!(err.to_string().contains("Incorrect API key"));
}

#[tokio::test]
async fn test_too_many_requests_maps_to_rate_limited() {
    let stub = StubServer::spawn(429, r#"{"error":{"message":"quota exceeded"}}"#).await;
    let client = client_for(&stub.base_url);

    let err = client.complete(&request()).await.unwrap_err();
    assert!(err.is_rate_limited(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_server_error_maps_to_remote_error() {
    let stub = StubServer::spawn(503, "upstream unavailable").await;
    let client = client_for(&stub.base_url);

    let err = client.complete(&request()).await.unwrap_err();
    match err {
        DomainError::Remote { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected remote error, got {other}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let stub = StubServer::spawn(200, "<html>gateway</html>").await;
    let client = client_for(&stub.base_url);

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(err, DomainError::MalformedResponse(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn test_empty_choices_decode_successfully() {
    let stub = StubServer::spawn(200, completion_body(&[])).await;
    let client = client_for(&stub.base_url);

    let response = client.complete(&request()).await.expect("completion failed");
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let base_url = closed_port_url().await;
    let client = client_for(&base_url);

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(err, DomainError::Network(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let stub = StubServer::spawn_with_delay(Duration::from_secs(2), completion_body(&["late"])).await;
    let client = OpenAiClient::new(
        ClientConfig::new("sk-test")
            .with_base_url(&stub.base_url)
            .with_timeout(Duration::from_millis(100)),
    )
    .expect("Failed to build client");

    let err = client.complete(&request()).await.unwrap_err();
    match err {
        DomainError::Network(message) => assert!(message.contains("timed out"), "{message}"),
        other => panic!("expected network error, got {other}"),
    }
}
