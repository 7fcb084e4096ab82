//! Tests for the chat-completions client against a mock server.

use std::time::Duration;
use storyreel_core::CompletionRequest;
use storyreel_error::{CompletionErrorKind, ErrorCategory, StoryreelErrorKind};
use storyreel_interface::CompletionDriver;
use storyreel_models::{ModelConfig, OpenAiClient};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
    })
}

fn client_for(server: &MockServer) -> OpenAiClient {
    let config = ModelConfig::new(server.uri(), "gpt-4o").with_api_key("sk-test");
    OpenAiClient::new(config).unwrap()
}

fn completion_kind(err: &storyreel_error::StoryreelError) -> CompletionErrorKind {
    match err.kind() {
        StoryreelErrorKind::Completion(e) => e.kind.clone(),
        other => panic!("expected completion error, got {other}"),
    }
}

#[tokio::test]
async fn test_complete_sends_framed_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": "You are a helpful storyteller AI."},
                {"role": "user", "content": "Write Chapter 1."}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(
            "\n  The jungle swallowed the road.  \n",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .complete(&CompletionRequest::framed(
            "You are a helpful storyteller AI.",
            "Write Chapter 1.",
        ))
        .await
        .unwrap();

    assert_eq!(response.text, "The jungle swallowed the road.");
    assert_eq!(response.model.as_deref(), Some("gpt-4o"));
    assert_eq!(client.provider_name(), "openai");
    assert_eq!(client.model_name(), "gpt-4o");
}

#[tokio::test]
async fn test_api_error_is_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(&CompletionRequest::framed("sys", "prompt"))
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Upstream);
    assert_eq!(
        completion_kind(&err),
        CompletionErrorKind::Api {
            status: 429,
            body: "rate limited".into()
        }
    );
}

#[tokio::test]
async fn test_empty_content_is_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("   ")))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(&CompletionRequest::framed("sys", "prompt"))
        .await
        .unwrap_err();

    assert_eq!(completion_kind(&err), CompletionErrorKind::EmptyResponse);
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(&CompletionRequest::framed("sys", "prompt"))
        .await
        .unwrap_err();

    assert!(matches!(
        completion_kind(&err),
        CompletionErrorKind::Deserialization(_)
    ));
}

#[tokio::test]
async fn test_timeout_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut config = ModelConfig::new(server.uri(), "gpt-4o");
    config.timeout = Some(Duration::from_millis(100));
    let client = OpenAiClient::new(config).unwrap();

    let err = client
        .complete(&CompletionRequest::framed("sys", "prompt"))
        .await
        .unwrap_err();

    assert!(matches!(completion_kind(&err), CompletionErrorKind::Http(_)));
}
