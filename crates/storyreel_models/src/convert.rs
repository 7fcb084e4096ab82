//! Conversion between Storyreel and chat-completions API types

use crate::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ModelConfig};
use storyreel_core::{CompletionRequest, CompletionResponse};
use storyreel_error::{CompletionError, CompletionErrorKind};

/// Convert a CompletionRequest into a ChatCompletionRequest
///
/// Per-request settings win over the configured defaults.
#[tracing::instrument(skip_all, fields(messages = request.messages.len()))]
pub fn to_chat_request(
    request: &CompletionRequest,
    config: &ModelConfig,
) -> Result<ChatCompletionRequest, CompletionError> {
    if request.messages.is_empty() {
        return Err(CompletionError::new(CompletionErrorKind::Configuration(
            "Request must contain at least one message".into(),
        )));
    }

    Ok(ChatCompletionRequest {
        model: request.model.clone().unwrap_or_else(|| config.model.clone()),
        messages: request.messages.iter().map(ChatMessage::from).collect(),
        max_tokens: request.max_tokens.or(config.max_tokens),
        temperature: request.temperature.or(config.temperature),
    })
}

/// Convert a ChatCompletionResponse into trimmed completion text
///
/// A missing choice, null content or whitespace-only content are all
/// reported as [`CompletionErrorKind::EmptyResponse`].
#[tracing::instrument(skip_all)]
pub fn from_chat_response(
    response: ChatCompletionResponse,
) -> Result<CompletionResponse, CompletionError> {
    let text = response
        .choices()
        .first()
        .and_then(|choice| choice.message().content().as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| CompletionError::new(CompletionErrorKind::EmptyResponse))?;

    if let Some(usage) = response.usage() {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens(),
            completion_tokens = usage.completion_tokens(),
            "Completion usage"
        );
    }

    Ok(CompletionResponse {
        text: text.to_string(),
        model: response.model().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_request_uses_config_defaults() {
        let mut config = ModelConfig::new("http://x", "gpt-4o");
        config.max_tokens = Some(800);
        let request = CompletionRequest::framed("sys", "prompt");

        let chat = to_chat_request(&request, &config).unwrap();
        assert_eq!(chat.model, "gpt-4o");
        assert_eq!(chat.max_tokens, Some(800));
        assert_eq!(chat.messages[0].role, storyreel_core::Role::System);
        assert_eq!(chat.messages[1].content, "prompt");
    }

    #[test]
    fn test_request_override_wins() {
        let config = ModelConfig::new("http://x", "gpt-4o");
        let mut request = CompletionRequest::framed("sys", "prompt");
        request.model = Some("gpt-4o-mini".into());
        request.temperature = Some(0.2);

        let chat = to_chat_request(&request, &config).unwrap();
        assert_eq!(chat.model, "gpt-4o-mini");
        assert_eq!(chat.temperature, Some(0.2));
    }

    #[test]
    fn test_empty_request_rejected() {
        let config = ModelConfig::default();
        assert!(to_chat_request(&CompletionRequest::default(), &config).is_err());
    }

    #[test]
    fn test_response_text_is_trimmed() {
        let out = from_chat_response(response(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "  Once upon a time.\n"}}]
        })))
        .unwrap();
        assert_eq!(out.text, "Once upon a time.");
    }

    #[test]
    fn test_blank_and_missing_content_are_empty_responses() {
        for body in [
            serde_json::json!({"choices": []}),
            serde_json::json!({"choices": [{"message": {"role": "assistant", "content": null}}]}),
            serde_json::json!({"choices": [{"message": {"role": "assistant", "content": "  "}}]}),
        ] {
            let err = from_chat_response(response(body)).unwrap_err();
            assert_eq!(err.kind, CompletionErrorKind::EmptyResponse);
        }
    }
}
