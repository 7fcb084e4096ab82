//! Request body of the `/v1/chat/completions` endpoint.

use serde::{Deserialize, Serialize};
use storyreel_core::{Message, Role};

/// Chat-completions request as sent on the wire.
///
/// Unset sampling fields are omitted so the provider applies its own defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// System framing followed by the prompt
    pub messages: Vec<ChatMessage>,
    /// Completion length cap
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub temperature: Option<f32>,
}

/// One wire message; the role serializes as `"system"`, `"user"` or `"assistant"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatMessage {
    /// Speaker
    pub role: Role,
    /// Text
    pub content: String,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}
