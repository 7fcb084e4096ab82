//! Request and response types for text completion.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// Provider-agnostic completion request.
///
/// # Examples
///
/// ```
/// use storyreel_core::{CompletionRequest, Message};
///
/// let request = CompletionRequest::builder()
///     .messages(vec![
///         Message::system("You are a helpful storyteller AI."),
///         Message::user("Write Chapter 1."),
///     ])
///     .max_tokens(Some(1024))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.user_prompt(), Some("Write Chapter 1."));
/// assert_eq!(request.model, None);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
pub struct CompletionRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Model override; the driver's configured model is used when absent
    #[builder(default)]
    pub model: Option<String>,
}

impl CompletionRequest {
    /// Creates a new request builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// A request made of one system framing message and one user prompt.
    pub fn framed(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system), Message::user(prompt)],
            ..Self::default()
        }
    }

    /// Text of the first system message, if any.
    pub fn system_prompt(&self) -> Option<&str> {
        self.first_of(Role::System)
    }

    /// Text of the last user message, if any.
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }

    fn first_of(&self, role: Role) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
    }
}

/// Text produced by one completion round-trip.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct CompletionResponse {
    /// Generated text
    pub text: String,
    /// Model that produced the text, when the provider reports it
    #[builder(default)]
    pub model: Option<String>,
}

impl CompletionResponse {
    /// Response carrying only text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
        }
    }
}
