//! Configuration for the chat-completions connection

use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Configuration for an OpenAI-compatible chat-completions endpoint
///
/// # Examples
///
/// ```
/// use storyreel_models::ModelConfigBuilder;
///
/// let config = ModelConfigBuilder::default()
///     .base_url("http://localhost:8080")
///     .model("mistral-7b")
///     .build()
///     .unwrap();
/// assert_eq!(config.api_key, None);
/// assert_eq!(config.timeout, None);
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ModelConfig {
    /// Base URL of the API (e.g., "https://api.openai.com")
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    pub base_url: String,
    /// Model identifier used when a request does not name one
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    pub model: String,
    /// Bearer token; requests are sent unauthenticated when absent
    #[builder(default)]
    pub api_key: Option<String>,
    /// Default completion length cap
    #[builder(default)]
    pub max_tokens: Option<u32>,
    /// Default sampling temperature
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Whole-request timeout; none waits indefinitely
    #[builder(default)]
    pub timeout: Option<Duration>,
}

impl ModelConfig {
    /// Create a configuration for a base URL and model
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            timeout: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Chat-completions endpoint URL
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}
