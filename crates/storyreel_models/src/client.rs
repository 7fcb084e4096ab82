use crate::{ChatCompletionRequest, ChatCompletionResponse, ModelConfig, convert};
use async_trait::async_trait;
use storyreel_core::{CompletionRequest, CompletionResponse};
use storyreel_error::{CompletionError, CompletionErrorKind, StoryreelResult};
use storyreel_interface::CompletionDriver;
use tracing::instrument;

/// Client for an OpenAI-compatible chat-completions API
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: ModelConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Fails when the underlying HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: ModelConfig) -> Result<Self, CompletionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            CompletionError::new(CompletionErrorKind::Configuration(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        if config.api_key.is_none() {
            tracing::warn!("No API key configured; requests will be sent unauthenticated");
        }
        tracing::debug!("Creating completion client");
        Ok(Self { config, client })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = self.config.completions_url();
        tracing::debug!("Sending chat completion request to {}", url);

        let mut req = self
            .client
            .post(&url)
            .json(request)
            .header("Content-Type", "application/json");

        if let Some(api_key) = &self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            CompletionError::new(CompletionErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "Provider returned error");
            return Err(CompletionError::new(CompletionErrorKind::Api {
                status: status.as_u16(),
                body,
            }));
        }

        let result = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            CompletionError::new(CompletionErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!("Chat completion successful");
        Ok(result)
    }
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.config.model))]
    async fn complete(&self, req: &CompletionRequest) -> StoryreelResult<CompletionResponse> {
        let chat_request = convert::to_chat_request(req, &self.config)?;
        let response = self.chat_completion(&chat_request).await?;
        Ok(convert::from_chat_response(response)?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
