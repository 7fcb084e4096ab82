//! OpenAI-compatible completion client for Storyreel
//!
//! [`OpenAiClient`] speaks the `/v1/chat/completions` protocol, so it works
//! against the hosted OpenAI API and against any local server exposing the
//! same endpoint. It implements [`storyreel_interface::CompletionDriver`]
//! and is what the binary injects into the narration layer.
//!
//! # Example
//!
//! ```rust,no_run
//! use storyreel_core::CompletionRequest;
//! use storyreel_interface::CompletionDriver;
//! use storyreel_models::{ModelConfig, OpenAiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ModelConfig::default().with_api_key(std::env::var("OPENAI_API_KEY")?);
//!     let client = OpenAiClient::new(config)?;
//!
//!     let response = client
//!         .complete(&CompletionRequest::framed(
//!             "You are a helpful storyteller AI.",
//!             "Write one sentence about a lighthouse.",
//!         ))
//!         .await?;
//!     println!("{}", response.text);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod convert;
mod request;
mod response;

pub use client::OpenAiClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, ModelConfig, ModelConfigBuilder};
pub use request::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatMessage, ChatMessageBuilder,
};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, Usage};
pub use storyreel_error::{CompletionError, CompletionErrorKind};
