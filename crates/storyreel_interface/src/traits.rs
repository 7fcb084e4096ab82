//! Trait definitions for completion backends.

use async_trait::async_trait;
use std::sync::Arc;
use storyreel_core::{CompletionRequest, CompletionResponse};
use storyreel_error::StoryreelResult;

/// Core trait that every text-completion backend implements.
///
/// One call is one round-trip: a framed prompt in, generated text out.
/// Implementations report any transport or provider failure as a
/// completion error so callers can treat it as an upstream fault.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate text for a request.
    async fn complete(&self, req: &CompletionRequest) -> StoryreelResult<CompletionResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T> CompletionDriver for Arc<T>
where
    T: CompletionDriver + ?Sized,
{
    async fn complete(&self, req: &CompletionRequest) -> StoryreelResult<CompletionResponse> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl CompletionDriver for Echo {
        async fn complete(
            &self,
            req: &CompletionRequest,
        ) -> StoryreelResult<CompletionResponse> {
            Ok(CompletionResponse::from_text(
                req.user_prompt().unwrap_or_default(),
            ))
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }

        fn model_name(&self) -> &str {
            "echo-1"
        }
    }

    #[tokio::test]
    async fn test_shared_driver_delegates() {
        let driver: Arc<dyn CompletionDriver> = Arc::new(Echo);
        let shared = Arc::new(driver);
        let response = shared
            .complete(&CompletionRequest::framed("system", "hello"))
            .await
            .unwrap();
        assert_eq!(response.text, "hello");
        assert_eq!(shared.provider_name(), "echo");
        assert_eq!(shared.model_name(), "echo-1");
    }
}
