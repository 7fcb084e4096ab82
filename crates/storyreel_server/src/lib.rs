//! HTTP API for Storyreel.
//!
//! Exposes story creation, chapter generation, retrieval and slide
//! generation as JSON endpoints over a shared [`StoryService`].
//!
//! [`StoryService`]: storyreel_narrative::StoryService

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod routes;

pub use error::{ApiError, status_for};
pub use routes::{
    ApiState, GenerateChapterRequest, GenerateChapterResponse, SlidesQuery, SlidesResponse,
    StartStoryResponse, create_router,
};

use std::sync::Arc;
use storyreel_error::{ConfigError, ConfigErrorKind, StoryreelResult};
use storyreel_narrative::StoryService;

/// Binds `bind` and serves the API until the process is stopped.
///
/// # Errors
///
/// Fails with a configuration error when the address cannot be bound.
#[tracing::instrument(skip(service))]
pub async fn serve(bind: &str, service: Arc<StoryService>) -> StoryreelResult<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| server_error(bind, e))?;
    tracing::info!(bind, "Serving Storyreel API");

    axum::serve(listener, create_router(ApiState::new(service)))
        .await
        .map_err(|e| server_error(bind, e))?;
    Ok(())
}

fn server_error(bind: &str, e: std::io::Error) -> ConfigError {
    ConfigError::new(ConfigErrorKind::Server {
        bind: bind.to_string(),
        reason: e.to_string(),
    })
}
