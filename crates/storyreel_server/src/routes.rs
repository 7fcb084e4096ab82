//! Route handlers.

use crate::ApiError;
use axum::{
    Router,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use storyreel_core::{Story, StorySetup};
use storyreel_error::{LedgerError, LedgerErrorKind, StoryreelError};
use storyreel_narrative::StoryService;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct ApiState {
    service: Arc<StoryService>,
}

impl ApiState {
    /// State serving requests with `service`.
    pub fn new(service: Arc<StoryService>) -> Self {
        Self { service }
    }
}

/// Body of `POST /start-story` responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartStoryResponse {
    /// Record filename of the new story
    pub story_filename: String,
}

/// Body of `POST /generate-chapter` requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateChapterRequest {
    /// Record filename of the story to continue
    pub story_filename: String,
    /// Continuation instruction
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Body of `POST /generate-chapter` responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateChapterResponse {
    /// Chapter text
    pub chapter: String,
    /// Chapter summary
    pub summary: String,
}

/// Query of `POST /generate-slides`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidesQuery {
    /// Record filename of the story
    pub story_filename: String,
    /// Chapter to render; numbers below 1 never match a chapter
    pub chapter_number: i64,
}

/// Body of `POST /generate-slides` responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidesResponse {
    /// Slide paths in reading order
    pub slides: Vec<String>,
}

/// Creates the Storyreel API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/start-story", post(start_story))
        .route("/generate-chapter", post(generate_chapter))
        .route("/get-story/:filename", get(get_story))
        .route("/stories", get(list_stories))
        .route("/generate-slides", post(generate_slides))
        .route("/slides/*path", get(get_slide))
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn start_story(
    State(state): State<ApiState>,
    body: Result<Json<StorySetup>, JsonRejection>,
) -> Result<Json<StartStoryResponse>, ApiError> {
    let Json(setup) = body?;
    let story_filename = state.service.create_story(setup).await?;
    Ok(Json(StartStoryResponse { story_filename }))
}

async fn generate_chapter(
    State(state): State<ApiState>,
    body: Result<Json<GenerateChapterRequest>, JsonRejection>,
) -> Result<Json<GenerateChapterResponse>, ApiError> {
    let Json(request) = body?;
    let generated = state
        .service
        .generate_chapter(&request.story_filename, request.prompt.as_deref())
        .await?;
    let (chapter, summary) = generated.into_parts();
    Ok(Json(GenerateChapterResponse { chapter, summary }))
}

async fn get_story(
    State(state): State<ApiState>,
    Path(filename): Path<String>,
) -> Result<Json<Story>, ApiError> {
    Ok(Json(state.service.get_story(&filename).await?))
}

async fn list_stories(State(state): State<ApiState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.service.list_stories().await?))
}

async fn generate_slides(
    State(state): State<ApiState>,
    query: Result<Query<SlidesQuery>, QueryRejection>,
) -> Result<Json<SlidesResponse>, ApiError> {
    let Query(query) = query?;
    let chapter_number = u32::try_from(query.chapter_number)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            StoryreelError::from(LedgerError::new(LedgerErrorKind::ChapterNotFound {
                story: query.story_filename.clone(),
                chapter: query.chapter_number,
            }))
        })?;
    let slides = state
        .service
        .generate_slides(&query.story_filename, chapter_number)
        .await?;
    Ok(Json(SlidesResponse { slides }))
}

async fn get_slide(
    State(state): State<ApiState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let png = state.service.get_slide(&path).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
