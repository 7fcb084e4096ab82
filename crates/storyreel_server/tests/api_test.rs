//! Router tests driven through `tower::ServiceExt::oneshot`.

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::sync::Arc;
use storyreel_core::{CompletionRequest, CompletionResponse};
use storyreel_error::{CompletionError, CompletionErrorKind, StoryreelResult};
use storyreel_interface::CompletionDriver;
use storyreel_narrative::{SUMMARIZER_SYSTEM, StoryService};
use storyreel_server::{ApiState, create_router};
use storyreel_slides::SlideConfig;
use storyreel_storage::InMemoryStorage;
use tower::ServiceExt;

/// Fixed prose for chapters and summaries; optionally fails every call.
struct CannedDriver {
    fail: bool,
}

#[async_trait]
impl CompletionDriver for CannedDriver {
    async fn complete(&self, req: &CompletionRequest) -> StoryreelResult<CompletionResponse> {
        if self.fail {
            return Err(CompletionError::new(CompletionErrorKind::Http("connection refused".into())).into());
        }
        let text = if req.system_prompt() == Some(SUMMARIZER_SYSTEM) {
            "They reached the gate."
        } else {
            "Mara cut through the vines. The gate loomed ahead. It was older than any map."
        };
        Ok(CompletionResponse::from_text(text))
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }

    fn model_name(&self) -> &str {
        "canned-1"
    }
}

fn router_with(fail: bool) -> Router {
    let slides = SlideConfig::default()
        .with_width(320)
        .with_height(480)
        .with_margin(20)
        .with_font_paths(Vec::new())
        .with_bitmap_scale(1);
    let service = StoryService::new(
        Arc::new(InMemoryStorage::new()),
        Arc::new(CannedDriver { fail }),
        slides,
    );
    create_router(ApiState::new(Arc::new(service)))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(router, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn lost_city() -> Value {
    json!({
        "title": "Lost City",
        "setting": "A jungle ruin",
        "characters": [{"name": "Mara", "description": "a cartographer"}]
    })
}

#[tokio::test]
async fn test_health() {
    let router = router_with(false);
    let (status, body) = send_json(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_story_flow() {
    let router = router_with(false);

    let (status, body) = send_json(&router, post_json("/start-story", lost_city())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"story_filename": "lost_city.json"}));

    let (status, body) = send_json(
        &router,
        post_json(
            "/generate-chapter",
            json!({"story_filename": "lost_city.json", "prompt": "Open the gate."}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "They reached the gate.");
    assert!(body["chapter"].as_str().unwrap().starts_with("Mara cut"));

    let (status, story) = send_json(&router, get("/get-story/lost_city.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(story["title"], "Lost City");
    assert_eq!(story["chapters"][0]["chapter_number"], 1);
    assert_eq!(story["summary"], "\nChapter 1 summary: They reached the gate.");

    let (status, listing) = send_json(&router, get("/stories")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing, json!(["lost_city.json"]));
}

#[tokio::test]
async fn test_slides_are_generated_and_served() {
    let router = router_with(false);
    send(&router, post_json("/start-story", lost_city())).await;
    send(
        &router,
        post_json("/generate-chapter", json!({"story_filename": "lost_city.json"})),
    )
    .await;

    let request = Request::builder()
        .method("POST")
        .uri("/generate-slides?story_filename=lost_city.json&chapter_number=1")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send_json(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    let slides = body["slides"].as_array().unwrap();
    assert_eq!(slides[0], "slides/lost_city/chapter1/slide_1.png");

    let response = router
        .clone()
        .oneshot(get("/slides/lost_city/chapter1/slide_1.png"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    let png = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_error_statuses() {
    let router = router_with(false);

    let (status, body) = send_json(&router, get("/get-story/missing.json")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("missing.json"));

    let (status, _) = send_json(&router, get("/slides/nowhere/slide_1.png")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_json(&router, post_json("/start-story", json!({"title": " "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let (status, _) = send_json(&router, post_json("/start-story", json!({"setting": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(&router, post_json("/start-story", lost_city())).await;
    let (status, _) = send_json(&router, post_json("/start-story", lost_city())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let request = Request::builder()
        .method("POST")
        .uri("/generate-slides?story_filename=lost_city.json&chapter_number=7")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send_json(&router, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method("POST")
        .uri("/generate-slides?story_filename=lost_city.json")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send_json(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let router = router_with(true);
    send(&router, post_json("/start-story", lost_city())).await;

    let (status, body) = send_json(
        &router,
        post_json("/generate-chapter", json!({"story_filename": "lost_city.json"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].as_str().unwrap().contains("connection refused"));

    let (_, story) = send_json(&router, get("/get-story/lost_city.json")).await;
    assert_eq!(story["chapters"], json!([]));
}

#[tokio::test]
async fn test_out_of_range_chapter_numbers_are_not_found() {
    let router = router_with(false);
    send(&router, post_json("/start-story", lost_city())).await;
    send(
        &router,
        post_json("/generate-chapter", json!({"story_filename": "lost_city.json"})),
    )
    .await;

    for chapter in ["-1", "0", "4294967296", "9223372036854775807"] {
        let request = Request::builder()
            .method("POST")
            .uri(format!(
                "/generate-slides?story_filename=lost_city.json&chapter_number={}",
                chapter
            ))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send_json(&router, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "chapter {}", chapter);
    }
}
