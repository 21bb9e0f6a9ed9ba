use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use interview_scheduler::{app, database::MemoryInterviewRepository, AppState};

async fn get_json(uri: &str) -> (StatusCode, JsonValue) {
    let app = app(AppState::new(Arc::new(MemoryInterviewRepository::new())));
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_interview_paths() {
    let (status, body) = get_json("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/interviews"));
    assert!(paths.contains_key("/interviews/{id}"));
    assert!(paths["/interviews/{id}"]["put"].is_object());
    assert!(body["components"]["schemas"]["InterviewResponse"].is_object());
}
