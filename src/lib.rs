pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::database::repository::InterviewRepository;
use crate::services::interview_service::InterviewService;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub interview_service: InterviewService,
}

impl AppState {
    pub fn new(repo: Arc<dyn InterviewRepository>) -> Self {
        Self {
            interview_service: InterviewService::new(repo),
        }
    }
}

/// Full HTTP surface with its middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api-docs/openapi.json", get(routes::docs::openapi))
        .route(
            "/interviews",
            get(routes::interview::list_interviews).post(routes::interview::create_interview),
        )
        .route(
            "/interviews/:id",
            get(routes::interview::get_interview)
                .put(routes::interview::update_interview)
                .delete(routes::interview::delete_interview),
        )
        .with_state(state)
        .layer(middleware::cors::interview_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
