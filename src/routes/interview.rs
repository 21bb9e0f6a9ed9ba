use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::interview_dto::{
        CreateInterviewPayload, InterviewResponse, MessageResponse, UpdateInterviewPayload,
    },
    error::Result,
    extract::{ApiJson, ApiPath},
    AppState,
};

#[utoipa::path(
    get,
    path = "/interviews",
    responses(
        (status = 200, description = "All interviews", body = [InterviewResponse]),
        (status = 500, description = "Storage failure")
    )
)]
#[axum::debug_handler]
pub async fn list_interviews(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.interview_service.list().await?;
    let body: Vec<InterviewResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/interviews",
    request_body = CreateInterviewPayload,
    responses(
        (status = 200, description = "Interview created successfully", body = MessageResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Storage failure")
    )
)]
#[axum::debug_handler]
pub async fn create_interview(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateInterviewPayload>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.create(payload).await?;
    Ok(Json(
        MessageResponse::new("Interview created successfully").with_id(interview.id),
    ))
}

#[utoipa::path(
    get,
    path = "/interviews/{id}",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Interview found", body = InterviewResponse),
        (status = 404, description = "Interview not found"),
        (status = 500, description = "Storage failure")
    )
)]
#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.get_by_id(id).await?;
    Ok(Json(InterviewResponse::from(interview)))
}

#[utoipa::path(
    put,
    path = "/interviews/{id}",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    request_body = UpdateInterviewPayload,
    responses(
        (status = 200, description = "Interview updated successfully", body = MessageResponse),
        (status = 400, description = "Invalid field value"),
        (status = 404, description = "Interview not found"),
        (status = 500, description = "Storage failure")
    )
)]
#[axum::debug_handler]
pub async fn update_interview(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateInterviewPayload>,
) -> Result<impl IntoResponse> {
    state.interview_service.update(id, payload).await?;
    Ok(Json(MessageResponse::new("Interview updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/interviews/{id}",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Interview deleted successfully", body = MessageResponse),
        (status = 404, description = "Interview not found"),
        (status = 500, description = "Storage failure")
    )
)]
#[axum::debug_handler]
pub async fn delete_interview(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse> {
    state.interview_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Interview deleted successfully")))
}
