use axum::Json;
use utoipa::OpenApi;

use crate::dto::interview_dto::{
    CreateInterviewPayload, InterviewResponse, MessageResponse, UpdateInterviewPayload,
};
use crate::models::interview::InterviewStatus;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::interview::list_interviews,
        crate::routes::interview::create_interview,
        crate::routes::interview::get_interview,
        crate::routes::interview::update_interview,
        crate::routes::interview::delete_interview,
    ),
    components(schemas(
        CreateInterviewPayload,
        UpdateInterviewPayload,
        InterviewResponse,
        InterviewStatus,
        MessageResponse,
    )),
    tags((name = "interviews", description = "Interview scheduling"))
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
