use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::interview::{Interview, InterviewStatus};
use crate::utils::time::format_datetime;

/// `interviewDurationMin` may arrive as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntegerInput {
    Number(i64),
    Text(String),
}

impl IntegerInput {
    pub fn parse(&self) -> Option<i64> {
        match self {
            IntegerInput::Number(value) => Some(*value),
            IntegerInput::Text(raw) => raw.trim().parse().ok(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, IntegerInput::Text(raw) if raw.trim().is_empty())
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewPayload {
    #[serde(alias = "interviewee_name")]
    #[validate(custom(function = "not_blank", message = "intervieweeName must not be empty"))]
    pub interviewee_name: Option<String>,
    #[serde(alias = "interviewer_name")]
    #[validate(custom(function = "not_blank", message = "interviewerName must not be empty"))]
    pub interviewer_name: Option<String>,
    /// `YYYY-MM-DDTHH:MM:SS.ffffff`
    #[serde(alias = "interview_datetime")]
    pub interview_datetime: Option<String>,
    #[serde(alias = "interview_duration_min")]
    #[schema(value_type = Option<i64>)]
    pub interview_duration_min: Option<IntegerInput>,
    pub status: Option<String>,
    #[serde(alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(alias = "updated_at")]
    pub updated_at: Option<String>,
}

impl CreateInterviewPayload {
    /// Wire names of the required fields that were absent or `null`.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.interviewee_name.is_none() {
            missing.push("intervieweeName".to_string());
        }
        if self.interviewer_name.is_none() {
            missing.push("interviewerName".to_string());
        }
        if self.interview_datetime.is_none() {
            missing.push("interviewDatetime".to_string());
        }
        if self.interview_duration_min.is_none() {
            missing.push("interviewDurationMin".to_string());
        }
        missing
    }
}

/// Partial update. Absent, `null` and empty-string fields leave the stored value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewPayload {
    #[serde(alias = "interviewee_name")]
    pub interviewee_name: Option<String>,
    #[serde(alias = "interviewer_name")]
    pub interviewer_name: Option<String>,
    #[serde(alias = "interview_datetime")]
    pub interview_datetime: Option<String>,
    #[serde(alias = "interview_duration_min")]
    #[schema(value_type = Option<i64>)]
    pub interview_duration_min: Option<IntegerInput>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResponse {
    pub id: i64,
    pub interviewee_name: String,
    pub interviewer_name: String,
    pub interview_datetime: String,
    pub interview_duration_min: i32,
    pub status: InterviewStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<Interview> for InterviewResponse {
    fn from(value: Interview) -> Self {
        Self {
            id: value.id,
            interviewee_name: value.interviewee_name,
            interviewer_name: value.interviewer_name,
            interview_datetime: format_datetime(value.interview_datetime),
            interview_duration_min: value.interview_duration_min.get(),
            status: value.status,
            created_at: format_datetime(value.created_at),
            updated_at: format_datetime(value.updated_at),
        }
    }
}
