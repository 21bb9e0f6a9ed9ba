use std::sync::Arc;

use validator::Validate;

use crate::database::repository::InterviewRepository;
use crate::dto::interview_dto::{CreateInterviewPayload, IntegerInput, UpdateInterviewPayload};
use crate::error::{Error, Result};
use crate::models::interview::{DurationMinutes, Interview, InterviewStatus, NewInterview};
use crate::utils::time::{self, parse_datetime};

#[derive(Clone)]
pub struct InterviewService {
    repo: Arc<dyn InterviewRepository>,
}

impl InterviewService {
    pub fn new(repo: Arc<dyn InterviewRepository>) -> Self {
        Self { repo }
    }

    pub async fn ping(&self) -> Result<()> {
        self.repo.ping().await
    }

    pub async fn list(&self) -> Result<Vec<Interview>> {
        self.repo.list().await.map_err(into_server_error)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Interview> {
        match self.repo.find(id).await {
            Ok(Some(interview)) => Ok(interview),
            Ok(None) => {
                tracing::warn!(interview_id = id, "interview not found");
                Err(not_found())
            }
            Err(err) => Err(into_server_error(err)),
        }
    }

    pub async fn create(&self, payload: CreateInterviewPayload) -> Result<Interview> {
        let new = Self::build_new(payload, time::now())?;
        let interview = self.repo.insert(new).await.map_err(into_server_error)?;
        tracing::info!(interview_id = interview.id, "interview created");
        Ok(interview)
    }

    pub async fn update(&self, id: i64, payload: UpdateInterviewPayload) -> Result<Interview> {
        let mut interview = self.get_by_id(id).await?;
        Self::apply_update(&mut interview, payload)?;
        interview.touch(time::now())?;

        let saved = self.repo.save(&interview).await.map_err(|err| match err {
            Error::NotFound(_) => not_found(),
            other => into_server_error(other),
        })?;
        tracing::info!(interview_id = id, status = %saved.status, "interview updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.get_by_id(id).await?;
        match self.repo.delete(id).await {
            Ok(true) => {
                tracing::info!(interview_id = id, "interview deleted");
                Ok(())
            }
            Ok(false) => Err(not_found()),
            Err(err) => Err(into_server_error(err)),
        }
    }

    /// Validates a create request and fills in server-side defaults.
    pub fn build_new(
        payload: CreateInterviewPayload,
        now: chrono::NaiveDateTime,
    ) -> Result<NewInterview> {
        let missing = payload.missing_fields();
        if missing.is_empty() {
            payload.validate()?;
        }

        let CreateInterviewPayload {
            interviewee_name: Some(interviewee_name),
            interviewer_name: Some(interviewer_name),
            interview_datetime: Some(interview_datetime),
            interview_duration_min: Some(interview_duration_min),
            status,
            created_at,
            updated_at,
        } = payload
        else {
            return Err(Error::MissingFields(missing));
        };

        let interview_datetime = parse_field("interviewDatetime", &interview_datetime)?;
        let interview_duration_min = parse_duration(&interview_duration_min)?;
        let status = match status {
            Some(token) => InterviewStatus::parse(&token)?,
            None => InterviewStatus::default(),
        };
        let created_at = created_at
            .map(|raw| parse_field("createdAt", &raw))
            .transpose()?;
        let updated_at = updated_at
            .map(|raw| parse_field("updatedAt", &raw))
            .transpose()?;
        let (created_at, updated_at) = resolve_timestamps(created_at, updated_at, now)?;

        Ok(NewInterview {
            interviewee_name,
            interviewer_name,
            interview_datetime,
            interview_duration_min,
            status,
            created_at,
            updated_at,
        })
    }

    /// Applies every supplied field. Nothing is written to `interview` unless all of them are valid.
    pub fn apply_update(interview: &mut Interview, payload: UpdateInterviewPayload) -> Result<()> {
        let mut next = interview.clone();

        if let Some(name) = non_empty(payload.interviewee_name) {
            next.interviewee_name = name;
        }
        if let Some(name) = non_empty(payload.interviewer_name) {
            next.interviewer_name = name;
        }
        if let Some(raw) = non_empty(payload.interview_datetime) {
            next.interview_datetime = parse_field("interviewDatetime", &raw)?;
        }
        if let Some(duration) = payload.interview_duration_min.filter(|d| !d.is_blank()) {
            let minutes = duration.parse().ok_or_else(invalid_duration)?;
            next.set_duration(minutes)?;
        }
        if let Some(token) = non_empty(payload.status) {
            next.status = InterviewStatus::parse(&token)?;
        }

        *interview = next;
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Missing `createdAt` defaults to `updatedAt` when only that was given, else to `now`.
/// Result satisfies `created_at <= updated_at <= now`.
fn resolve_timestamps(
    created_at: Option<chrono::NaiveDateTime>,
    updated_at: Option<chrono::NaiveDateTime>,
    now: chrono::NaiveDateTime,
) -> Result<(chrono::NaiveDateTime, chrono::NaiveDateTime)> {
    let created_at = created_at.or(updated_at).unwrap_or(now);
    let updated_at = updated_at.unwrap_or(now);

    if created_at > now || updated_at > now {
        return Err(Error::Validation(
            "createdAt and updatedAt must not be in the future".to_string(),
        ));
    }
    if updated_at < created_at {
        return Err(Error::Validation(
            "updatedAt must not be earlier than createdAt".to_string(),
        ));
    }
    Ok((created_at, updated_at))
}

fn parse_field(field: &str, raw: &str) -> Result<chrono::NaiveDateTime> {
    parse_datetime(raw).map_err(|_| {
        Error::Validation(format!(
            "Error parsing {}, expected YYYY-MM-DDTHH:MM:SS.ffffff",
            field
        ))
    })
}

fn parse_duration(input: &IntegerInput) -> Result<DurationMinutes> {
    let minutes = input.parse().ok_or_else(invalid_duration)?;
    DurationMinutes::new(minutes)
}

fn invalid_duration() -> Error {
    Error::Validation("Invalid integer for interviewDurationMin".to_string())
}

fn not_found() -> Error {
    Error::NotFound("Interview not found".to_string())
}

fn into_server_error(err: Error) -> Error {
    match err {
        Error::Database(_) | Error::Internal(_) => err,
        other => {
            tracing::error!(error = %other, "unexpected repository error");
            Error::Internal(other.to_string())
        }
    }
}
