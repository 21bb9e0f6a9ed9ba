use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    #[default]
    Scheduled,
    Ongoing,
    Canceled,
    Completed,
}

impl InterviewStatus {
    pub const ALL: [InterviewStatus; 4] = [
        InterviewStatus::Scheduled,
        InterviewStatus::Ongoing,
        InterviewStatus::Canceled,
        InterviewStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InterviewStatus::Scheduled => "scheduled",
            InterviewStatus::Ongoing => "ongoing",
            InterviewStatus::Canceled => "canceled",
            InterviewStatus::Completed => "completed",
        }
    }

    /// Tokens are matched case-insensitively; anything outside the four values is rejected.
    pub fn parse(token: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(token.trim()))
            .ok_or_else(|| {
                Error::Validation(format!(
                    "Invalid status '{}', expected one of: scheduled, ongoing, canceled, completed",
                    token
                ))
            })
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Interview length in minutes. Holding one proves the value is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DurationMinutes(i32);

impl DurationMinutes {
    pub fn new(minutes: i64) -> Result<Self> {
        if minutes <= 0 {
            return Err(Error::Validation(
                "interviewDurationMin must be greater than 0".to_string(),
            ));
        }
        i32::try_from(minutes)
            .map(Self)
            .map_err(|_| Error::Validation("interviewDurationMin is too large".to_string()))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interview {
    pub id: i64,
    pub interviewee_name: String,
    pub interviewer_name: String,
    pub interview_datetime: NaiveDateTime,
    pub interview_duration_min: DurationMinutes,
    pub status: InterviewStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Interview {
    pub fn set_duration(&mut self, minutes: i64) -> Result<()> {
        self.interview_duration_min = DurationMinutes::new(minutes)?;
        Ok(())
    }

    /// Moves `updated_at` to `now`, or just past its current value if the clock has not advanced.
    /// Stored timestamps are never later than their write time, so the fallback only covers
    /// two writes landing in the same microsecond.
    pub fn touch(&mut self, now: NaiveDateTime) -> Result<()> {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at
                .checked_add_signed(chrono::Duration::microseconds(1))
                .ok_or_else(|| {
                    Error::Validation("updatedAt cannot be advanced any further".to_string())
                })?
        };
        Ok(())
    }
}

/// A validated record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterview {
    pub interviewee_name: String,
    pub interviewer_name: String,
    pub interview_datetime: NaiveDateTime,
    pub interview_duration_min: DurationMinutes,
    pub status: InterviewStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewInterview {
    pub fn with_id(self, id: i64) -> Interview {
        Interview {
            id,
            interviewee_name: self.interviewee_name,
            interviewer_name: self.interviewer_name,
            interview_datetime: self.interview_datetime,
            interview_duration_min: self.interview_duration_min,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct InterviewRow {
    pub id: i64,
    pub interviewee_name: String,
    pub interviewer_name: String,
    pub interview_datetime: NaiveDateTime,
    pub interview_duration_min: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<InterviewRow> for Interview {
    type Error = Error;

    fn try_from(row: InterviewRow) -> Result<Self> {
        let status = InterviewStatus::parse(&row.status).map_err(|_| {
            Error::Internal(format!(
                "Stored interview {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;
        let interview_duration_min =
            DurationMinutes::new(row.interview_duration_min.into()).map_err(|_| {
                Error::Internal(format!(
                    "Stored interview {} has non-positive duration {}",
                    row.id, row.interview_duration_min
                ))
            })?;

        Ok(Self {
            id: row.id,
            interviewee_name: row.interviewee_name,
            interviewer_name: row.interviewer_name,
            interview_datetime: row.interview_datetime,
            interview_duration_min,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::utils::time::parse_datetime;

    fn sample() -> Interview {
        let at = parse_datetime("2024-01-01T00:00:00.000000").unwrap();
        NewInterview {
            interviewee_name: "A".into(),
            interviewer_name: "B".into(),
            interview_datetime: at,
            interview_duration_min: DurationMinutes::new(30).unwrap(),
            status: InterviewStatus::default(),
            created_at: at,
            updated_at: at,
        }
        .with_id(1)
    }

    #[test]
    fn status_tokens_are_lowercase_and_case_insensitive() {
        for status in InterviewStatus::ALL {
            assert_eq!(InterviewStatus::parse(status.as_str()).unwrap(), status);
            let upper = status.as_str().to_ascii_uppercase();
            assert_eq!(InterviewStatus::parse(&upper).unwrap(), status);
        }
        assert_eq!(
            serde_json::to_value(InterviewStatus::Canceled).unwrap(),
            serde_json::json!("canceled")
        );
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        let err = InterviewStatus::parse("postponed").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!("".parse::<InterviewStatus>().is_err());
    }

    #[test]
    fn default_status_is_scheduled() {
        assert_eq!(InterviewStatus::default(), InterviewStatus::Scheduled);
    }

    #[test]
    fn duration_must_be_positive() {
        assert_eq!(DurationMinutes::new(45).unwrap().get(), 45);
        assert_eq!(
            DurationMinutes::new(0).unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert!(DurationMinutes::new(-5).is_err());
        assert!(DurationMinutes::new(i64::from(i32::MAX) + 1).is_err());
    }

    #[test]
    fn set_duration_keeps_previous_value_on_rejection() {
        let mut interview = sample();
        assert!(interview.set_duration(0).is_err());
        assert_eq!(interview.interview_duration_min.get(), 30);
        interview.set_duration(90).unwrap();
        assert_eq!(interview.interview_duration_min.get(), 90);
    }

    #[test]
    fn touch_always_advances_updated_at() {
        let mut interview = sample();
        let before = interview.updated_at;
        interview.touch(before).unwrap();
        assert!(interview.updated_at > before);

        let later = before + chrono::Duration::hours(1);
        interview.touch(later).unwrap();
        assert_eq!(interview.updated_at, later);
    }

    #[test]
    fn touch_at_the_end_of_time_is_an_error_not_a_panic() {
        let mut interview = sample();
        interview.updated_at = NaiveDateTime::MAX;
        let err = interview.touch(sample().updated_at).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(interview.updated_at, NaiveDateTime::MAX);
    }

    #[test]
    fn rows_with_bad_status_are_server_errors() {
        let at = parse_datetime("2024-01-01T00:00:00.000000").unwrap();
        let row = InterviewRow {
            id: 7,
            interviewee_name: "A".into(),
            interviewer_name: "B".into(),
            interview_datetime: at,
            interview_duration_min: 30,
            status: "lost".into(),
            created_at: at,
            updated_at: at,
        };
        let err = Interview::try_from(row).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Server);
    }
}
