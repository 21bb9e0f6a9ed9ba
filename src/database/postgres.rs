use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::repository::InterviewRepository;
use crate::error::Result;
use crate::models::interview::{Interview, InterviewRow, NewInterview};

const INTERVIEW_COLUMNS: &str = "id, interviewee_name, interviewer_name, interview_datetime, \
     interview_duration_min, status, created_at, updated_at";

#[derive(Clone)]
pub struct PgInterviewRepository {
    pool: PgPool,
}

impl PgInterviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewRepository for PgInterviewRepository {
    async fn list(&self) -> Result<Vec<Interview>> {
        let query = format!("SELECT {} FROM interviews ORDER BY id", INTERVIEW_COLUMNS);
        let rows = sqlx::query_as::<_, InterviewRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Interview::try_from).collect()
    }

    async fn find(&self, id: i64) -> Result<Option<Interview>> {
        let query = format!("SELECT {} FROM interviews WHERE id = $1", INTERVIEW_COLUMNS);
        let row = sqlx::query_as::<_, InterviewRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Interview::try_from).transpose()
    }

    async fn insert(&self, interview: NewInterview) -> Result<Interview> {
        let query = format!(
            r#"
            INSERT INTO interviews (
                interviewee_name, interviewer_name, interview_datetime,
                interview_duration_min, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            INTERVIEW_COLUMNS
        );
        let row = sqlx::query_as::<_, InterviewRow>(&query)
            .bind(&interview.interviewee_name)
            .bind(&interview.interviewer_name)
            .bind(interview.interview_datetime)
            .bind(interview.interview_duration_min.get())
            .bind(interview.status.as_str())
            .bind(interview.created_at)
            .bind(interview.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Interview::try_from(row)
    }

    async fn save(&self, interview: &Interview) -> Result<Interview> {
        let query = format!(
            r#"
            UPDATE interviews
            SET
                interviewee_name = $2,
                interviewer_name = $3,
                interview_datetime = $4,
                interview_duration_min = $5,
                status = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING {}
            "#,
            INTERVIEW_COLUMNS
        );
        // RowNotFound here means the record vanished between fetch and update.
        let row = sqlx::query_as::<_, InterviewRow>(&query)
            .bind(interview.id)
            .bind(&interview.interviewee_name)
            .bind(&interview.interviewer_name)
            .bind(interview.interview_datetime)
            .bind(interview.interview_duration_min.get())
            .bind(interview.status.as_str())
            .bind(interview.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Interview::try_from(row)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let res = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
