use async_trait::async_trait;

use crate::error::Result;
use crate::models::interview::{Interview, NewInterview};

/// Storage for interview records. Every mutating call is a single commit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    /// All records, oldest id first.
    async fn list(&self) -> Result<Vec<Interview>>;

    async fn find(&self, id: i64) -> Result<Option<Interview>>;

    async fn insert(&self, interview: NewInterview) -> Result<Interview>;

    /// Overwrites every mutable column of an existing record.
    async fn save(&self, interview: &Interview) -> Result<Interview>;

    /// Returns `false` when no record had that id.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<()>;
}
