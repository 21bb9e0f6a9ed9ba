use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::repository::InterviewRepository;
use crate::error::{Error, Result};
use crate::models::interview::{Interview, NewInterview};

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Interview>,
}

/// Process-local store used by tests and database-less runs.
#[derive(Debug, Default)]
pub struct MemoryInterviewRepository {
    table: RwLock<Table>,
}

impl MemoryInterviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InterviewRepository for MemoryInterviewRepository {
    async fn list(&self) -> Result<Vec<Interview>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Interview>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, interview: NewInterview) -> Result<Interview> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let record = interview.with_id(table.next_id);
        table.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn save(&self, interview: &Interview) -> Result<Interview> {
        let mut table = self.table.write().await;
        let slot = table
            .rows
            .get_mut(&interview.id)
            .ok_or_else(|| Error::NotFound("Interview not found".to_string()))?;
        // created_at is fixed at insert time.
        let created_at = slot.created_at;
        *slot = Interview {
            created_at,
            ..interview.clone()
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
