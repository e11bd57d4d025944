use async_trait::async_trait;
use thiserror::Error;

use crate::models::{FilingRecord, FilingRecordStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("filing record '{0}' not found")]
    NotFound(String),
}

/// Read access to previously filed returns.
#[async_trait]
pub trait FilingHistory: Send + Sync {
    /// All records in the order the backend keeps them.
    async fn list_records(&self) -> Result<Vec<FilingRecord>, HistoryError>;

    async fn get_record(
        &self,
        id: &str,
    ) -> Result<FilingRecord, HistoryError>;

    async fn list_by_status(
        &self,
        status: FilingRecordStatus,
    ) -> Result<Vec<FilingRecord>, HistoryError> {
        let records = self.list_records().await?;
        Ok(records
            .into_iter()
            .filter(|record| record.status == status)
            .collect())
    }
}
