use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::repository::{FilingHistory, HistoryError};
use crate::models::{FilingRecord, FilingRecordStatus};

/// Filing history held in memory. Nothing is ever written back.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFilingHistory {
    records: Vec<FilingRecord>,
}

impl InMemoryFilingHistory {
    pub fn new(records: Vec<FilingRecord>) -> Self {
        Self { records }
    }

    /// The three demonstration records shown on the history tab.
    pub fn sample() -> Self {
        Self::new(vec![
            sample_record(
                "1",
                (2024, 3, 15),
                1_200_000,
                78_000,
                FilingRecordStatus::Completed,
                "FY 2023-24",
            ),
            sample_record(
                "2",
                (2023, 3, 20),
                1_100_000,
                65_000,
                FilingRecordStatus::Completed,
                "FY 2022-23",
            ),
            sample_record(
                "3",
                (2024, 12, 1),
                1_350_000,
                95_000,
                FilingRecordStatus::Draft,
                "FY 2024-25",
            ),
        ])
    }
}

fn sample_record(
    id: &str,
    (year, month, day): (i32, u32, u32),
    income: i64,
    tax: i64,
    status: FilingRecordStatus,
    filing_year: &str,
) -> FilingRecord {
    FilingRecord {
        id: id.to_string(),
        filed_on: NaiveDate::from_ymd_opt(year, month, day)
            .expect("sample filing date is a valid calendar date"),
        income: Decimal::from(income),
        tax: Decimal::from(tax),
        status,
        filing_year: filing_year.to_string(),
    }
}

#[async_trait]
impl FilingHistory for InMemoryFilingHistory {
    async fn list_records(&self) -> Result<Vec<FilingRecord>, HistoryError> {
        debug!(count = self.records.len(), "listing filing records");
        Ok(self.records.clone())
    }

    async fn get_record(
        &self,
        id: &str,
    ) -> Result<FilingRecord, HistoryError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))
    }
}
