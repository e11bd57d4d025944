use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingRecordStatus {
    Completed,
    Pending,
    Draft,
}

impl FilingRecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Draft => "draft",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" => Some(Self::Completed),
            "pending" => Some(Self::Pending),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }
}

/// A past return as listed in the filing history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingRecord {
    pub id: String,
    pub filed_on: NaiveDate,
    pub income: Decimal,
    pub tax: Decimal,
    pub status: FilingRecordStatus,
    /// Financial year label, e.g. `FY 2023-24`.
    pub filing_year: String,
}
