pub mod calculations;
pub mod format;
pub mod history;
pub mod models;
pub mod report;

pub use calculations::TaxEngine;
pub use history::{FilingHistory, HistoryError, InMemoryFilingHistory};
pub use models::*;
pub use report::{TaxReport, TaxpayerProfile};
