pub mod memory;
pub mod repository;

pub use memory::InMemoryFilingHistory;
pub use repository::{FilingHistory, HistoryError};
