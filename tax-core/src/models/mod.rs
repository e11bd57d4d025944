mod filing_record;
mod regime_config;
mod slab;
mod tax_input;
mod tax_result;

pub use filing_record::{FilingRecord, FilingRecordStatus};
pub use regime_config::{RegimeConfig, RegimeConfigError};
pub use slab::Slab;
pub use tax_input::{AgeCategory, FilingCategory, TaxInput, TaxInputError};
pub use tax_result::{Breakdown, BreakdownKind, BreakdownLine, TaxResult};
