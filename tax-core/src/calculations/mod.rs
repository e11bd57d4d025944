//! Tax calculations for the new Indian income tax regime.
//!
//! [`regime::TaxEngine`] walks a validated slab table and applies the
//! standard deduction, the low-income rebate and the cess in that order.

pub mod common;
pub mod regime;

pub use regime::TaxEngine;
