use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::max;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxInputError {
    #[error("{field} must not be negative, found {value}")]
    Negative { field: &'static str, value: Decimal },
}

/// Amounts entered by the taxpayer, before any adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub gross_income: Decimal,
    /// HRA, LTA and similar exemptions.
    pub exemptions: Decimal,
    /// Investments and other deductions.
    pub investments: Decimal,
}

impl TaxInput {
    pub fn new(
        gross_income: Decimal,
        exemptions: Decimal,
        investments: Decimal,
    ) -> Result<Self, TaxInputError> {
        for (field, value) in [
            ("gross_income", gross_income),
            ("exemptions", exemptions),
            ("investments", investments),
        ] {
            if value < Decimal::ZERO {
                return Err(TaxInputError::Negative { field, value });
            }
        }

        Ok(Self {
            gross_income,
            exemptions,
            investments,
        })
    }

    /// Income fed to the slab computation: gross less exemptions and
    /// investments, never below zero.
    pub fn adjusted_income(&self) -> Decimal {
        max(
            self.gross_income
                .saturating_sub(self.exemptions)
                .saturating_sub(self.investments),
            Decimal::ZERO,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    BelowSixty,
    SixtyToEighty,
    AboveEighty,
}

impl AgeCategory {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..60 => Self::BelowSixty,
            60..=80 => Self::SixtyToEighty,
            _ => Self::AboveEighty,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BelowSixty => "Below 60 years",
            Self::SixtyToEighty => "60-80 years",
            Self::AboveEighty => "Above 80 years",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingCategory {
    #[default]
    Individual,
    Huf,
    Business,
}

impl FilingCategory {
    pub fn all() -> &'static [FilingCategory] {
        &[Self::Individual, Self::Huf, Self::Business]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Huf => "huf",
            Self::Business => "business",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Some(Self::Individual),
            "huf" => Some(Self::Huf),
            "business" => Some(Self::Business),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Huf => "HUF (Hindu Undivided Family)",
            Self::Business => "Business",
        }
    }
}

impl fmt::Display for FilingCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
