//! Validation of the calculator form as entered by the user.

use std::fmt;

use rust_decimal::Decimal;
use tax_core::{AgeCategory, FilingCategory, TaxInput, TaxInputError, TaxpayerProfile};
use thiserror::Error;

use crate::utils::parse_amount;

const MAX_AGE: u32 = 150;

/// Largest amount accepted in any field: ₹100 lakh crore.
const MAX_AMOUNT_RUPEES: i64 = 1_000_000_000_000_000;

fn within_limit(amount: Decimal) -> bool {
    amount <= Decimal::from(MAX_AMOUNT_RUPEES)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("annual income is required")]
    MissingIncome,

    #[error("annual income '{0}' is not a valid amount greater than zero")]
    InvalidIncome(String),

    #[error("age is required")]
    MissingAge,

    #[error("age '{0}' is not a valid age")]
    InvalidAge(String),

    #[error("{field} '{value}' is not a valid amount")]
    InvalidAmount { field: &'static str, value: String },

    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },

    #[error("unknown filing status '{0}' (expected individual, huf or business)")]
    UnknownFilingCategory(String),

    #[error(transparent)]
    Input(#[from] TaxInputError),
}

/// Every problem found in one submission, in field order.
#[derive(Debug, PartialEq, Eq)]
pub struct FormErrors(pub Vec<FormError>);

impl fmt::Display for FormErrors {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Invalid Input: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// Raw field values, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct TaxForm {
    pub annual_income: String,
    pub age: String,
    pub exemptions: String,
    pub investments: String,
    pub filing_status: String,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    pub input: TaxInput,
    pub age: u32,
    pub profile: TaxpayerProfile,
}

impl TaxForm {
    /// Checks every field and returns either the parsed form or all errors.
    ///
    /// Income and age are required and must be positive. Exemptions and
    /// investments default to zero when left empty. An empty filing status
    /// means individual.
    pub fn validate(&self) -> Result<ValidatedForm, FormErrors> {
        let mut errors = Vec::new();

        let income = match parse_amount(&self.annual_income) {
            Ok(Some(value)) if value > Decimal::ZERO && within_limit(value) => Some(value),
            Ok(None) => {
                errors.push(FormError::MissingIncome);
                None
            }
            _ => {
                errors.push(FormError::InvalidIncome(self.annual_income.trim().to_string()));
                None
            }
        };

        let age = self.parse_age(&mut errors);
        let exemptions = optional_amount("exemptions", &self.exemptions, &mut errors);
        let investments = optional_amount("investments", &self.investments, &mut errors);

        let filing_category = if self.filing_status.trim().is_empty() {
            Some(FilingCategory::default())
        } else {
            let parsed = FilingCategory::parse(&self.filing_status);
            if parsed.is_none() {
                errors.push(FormError::UnknownFilingCategory(
                    self.filing_status.trim().to_string(),
                ));
            }
            parsed
        };

        match (income, age, exemptions, investments, filing_category) {
            (Some(income), Some(age), Some(exemptions), Some(investments), Some(filing_category))
                if errors.is_empty() =>
            {
                let input = TaxInput::new(income, exemptions, investments)
                    .map_err(|err| FormErrors(vec![err.into()]))?;
                Ok(ValidatedForm {
                    input,
                    age,
                    profile: TaxpayerProfile {
                        age_category: AgeCategory::from_age(age),
                        filing_category,
                    },
                })
            }
            _ => Err(FormErrors(errors)),
        }
    }

    fn parse_age(
        &self,
        errors: &mut Vec<FormError>,
    ) -> Option<u32> {
        let raw = self.age.trim();
        if raw.is_empty() {
            errors.push(FormError::MissingAge);
            return None;
        }
        match raw.parse::<u32>() {
            Ok(age) if (1..=MAX_AGE).contains(&age) => Some(age),
            _ => {
                errors.push(FormError::InvalidAge(raw.to_string()));
                None
            }
        }
    }
}

fn optional_amount(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FormError>,
) -> Option<Decimal> {
    match parse_amount(value) {
        Ok(None) => Some(Decimal::ZERO),
        Ok(Some(amount)) if amount < Decimal::ZERO => {
            errors.push(FormError::NegativeAmount { field });
            None
        }
        Ok(Some(amount)) if within_limit(amount) => Some(amount),
        Ok(Some(_)) | Err(_) => {
            errors.push(FormError::InvalidAmount {
                field,
                value: value.trim().to_string(),
            });
            None
        }
    }
}
