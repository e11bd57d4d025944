//! Slab-based income tax under the new regime.
//!
//! # Computation order
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Taxable income = income − standard deduction (minimum 0) |
//! | 2    | Tax per slab on the portion of taxable income inside it |
//! | 3    | Rebate (up to the ceiling) while taxable income ≤ the rebate limit |
//! | 4    | Cess on tax after rebate |
//! | 5    | Round total tax and net income to the rupee |
//!
//! Reordering the steps changes the result, so the breakdown is emitted in
//! exactly this order.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{RegimeConfig, TaxEngine};
//!
//! let config = RegimeConfig::new_regime_fy_2024_25();
//! let engine = TaxEngine::new(&config).unwrap();
//! let result = engine.compute(dec!(1200000));
//!
//! assert_eq!(result.taxable_income, dec!(1125000));
//! assert_eq!(result.total_tax, dec!(71500));
//! assert_eq!(result.net_income, dec!(1128500));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{max, round_to_rupee};
use crate::format::{format_inr, format_rate};
use crate::models::{
    Breakdown, BreakdownKind, BreakdownLine, RegimeConfig, RegimeConfigError, Slab, TaxInput,
    TaxResult,
};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Computes tax for a single, validated regime.
#[derive(Debug, Clone)]
pub struct TaxEngine<'a> {
    config: &'a RegimeConfig,
}

impl<'a> TaxEngine<'a> {
    /// Creates an engine after checking the regime's slab table and constants.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegimeConfigError`] found in `config`.
    pub fn new(config: &'a RegimeConfig) -> Result<Self, RegimeConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Computes tax on `income`, which must already be net of exemptions and
    /// investments.
    ///
    /// Callers are expected to pass a non-negative amount; a negative one
    /// yields a zero-tax result that echoes the input. Rates are scaled down
    /// before multiplying, so any amount up to `Decimal::MAX` is accepted.
    pub fn compute(
        &self,
        income: Decimal,
    ) -> TaxResult {
        let mut breakdown = Breakdown::default();

        let taxable_income = self.taxable_income(income);
        if let Some(line) = self.standard_deduction_line(income) {
            breakdown.push(line);
        }

        let slab_tax = self.slab_tax(taxable_income, &mut breakdown);

        let rebate = self.rebate(taxable_income, slab_tax);
        let tax_after_rebate = max(slab_tax - rebate, Decimal::ZERO);
        if rebate > Decimal::ZERO {
            breakdown.push(BreakdownLine {
                kind: BreakdownKind::Rebate,
                label: format!(
                    "Rebate u/s 87A (up to {})",
                    format_inr(self.config.rebate_ceiling)
                ),
                rate: Decimal::ZERO,
                amount: -rebate,
            });
        }

        let cess = tax_after_rebate * (self.config.cess_rate / HUNDRED);
        if cess > Decimal::ZERO {
            breakdown.push(BreakdownLine {
                kind: BreakdownKind::Cess,
                label: format!(
                    "Health & Education Cess ({})",
                    format_rate(self.config.cess_rate)
                ),
                rate: self.config.cess_rate,
                amount: cess,
            });
        }

        let tax = tax_after_rebate + cess;
        let effective_rate = if income > Decimal::ZERO {
            tax / income * HUNDRED
        } else {
            Decimal::ZERO
        };

        debug!(
            %income,
            %taxable_income,
            %slab_tax,
            %rebate,
            %cess,
            %tax,
            lines = breakdown.len(),
            "computed tax"
        );

        TaxResult {
            gross_income: income,
            taxable_income,
            standard_deduction: self.config.standard_deduction,
            total_tax: round_to_rupee(tax),
            net_income: round_to_rupee(income - tax),
            effective_rate,
            breakdown,
        }
    }

    /// Applies exemptions and investments, then computes tax.
    pub fn compute_input(
        &self,
        input: &TaxInput,
    ) -> TaxResult {
        self.compute(input.adjusted_income())
    }

    fn taxable_income(
        &self,
        income: Decimal,
    ) -> Decimal {
        max(income - self.config.standard_deduction, Decimal::ZERO)
    }

    fn standard_deduction_line(
        &self,
        income: Decimal,
    ) -> Option<BreakdownLine> {
        let deduction = self.config.standard_deduction;
        (deduction > Decimal::ZERO && income > deduction).then(|| BreakdownLine {
            kind: BreakdownKind::StandardDeduction,
            label: "Standard Deduction".to_string(),
            rate: Decimal::ZERO,
            amount: -deduction,
        })
    }

    /// Sums the tax of every slab, appending a line for each slab that
    /// contributes a nonzero amount.
    fn slab_tax(
        &self,
        taxable_income: Decimal,
        breakdown: &mut Breakdown,
    ) -> Decimal {
        let mut total = Decimal::ZERO;

        for (index, slab) in self.config.slabs.iter().enumerate() {
            if taxable_income <= slab.min_income {
                break;
            }

            let tax = slab.portion_of(taxable_income) * (slab.rate / HUNDRED);
            total += tax;

            if tax > Decimal::ZERO {
                breakdown.push(BreakdownLine {
                    kind: BreakdownKind::Slab { index },
                    label: slab_label(slab),
                    rate: slab.rate,
                    amount: tax,
                });
            }
        }

        total
    }

    fn rebate(
        &self,
        taxable_income: Decimal,
        tax: Decimal,
    ) -> Decimal {
        if taxable_income <= self.config.rebate_income_limit {
            tax.min(self.config.rebate_ceiling)
        } else {
            Decimal::ZERO
        }
    }
}

fn slab_label(slab: &Slab) -> String {
    match slab.max_income {
        Some(max) => format!("{} - {}", format_inr(slab.min_income), format_inr(max)),
        None => format!("{}+", format_inr(slab.min_income)),
    }
}
