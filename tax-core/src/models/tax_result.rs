use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a breakdown line accounts for.
///
/// Variants are declared in display order; a [`Breakdown`] never holds a
/// line whose kind sorts before the previous line's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BreakdownKind {
    StandardDeduction,
    /// Tax on the part of income inside the slab at `index`.
    Slab { index: usize },
    Rebate,
    Cess,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub kind: BreakdownKind,
    pub label: String,
    /// Percentage shown next to the line; zero for deductions and rebates.
    pub rate: Decimal,
    /// Signed amount: deductions and rebates are negative.
    pub amount: Decimal,
}

/// Ordered line items of a computation.
///
/// Only the engine appends to it, always in the order standard deduction,
/// slabs (ascending), rebate, cess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown(Vec<BreakdownLine>);

impl Breakdown {
    pub(crate) fn push(
        &mut self,
        line: BreakdownLine,
    ) {
        debug_assert!(
            self.0.last().is_none_or(|prev| prev.kind < line.kind),
            "breakdown line {:?} out of order",
            line.kind
        );
        self.0.push(line);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BreakdownLine> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn find(
        &self,
        kind: BreakdownKind,
    ) -> Option<&BreakdownLine> {
        self.0.iter().find(|line| line.kind == kind)
    }
}

impl<'a> IntoIterator for &'a Breakdown {
    type Item = &'a BreakdownLine;
    type IntoIter = std::slice::Iter<'a, BreakdownLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of one tax computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Income the engine was given (already net of exemptions and investments).
    pub gross_income: Decimal,

    /// Income left after the standard deduction, never negative.
    pub taxable_income: Decimal,

    /// Standard deduction of the regime the result was computed under.
    pub standard_deduction: Decimal,

    /// Total tax including cess, rounded to the nearest rupee.
    pub total_tax: Decimal,

    /// Gross income less unrounded total tax, rounded to the nearest rupee.
    pub net_income: Decimal,

    /// Unrounded total tax as a percentage of gross income.
    pub effective_rate: Decimal,

    pub breakdown: Breakdown,
}

impl TaxResult {
    /// Taxable income re-expressed inclusive of the standard deduction, as
    /// shown on the results card.
    pub fn display_taxable_income(&self) -> Decimal {
        self.taxable_income + self.standard_deduction
    }
}
