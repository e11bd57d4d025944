//! Plain-text self-assessment report for a computed result.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::{format_inr, format_percent_2dp, format_rate};
use crate::models::{AgeCategory, FilingCategory, TaxInput, TaxResult};

/// Who the report is for. Neither field changes the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    pub age_category: AgeCategory,
    pub filing_category: FilingCategory,
}

/// Renders a computation as a printable report via [`fmt::Display`].
#[derive(Debug, Clone)]
pub struct TaxReport<'a> {
    pub regime_name: &'a str,
    pub generated_on: NaiveDate,
    pub profile: TaxpayerProfile,
    pub input: &'a TaxInput,
    pub result: &'a TaxResult,
}

const RULE: &str = "------------------------------------------------------------";

impl fmt::Display for TaxReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Income Tax Self-Assessment Report")?;
        writeln!(f, "{}", self.regime_name)?;
        writeln!(f, "Generated on {}", self.generated_on.format("%d/%m/%Y"))?;
        writeln!(f, "{RULE}")?;

        row(f, "Age category", self.profile.age_category.label())?;
        row(f, "Filing status", self.profile.filing_category.label())?;
        writeln!(f, "{RULE}")?;

        row(f, "Annual income", &format_inr(self.input.gross_income))?;
        row(f, "Exemptions", &format_inr(self.input.exemptions))?;
        row(f, "Investments/Deductions", &format_inr(self.input.investments))?;
        row(f, "Adjusted income", &format_inr(self.result.gross_income))?;
        row(
            f,
            "Taxable income",
            &format_inr(self.result.display_taxable_income()),
        )?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "Tax Breakdown")?;
        if self.result.breakdown.is_empty() {
            writeln!(f, "  No tax payable")?;
        }
        for line in &self.result.breakdown {
            writeln!(
                f,
                "  {:<34} {:>6} {:>16}",
                line.label,
                format_rate(line.rate),
                format_inr(line.amount)
            )?;
        }
        writeln!(f, "{RULE}")?;

        row(f, "Total tax", &format_inr(self.result.total_tax))?;
        row(f, "Net income", &format_inr(self.result.net_income))?;
        row(
            f,
            "Effective tax rate",
            &format_percent_2dp(self.result.effective_rate),
        )
    }
}

fn row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &str,
) -> fmt::Result {
    writeln!(f, "{label:<26}{value:>34}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{RegimeConfig, TaxEngine};

    fn render(input: &TaxInput) -> String {
        let config = RegimeConfig::default();
        let engine = TaxEngine::new(&config).unwrap();
        let result = engine.compute_input(input);
        TaxReport {
            regime_name: &config.name,
            generated_on: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            profile: TaxpayerProfile {
                age_category: AgeCategory::BelowSixty,
                filing_category: FilingCategory::Individual,
            },
            input,
            result: &result,
        }
        .to_string()
    }

    #[test]
    fn report_lists_breakdown_in_engine_order() {
        let input = TaxInput::new(dec!(1200000), dec!(0), dec!(0)).unwrap();

        let report = render(&input);

        let deduction = report.find("Standard Deduction").unwrap();
        let first_slab = report.find("₹3,00,000 - ₹7,00,000").unwrap();
        let cess = report.find("Health & Education Cess (4%)").unwrap();
        assert!(deduction < first_slab && first_slab < cess);
    }

    #[test]
    fn report_shows_totals_and_profile() {
        let input = TaxInput::new(dec!(1200000), dec!(0), dec!(0)).unwrap();

        let report = render(&input);

        assert!(report.contains("New Tax Regime FY 2024-25"));
        assert!(report.contains("Generated on 31/01/2025"));
        assert!(report.contains("Below 60 years"));
        assert!(report.contains("₹71,500"));
        assert!(report.contains("₹11,28,500"));
        assert!(report.contains("5.96%"));
    }

    #[test]
    fn report_for_untaxed_income_says_so() {
        let input = TaxInput::new(dec!(60000), dec!(0), dec!(0)).unwrap();

        let report = render(&input);

        assert!(report.contains("No tax payable"));
        let expected_last = format!("{:<26}{:>34}", "Effective tax rate", "0.00%");
        assert_eq!(report.lines().last(), Some(expected_last.as_str()));
    }
}
