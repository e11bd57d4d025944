//! Command handlers. Each returns the text to print on stdout.

use std::fmt::Write as _;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tax_core::format::{format_inr, format_percent_2dp, format_rate};
use tax_core::{
    FilingHistory, FilingRecord, RegimeConfig, TaxEngine, TaxInput, TaxReport, TaxResult,
    TaxpayerProfile,
};
use tracing::{debug, info};

use crate::cli::{CalculateArgs, Command, HistoryArgs};
use crate::form::TaxForm;

/// Everything `calculate --json` prints.
#[derive(Debug, Serialize)]
pub struct CalculationOutput<'a> {
    pub regime: &'a str,
    pub profile: TaxpayerProfile,
    pub input: &'a TaxInput,
    pub result: &'a TaxResult,
}

pub struct App {
    config: RegimeConfig,
    history: Box<dyn FilingHistory>,
}

impl App {
    /// # Errors
    /// Fails when `config` does not describe a valid regime.
    pub fn new(
        config: RegimeConfig,
        history: Box<dyn FilingHistory>,
    ) -> Result<Self> {
        config
            .validate()
            .with_context(|| format!("regime '{}' is invalid", config.name))?;
        Ok(Self { config, history })
    }

    pub async fn run(
        &self,
        command: &Command,
        today: NaiveDate,
    ) -> Result<String> {
        match command {
            Command::Calculate(args) => self.calculate(args, today).await,
            Command::History(args) => self.history(args).await,
            Command::Slabs => Ok(self.slabs()),
        }
    }

    pub async fn calculate(
        &self,
        args: &CalculateArgs,
        today: NaiveDate,
    ) -> Result<String> {
        let form = TaxForm {
            annual_income: args.income.clone().unwrap_or_default(),
            age: args.age.clone().unwrap_or_default(),
            exemptions: args.exemptions.clone().unwrap_or_default(),
            investments: args.investments.clone().unwrap_or_default(),
            filing_status: args.filing_status.clone(),
        };
        let validated = form.validate()?;

        if args.delay_ms > 0 {
            info!("calculating...");
            tokio::time::sleep(Duration::from_millis(args.delay_ms)).await;
        }

        let engine = TaxEngine::new(&self.config)?;
        let result = engine.compute_input(&validated.input);
        info!(
            total_tax = %result.total_tax,
            lines = result.breakdown.len(),
            "calculation complete"
        );

        if let Some(path) = &args.report {
            let report = TaxReport {
                regime_name: &self.config.name,
                generated_on: today,
                profile: validated.profile,
                input: &validated.input,
                result: &result,
            };
            std::fs::write(path, report.to_string())
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }

        if args.json {
            let output = CalculationOutput {
                regime: &self.config.name,
                profile: validated.profile,
                input: &validated.input,
                result: &result,
            };
            return serde_json::to_string_pretty(&output).context("failed to encode result");
        }

        Ok(render_result(&result))
    }

    pub async fn history(
        &self,
        args: &HistoryArgs,
    ) -> Result<String> {
        let records = match (&args.id, args.status) {
            (Some(id), _) => vec![self.history.get_record(id).await?],
            (None, Some(status)) => self.history.list_by_status(status).await?,
            (None, None) => self.history.list_records().await?,
        };
        debug!(count = records.len(), "loaded filing records");

        if args.json {
            return serde_json::to_string_pretty(&records).context("failed to encode records");
        }

        Ok(render_history(&records))
    }

    pub fn slabs(&self) -> String {
        let config = &self.config;
        let mut out = String::new();

        let _ = writeln!(out, "{}", config.name);
        for slab in &config.slabs {
            let range = match slab.max_income {
                Some(max) => format!("{} - {}", format_inr(slab.min_income), format_inr(max)),
                None => format!("{}+", format_inr(slab.min_income)),
            };
            let _ = writeln!(out, "  {range:<28}{:>6}", format_rate(slab.rate));
        }
        let _ = writeln!(
            out,
            "Standard deduction: {}",
            format_inr(config.standard_deduction)
        );
        let _ = writeln!(
            out,
            "Rebate: up to {} while taxable income <= {}",
            format_inr(config.rebate_ceiling),
            format_inr(config.rebate_income_limit)
        );
        let _ = write!(out, "Cess: {}", format_rate(config.cess_rate));
        out
    }
}

/// Results card: totals, breakdown in engine order, effective rate.
pub fn render_result(result: &TaxResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Total Tax:      {}", format_inr(result.total_tax));
    let _ = writeln!(out, "Net Income:     {}", format_inr(result.net_income));
    let _ = writeln!(
        out,
        "Taxable Income: {}",
        format_inr(result.display_taxable_income())
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Tax Breakdown");
    for line in &result.breakdown {
        let _ = writeln!(
            out,
            "  {:<34} {:>6} {:>14}",
            line.label,
            format_rate(line.rate),
            format_inr(line.amount)
        );
    }
    let _ = writeln!(out);
    let _ = write!(
        out,
        "Effective Tax Rate: {}",
        format_percent_2dp(result.effective_rate)
    );
    out
}

pub fn render_history(records: &[FilingRecord]) -> String {
    if records.is_empty() {
        return "No filing records".to_string();
    }

    records
        .iter()
        .map(|record| {
            format!(
                "{:<11}{:<11}Income {:<14}Tax Paid {:<12}Date {}",
                record.filing_year,
                record.status.as_str().to_uppercase(),
                format_inr(record.income),
                format_inr(record.tax),
                record.filed_on.format("%-d/%-m/%Y")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
