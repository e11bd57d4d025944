use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tax_core::FilingRecordStatus;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Income tax calculator for the new Indian tax regime.
///
/// Computes slab tax with standard deduction, 87A rebate and cess, and
/// lists past filings.
#[derive(Debug, Parser)]
#[command(name = "itax", version, about, long_about = None)]
pub struct Cli {
    /// Log filter: a level (`debug`) or full directive. Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML regime file replacing the built-in FY 2024-25 regime.
    #[arg(long, global = true)]
    pub regime: Option<PathBuf>,

    /// CSV slab table replacing the regime's slabs.
    #[arg(long, global = true)]
    pub slabs: Option<PathBuf>,

    /// Which slab set to take from the `--slabs` file.
    #[arg(long, global = true, default_value = "new-2024-25")]
    pub slab_set: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute tax for one income.
    Calculate(CalculateArgs),

    /// List past filings.
    History(HistoryArgs),

    /// Print the active slab table and policy constants.
    Slabs,
}

#[derive(Debug, Args)]
pub struct CalculateArgs {
    /// Annual income in rupees, e.g. 1200000 or 12,00,000.
    #[arg(long)]
    pub income: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<String>,

    /// Exemptions such as HRA or LTA.
    #[arg(long)]
    pub exemptions: Option<String>,

    /// Investments and other deductions (80C, 80D, ...).
    #[arg(long)]
    pub investments: Option<String>,

    /// individual, huf or business.
    #[arg(long, default_value = "individual")]
    pub filing_status: String,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Pause before computing, in milliseconds.
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Write a plain-text report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Only show records with this status (completed, pending, draft).
    #[arg(long, value_parser = parse_status)]
    pub status: Option<FilingRecordStatus>,

    /// Show a single record.
    #[arg(long, conflicts_with = "status")]
    pub id: Option<String>,

    /// Print records as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_status(s: &str) -> Result<FilingRecordStatus, String> {
    FilingRecordStatus::parse(s)
        .ok_or_else(|| format!("unknown status '{s}' (expected completed, pending or draft)"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_calculate_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "itax",
            "calculate",
            "--income",
            "12,00,000",
            "--age",
            "30",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.slab_set, "new-2024-25");
        let Command::Calculate(args) = cli.command else {
            panic!("expected calculate");
        };
        assert_eq!(args.income.as_deref(), Some("12,00,000"));
        assert_eq!(args.filing_status, "individual");
        assert_eq!(args.delay_ms, 0);
        assert!(!args.json);
    }

    #[test]
    fn history_status_is_parsed() {
        let cli = Cli::try_parse_from(["itax", "history", "--status", "draft"]).unwrap();

        let Command::History(args) = cli.command else {
            panic!("expected history");
        };
        assert_eq!(args.status, Some(FilingRecordStatus::Draft));
    }

    #[test]
    fn history_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["itax", "history", "--status", "lost"]).is_err());
    }
}
