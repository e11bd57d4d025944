use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::debug;

use tax_cli::{App, Cli, logging};
use tax_core::InMemoryFilingHistory;

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let config = tax_data::load_regime(cli.regime.as_deref(), cli.slabs.as_deref(), &cli.slab_set)
        .context("failed to load tax regime")?;
    debug!(regime = %config.name, slabs = config.slabs.len(), "regime loaded");

    let app = App::new(config, Box::new(InMemoryFilingHistory::sample()))?;
    let output = app.run(&cli.command, Local::now().date_naive()).await?;
    println!("{output}");

    Ok(())
}
