mod bootstrap;
mod settings;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use settings::Settings;
use stats_data::reader::ingest;
use stats_data::report::Summary;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("task-stats v{} starting", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Diagnostics for malformed lines share stdout with the report and
    // always precede it.
    let (ledger, stats) = ingest(stdin.lock(), &mut out).context("Failed to ingest task records")?;

    tracing::info!(
        "Read {} data lines, rejected {}",
        stats.lines_read,
        stats.lines_rejected
    );

    Summary::from_ledger(&ledger)
        .write_to(&mut out)
        .context("Failed to write report")?;
    out.flush()?;

    Ok(())
}
