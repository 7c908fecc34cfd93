//! SELIC CLI — refresh the local SELIC dataset.
//!
//! Usage: `selic-refresh [OUTPUT]`
//!
//! Downloads the full SGS series, writes `OUTPUT` (default
//! `selic_atualizada.csv`) and prints a summary. Diagnostics go to stderr.

use anyhow::Result;
use clap::Parser;
use selic_core::config::DEFAULT_OUTPUT;
use selic_core::{refresh, RefreshConfig, StdoutReporter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "selic-refresh",
    version,
    about = "Download the SELIC series and write cumulative factors to CSV"
)]
struct Cli {
    /// Output file.
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<ExitCode> {
    init_logging()?;
    let cli = Cli::parse();

    let config = RefreshConfig::with_output(cli.output);
    if refresh(&config, &StdoutReporter) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_logging() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
