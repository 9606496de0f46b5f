//! Command-line entry point: analyzes one trace file and writes its six reports next to it.

use anyhow::{Context, Result};
use clap::Parser;
use latency_breakdown::LatencyBreakdown;
use std::path::PathBuf;

/// Ranks the queueing and handling events of traced requests by their mean latency contribution.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the line-delimited JSON trace file to process
    #[arg(long)]
    input_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let written = LatencyBreakdown::new()
        .analyze_file(&args.input_file)
        .with_context(|| format!("failed to analyze `{}`", args.input_file.display()))?;

    for path in written {
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
