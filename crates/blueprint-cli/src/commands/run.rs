//! Run command implementation.

use super::read_documents;
use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use blueprint_extractor::Extractor;
use blueprint_janitor::{Janitor, Sweep, SweepReport};
use tracing::info;

/// Execute the run command: sweep, persist metrics, print the summary.
pub fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let documents = read_documents(&args.documents)?;
    let ratios = args
        .ratios
        .unwrap_or_else(|| config.experiment.ratios.clone());
    let output = args
        .output
        .unwrap_or_else(|| config.experiment.output.clone());

    let report = run_sweep(&documents, &ratios, config)?;
    report.save(&output)?;
    info!("Metrics written to {}", output.display());

    println!("{}", formatter.format_sweep(&report)?);
    Ok(())
}

/// Run the configured sweep over in-memory documents.
pub fn run_sweep(documents: &[String], ratios: &[f64], config: &Config) -> Result<SweepReport> {
    let sweep = Sweep::new(
        Extractor::new(config.extractor.clone()),
        Janitor::new(config.janitor.clone()),
        config.experiment.meta.clone(),
    );
    Ok(sweep.run(documents, ratios)?)
}
