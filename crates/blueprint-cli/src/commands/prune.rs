//! Prune command implementation.

use super::load_blueprint;
use crate::cli::PruneArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use blueprint_domain::Blueprint;
use blueprint_janitor::Janitor;
use std::fs;
use std::path::Path;

/// Execute the prune command.
///
/// The pruned blueprint is always emitted as JSON so it can be fed back
/// into `compare`.
pub fn execute_prune(args: PruneArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let blueprint = load_blueprint(&args.blueprint)?;
    let pruned = Janitor::new(config.janitor.clone()).prune(&blueprint, args.ratio);

    match args.output {
        Some(path) => {
            write_blueprint(&pruned, &path)?;
            eprintln!(
                "{}",
                formatter.success(&format!(
                    "Kept {}/{} claims, written to {}",
                    pruned.claims.len(),
                    blueprint.claims.len(),
                    path.display()
                ))
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&pruned)?),
    }

    Ok(())
}

/// Write a blueprint as pretty JSON, creating parent directories.
fn write_blueprint(blueprint: &Blueprint, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(blueprint)?)?;
    Ok(())
}
