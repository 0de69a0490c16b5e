//! Command implementations.

pub mod compare;
pub mod extract;
pub mod prune;
pub mod run;
pub mod size;

pub use self::compare::execute_compare;
pub use self::extract::execute_extract;
pub use self::prune::execute_prune;
pub use self::run::execute_run;
pub use self::size::execute_size;

use crate::cli::DocumentArgs;
use crate::error::{CliError, Result};
use blueprint_domain::Blueprint;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read documents from files, or a single document from stdin.
pub fn read_documents(args: &DocumentArgs) -> Result<Vec<String>> {
    if args.stdin {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(vec![text]);
    }

    if args.files.is_empty() {
        return Err(CliError::InvalidInput(
            "No documents given. Pass file paths or --stdin".to_string(),
        ));
    }

    args.files
        .iter()
        .map(|path| -> Result<String> {
            debug!("Reading document {}", path.display());
            Ok(fs::read_to_string(path)?)
        })
        .collect()
}

/// Load a blueprint previously written as JSON and check its invariants.
pub fn load_blueprint(path: &Path) -> Result<Blueprint> {
    let contents = fs::read_to_string(path)?;
    let blueprint: Blueprint = serde_json::from_str(&contents)?;
    blueprint
        .validate()
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    Ok(blueprint)
}
