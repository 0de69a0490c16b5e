//! Extract command implementation.

use super::read_documents;
use crate::cli::DocumentArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use blueprint_extractor::Extractor;

/// Execute the extract command.
pub fn execute_extract(args: DocumentArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let documents = read_documents(&args)?;
    let extractor = Extractor::new(config.extractor.clone());
    let blueprint = extractor.build_blueprint(&documents);

    println!("{}", formatter.format_blueprint(&blueprint)?);
    Ok(())
}
