//! Size command implementation.

use super::read_documents;
use crate::cli::DocumentArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use blueprint_extractor::Extractor;

/// Execute the size command.
pub fn execute_size(args: DocumentArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let documents = read_documents(&args)?;
    let r_struct = Extractor::new(config.extractor.clone()).structural_size(&documents);

    println!("{}", formatter.format_size(r_struct, documents.len())?);
    Ok(())
}
