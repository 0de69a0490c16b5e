//! Compare command implementation.

use super::load_blueprint;
use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::Formatter;
use blueprint_comparator::compare;

/// Execute the compare command.
pub fn execute_compare(args: CompareArgs, formatter: &Formatter) -> Result<()> {
    let baseline = load_blueprint(&args.baseline)?;
    let candidate = load_blueprint(&args.candidate)?;

    println!("{}", formatter.format_similarity(&compare(&baseline, &candidate))?);
    Ok(())
}
