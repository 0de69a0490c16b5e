//! Set-level axes estimation

use crate::tokenizer::tokenize;
use blueprint_domain::{Axes, CueCategory, Lexicon, Timescale};
use std::collections::HashSet;

/// Weight applied to the unique/total token ratio before saturating at 1.0
pub const ABSTRACTNESS_SCALE: f64 = 1.5;

/// Estimate the axes of a document set
///
/// The documents are joined with single spaces and treated as one text:
///
/// - `abstractness = min(1, unique / max(1, total) · 1.5)`
/// - `causal_density` is 1.0 when any cause word occurs, else 0.3
/// - `timescale` is `mid` when any time word occurs, else `long`
pub fn estimate_axes<S: AsRef<str>>(documents: &[S], lexicon: &Lexicon) -> Axes {
    let joined = documents
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    let tokens = tokenize(&joined);
    let unique = tokens.iter().collect::<HashSet<_>>().len();
    let total = tokens.len().max(1);
    let abstractness = (unique as f64 / total as f64 * ABSTRACTNESS_SCALE).min(1.0);

    let lowered = joined.to_lowercase();
    let causal_density = if lexicon.matches_lowercased(CueCategory::Cause, &lowered) {
        Axes::CAUSAL_PRESENT
    } else {
        Axes::CAUSAL_DEFAULT
    };
    let timescale = if lexicon.matches_lowercased(CueCategory::Time, &lowered) {
        Timescale::Mid
    } else {
        Timescale::Long
    };

    Axes {
        abstractness,
        causal_density,
        timescale,
    }
}
