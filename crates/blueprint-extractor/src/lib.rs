//! Blueprint Extractor
//!
//! Converts free-text documents into blueprints with a deliberately
//! approximate lexical heuristic.
//!
//! # Overview
//!
//! The extractor is the ingestion pathway of the engine. It never fails on
//! text: malformed or empty input degrades to an empty claim set with
//! default axes.
//!
//! # Architecture
//!
//! ```text
//! Text → Segmenter → Tokenizer → Triplets → Typer → Claims → Gatekeeper → Blueprint
//!   └──────────────────────→ Axes ──────────────────────────────────────↗
//! ```
//!
//! # Key Features
//!
//! - **Sentence segmentation** on `。.!?` across mixed scripts
//! - **Triplet extraction** from verb-cue windows with a first/last fallback
//! - **Relation typing** with fixed precedence causes > includes > precedes
//! - **Axes estimation** over the whole document set
//! - **Structural size** (`|R|_struct`) for compression metrics
//! - **Parallel extraction** across documents with order-preserving merge
//!
//! # Example Usage
//!
//! ```
//! use blueprint_domain::RelationType;
//! use blueprint_extractor::{build_blueprint, structural_size};
//!
//! let documents = [
//!     "Rain fell because the drain is blocked.",
//!     "Therefore the street flooded.",
//! ];
//!
//! let bp = build_blueprint(&documents);
//! assert!(bp.claims.len() >= 2);
//! assert!(bp.claims.iter().any(|c| c.relation == RelationType::Causes));
//! assert!(structural_size(&documents) >= bp.claims.len());
//! ```

#![warn(missing_docs)]

mod axes;
mod config;
mod error;
mod extractor;
mod segmenter;
mod tokenizer;
mod triplet;
mod typer;

#[cfg(test)]
mod tests;

pub use axes::{estimate_axes, ABSTRACTNESS_SCALE};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{Extractor, EXTRACTED_CONFIDENCE};
pub use segmenter::{split_sentences, SENTENCE_DELIMITERS};
pub use tokenizer::tokenize;
pub use triplet::{extract_triplets, triplets_from_tokens, RawTriplet, RELATION_PLACEHOLDER};
pub use typer::type_relation;

use blueprint_domain::Blueprint;

/// Build a blueprint with the default configuration
pub fn build_blueprint<S>(documents: &[S]) -> Blueprint
where
    S: AsRef<str> + Sync,
{
    Extractor::default().build_blueprint(documents)
}

/// Raw triplet count of a document set with the default lexicon, floored at 1
pub fn structural_size<S: AsRef<str>>(documents: &[S]) -> usize {
    Extractor::default().structural_size(documents)
}
