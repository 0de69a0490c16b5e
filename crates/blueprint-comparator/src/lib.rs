//! Blueprint Comparator
//!
//! Scores how much structure survives a transformation of a blueprint.
//!
//! Structural Preservation (SP) blends two terms with equal weight:
//!
//! - **edge Jaccard** over the sets of typed `(subject, relation, object)` edges
//! - **path F1** over the sets of 2-hop paths `(a, b, c)`
//!
//! Both terms short-circuit to 1.0 when there is nothing to compare, so
//! the score is always defined and lies in `[0, 1]`.
//!
//! # Examples
//!
//! ```
//! use blueprint_comparator::structural_similarity;
//! use blueprint_extractor::build_blueprint;
//!
//! let bp = build_blueprint(&["Rain fell because the drain is blocked."]);
//! assert_eq!(structural_similarity(&bp, &bp), 1.0);
//! ```

#![warn(missing_docs)]

mod paths;
mod similarity;

pub use paths::{two_hop_paths, Path};
pub use similarity::{
    compare, edge_jaccard, path_f1, structural_similarity, SimilarityReport, EDGE_WEIGHT,
    PATH_WEIGHT,
};
