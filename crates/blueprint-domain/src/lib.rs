//! Blueprint Domain Layer
//!
//! This crate defines the plain value records shared by every other layer of
//! the blueprint engine. It carries no behaviour beyond construction,
//! formatting and small derived views; extraction, constraint checking and
//! comparison live in their own crates.
//!
//! ## Key Concepts
//!
//! - **Claim**: one typed subject–relation–object triplet extracted from a sentence
//! - **RelationType**: the closed set `causes`, `includes`, `precedes`
//! - **Axes**: coarse descriptors of a document set (abstractness, causal density, timescale)
//! - **Constraint**: a pass/fail acyclicity check over one relation's graph
//! - **Blueprint**: axes + claims + constraints for one document set
//! - **Lexicon**: the cue-word table driving every heuristic
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency, so records can be persisted
//! - No process-wide state; every record is immutable after construction
//! - Infrastructure and algorithms live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axes;
pub mod blueprint;
pub mod claim;
pub mod constraint;
pub mod lexicon;
pub mod relation;

// Re-exports for convenience
pub use axes::{Axes, Timescale};
pub use blueprint::{Blueprint, Edge};
pub use claim::{Claim, ClaimId};
pub use constraint::Constraint;
pub use lexicon::{CueCategory, Lexicon};
pub use relation::RelationType;
