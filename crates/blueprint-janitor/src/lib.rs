//! Blueprint Janitor
//!
//! Pruning stand-in and compression metrics for blueprint experiments.
//!
//! # Overview
//!
//! The Janitor is responsible for:
//! - **Pruning**: shrinking a blueprint's claim set as a pruning ratio grows
//! - **Compression metrics**: relating blueprint size to raw structural size
//! - **Sweeps**: scoring pruned blueprints against the unpruned baseline
//! - **Persistence**: writing sweep reports as JSON
//!
//! # Pruning Law
//!
//! | Ratio | Claims kept (of `n`) |
//! |-------|----------------------|
//! | **0.0** | `n` |
//! | **0.4** | `floor(0.64 · n)` |
//! | **0.8** | `floor(0.28 · n)` |
//! | **1.0** | `max(1, floor(0.1 · n))` |
//!
//! Leading claims are kept; axes and constraints carry over unchanged.
//!
//! # Usage
//!
//! ## One-off Prune
//!
//! ```
//! use blueprint_extractor::build_blueprint;
//! use blueprint_janitor::pruning_transform;
//!
//! let bp = build_blueprint(&["Rain fell because the drain is blocked."]);
//! let pruned = pruning_transform(&bp, 1.0);
//! assert_eq!(pruned.claims.len(), 1);
//! ```
//!
//! ## Sweep
//!
//! ```no_run
//! use blueprint_janitor::{Sweep, DEFAULT_RATIOS};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let docs = std::fs::read_to_string("corpus.txt")?;
//! let report = Sweep::default().run(&[docs], &DEFAULT_RATIOS)?;
//!
//! report.save("outputs/C1/metrics.json")?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The Janitor can be configured via TOML:
//!
//! ```toml
//! [janitor]
//! retention_slope = 0.9
//! min_claims = 1
//! recheck_constraints = false
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod janitor;
mod metrics;
mod sweep;

pub use config::JanitorConfig;
pub use error::JanitorError;
pub use janitor::{pruning_transform, Janitor};
pub use metrics::{compression_ratio, round2, SweepMeta, SweepReport, SweepResult};
pub use sweep::{Sweep, DEFAULT_RATIOS};
