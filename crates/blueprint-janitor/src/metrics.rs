//! Metrics collected during pruning sweeps

use crate::JanitorError;
use blueprint_domain::Blueprint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Compression ratio of a blueprint against the raw structural size
///
/// `clamp(1 − size(bp) / max(1, r_struct), 0, 1)`; a blueprint at least as
/// large as the raw structure compresses nothing.
pub fn compression_ratio(blueprint: &Blueprint, r_struct: usize) -> f64 {
    let denominator = r_struct.max(1) as f64;
    (1.0 - blueprint.size() as f64 / denominator).clamp(0.0, 1.0)
}

/// Round to two decimal places, as reported in sweep results
///
/// Ties go to the even neighbour, so 0.625 reports as 0.62.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// One pruning ratio's outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Pruning ratio
    pub p: f64,

    /// Compression ratio, rounded to 2 decimals
    #[serde(rename = "CR")]
    pub cr: f64,

    /// Structural Preservation against the unpruned blueprint, rounded to 2 decimals
    #[serde(rename = "SP")]
    pub sp: f64,

    /// Claim count of the pruned blueprint
    #[serde(rename = "BP_size")]
    pub bp_size: usize,
}

/// Descriptive labels attached to a sweep report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepMeta {
    /// Experiment name
    pub experiment: String,

    /// Granularity label
    pub grain: String,

    /// Anchor set label
    pub anchors: String,

    /// Seeds the sweep was run with
    pub seeds: Vec<u64>,
}

impl Default for SweepMeta {
    fn default() -> Self {
        Self {
            experiment: "N-P-struct".to_string(),
            grain: "L2".to_string(),
            anchors: "sft_basic".to_string(),
            seeds: vec![1],
        }
    }
}

/// Full output of a pruning sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Labels
    pub meta: SweepMeta,

    /// One row per ratio, in sweep order
    pub results: Vec<SweepResult>,
}

impl SweepReport {
    /// Create an empty report
    pub fn new(meta: SweepMeta) -> Self {
        Self {
            meta,
            results: Vec::new(),
        }
    }

    /// Record one ratio's outcome
    pub fn record(&mut self, result: SweepResult) {
        self.results.push(result);
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, JanitorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), JanitorError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load a report previously written by [`SweepReport::save`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JanitorError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a plain-text summary of the sweep
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Sweep: {} ({})", self.meta.experiment, self.meta.grain),
            "p\tCR\tSP\tBP_size".to_string(),
        ];

        for row in &self.results {
            lines.push(format!(
                "{:.2}\t{:.2}\t{:.2}\t{}",
                row.p, row.cr, row.sp, row.bp_size
            ));
        }

        lines.join("\n")
    }
}
