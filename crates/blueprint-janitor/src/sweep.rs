//! Pruning sweep: extract once, prune at each ratio, score against the baseline

use crate::metrics::{compression_ratio, round2, SweepMeta, SweepReport, SweepResult};
use crate::{Janitor, JanitorError};
use blueprint_comparator::structural_similarity;
use blueprint_extractor::Extractor;
use tracing::{debug, info};

/// Ratios swept when none are given
pub const DEFAULT_RATIOS: [f64; 3] = [0.0, 0.4, 0.8];

/// Runs the pruning stand-in across a set of ratios
///
/// # Examples
///
/// ```
/// use blueprint_janitor::Sweep;
///
/// let docs = ["Rain fell because the drain is blocked.", "Therefore the street flooded."];
/// let report = Sweep::default().run(&docs, &[0.0, 0.8]).unwrap();
///
/// assert_eq!(report.results.len(), 2);
/// assert_eq!(report.results[0].sp, 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sweep {
    extractor: Extractor,
    janitor: Janitor,
    meta: SweepMeta,
}

impl Sweep {
    /// Create a sweep from its parts
    pub fn new(extractor: Extractor, janitor: Janitor, meta: SweepMeta) -> Self {
        Self {
            extractor,
            janitor,
            meta,
        }
    }

    /// Run the sweep over `documents` at each ratio, in the given order
    pub fn run<S>(&self, documents: &[S], ratios: &[f64]) -> Result<SweepReport, JanitorError>
    where
        S: AsRef<str> + Sync,
    {
        if ratios.is_empty() {
            return Err(JanitorError::InvalidSweep(
                "at least one pruning ratio is required".to_string(),
            ));
        }

        let r_struct = self.extractor.structural_size(documents);
        let baseline = self.extractor.build_blueprint(documents);
        info!(
            "Sweeping {} ratios over {} documents (|R|_struct = {}, {} baseline claims)",
            ratios.len(),
            documents.len(),
            r_struct,
            baseline.claims.len()
        );

        let mut report = SweepReport::new(self.meta.clone());
        for &p in ratios {
            let pruned = self.janitor.prune(&baseline, p);
            let result = SweepResult {
                p,
                cr: round2(compression_ratio(&pruned, r_struct)),
                sp: round2(structural_similarity(&baseline, &pruned)),
                bp_size: pruned.claims.len(),
            };
            debug!("p={} CR={} SP={} BP_size={}", p, result.cr, result.sp, result.bp_size);
            report.record(result);
        }

        Ok(report)
    }
}
