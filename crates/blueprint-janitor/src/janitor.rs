//! Core Janitor implementation: the pruning stand-in

use crate::JanitorConfig;
use blueprint_domain::Blueprint;
use blueprint_gatekeeper::check_constraints;
use tracing::{debug, warn};

// Absorbs representation error so that e.g. 20 · 0.1 keeps 2 claims, not 1.
const FLOOR_TOLERANCE: f64 = 1e-9;

/// Pruning stand-in that shrinks a blueprint's claim set
///
/// The only contract is monotonicity: a higher ratio never keeps more
/// claims. Leading claims are kept; axes are carried over unchanged.
///
/// # Examples
///
/// ```
/// use blueprint_extractor::build_blueprint;
/// use blueprint_janitor::Janitor;
///
/// let bp = build_blueprint(&["a b. c d. e f. g h"]);
/// let janitor = Janitor::default_config();
///
/// assert_eq!(janitor.prune(&bp, 0.0).claims.len(), 4);
/// assert_eq!(janitor.prune(&bp, 1.0).claims.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Janitor {
    config: JanitorConfig,
}

impl Janitor {
    /// Create a new Janitor with the given configuration
    pub fn new(config: JanitorConfig) -> Self {
        Self { config }
    }

    /// Create a Janitor with default configuration
    pub fn default_config() -> Self {
        Self::new(JanitorConfig::default())
    }

    /// Number of claims kept out of `total` at the given ratio
    pub fn retained_count(&self, total: usize, ratio: f64) -> usize {
        let ratio = clamp_ratio(ratio);
        let keep = 1.0 - self.config.retention_slope * ratio;
        let scaled = (total as f64 * keep + FLOOR_TOLERANCE).floor() as usize;

        scaled.max(self.config.min_claims).min(total)
    }

    /// Apply the pruning stand-in, returning a new blueprint
    pub fn prune(&self, blueprint: &Blueprint, ratio: f64) -> Blueprint {
        let kept = self.retained_count(blueprint.claims.len(), ratio);
        let claims = blueprint.claims[..kept].to_vec();

        let constraints = if self.config.recheck_constraints {
            check_constraints(&claims)
        } else {
            blueprint.constraints.clone()
        };

        debug!(
            "Pruned blueprint at ratio {}: kept {}/{} claims",
            ratio,
            kept,
            blueprint.claims.len()
        );

        Blueprint::new(blueprint.axes, claims, constraints)
    }
}

/// Clamp a ratio into `[0, 1]`, mapping NaN to 0
fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        warn!("Pruning ratio is NaN, using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&ratio) {
        warn!("Pruning ratio {} outside [0, 1], clamping", ratio);
    }
    ratio.clamp(0.0, 1.0)
}

/// Apply the pruning stand-in with the default configuration
///
/// Keeps the leading `max(1, floor(n · (1 − 0.9 · ratio)))` claims.
pub fn pruning_transform(blueprint: &Blueprint, ratio: f64) -> Blueprint {
    Janitor::default_config().prune(blueprint, ratio)
}
