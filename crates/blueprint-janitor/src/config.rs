//! Configuration for Janitor operations
//!
//! Defines how aggressively the pruning stand-in drops claims.

use crate::JanitorError;
use serde::{Deserialize, Serialize};

/// Configuration for the Janitor
///
/// A pruning ratio `p` keeps `max(min_claims, floor(n · (1 − retention_slope · p)))`
/// of `n` claims, never more than `n`.
///
/// # Examples
///
/// ```
/// use blueprint_janitor::JanitorConfig;
///
/// let config = JanitorConfig::default();
/// assert_eq!(config.retention_slope, 0.9);
/// assert_eq!(config.min_claims, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JanitorConfig {
    /// Fraction of claims dropped at ratio 1.0
    /// Default: 0.9 (a fully pruned blueprint keeps a tenth of its claims)
    pub retention_slope: f64,

    /// Lower bound on kept claims for a non-empty blueprint
    /// Default: 1
    pub min_claims: usize,

    /// Re-check constraints over the kept claims instead of carrying them over
    /// Default: false
    pub recheck_constraints: bool,
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            retention_slope: 0.9,
            min_claims: 1,
            recheck_constraints: false,
        }
    }
}

impl JanitorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), JanitorError> {
        if !(0.0..=1.0).contains(&self.retention_slope) {
            return Err(JanitorError::Config(format!(
                "retention_slope {} must be within [0.0, 1.0]",
                self.retention_slope
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, JanitorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, JanitorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
