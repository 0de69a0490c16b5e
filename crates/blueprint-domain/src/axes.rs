//! Axes module - coarse descriptors of a document set

use serde::{Deserialize, Serialize};

/// Timescale class of a document set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timescale {
    /// Time-reference words are present
    Mid,

    /// No time reference found
    #[default]
    Long,
}

impl Timescale {
    /// Get the timescale name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Timescale::Mid => "mid",
            Timescale::Long => "long",
        }
    }
}

/// Set-level descriptors of a document collection
///
/// One instance per document set, recomputed on every extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    /// Lexical diversity proxy in [0.0, 1.0]
    pub abstractness: f64,

    /// 1.0 when a cause word is present, otherwise the 0.3 default
    pub causal_density: f64,

    /// Timescale class
    pub timescale: Timescale,
}

impl Axes {
    /// Causal density reported when cause words are present
    pub const CAUSAL_PRESENT: f64 = 1.0;

    /// Causal density reported when no cause words are found
    pub const CAUSAL_DEFAULT: f64 = 0.3;

    /// Number of elements the axes contribute to a blueprint's size
    pub const ELEMENT_COUNT: usize = 3;
}

impl Default for Axes {
    /// Axes of an empty document set
    fn default() -> Self {
        Self {
            abstractness: 0.0,
            causal_density: Self::CAUSAL_DEFAULT,
            timescale: Timescale::Long,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axes() {
        let axes = Axes::default();
        assert_eq!(axes.abstractness, 0.0);
        assert_eq!(axes.causal_density, 0.3);
        assert_eq!(axes.timescale, Timescale::Long);
    }

    #[test]
    fn test_timescale_serde() {
        assert_eq!(serde_json::to_string(&Timescale::Mid).unwrap(), "\"mid\"");
        assert_eq!(Timescale::Long.as_str(), "long");
    }
}
