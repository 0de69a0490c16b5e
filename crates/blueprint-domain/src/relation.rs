//! Relation module - the closed set of canonical relation types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical relation carried by every claim
///
/// The declaration order is the canonical order used for constraints:
/// causes, includes, precedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationType {
    /// Subject causes object
    Causes,

    /// Subject includes object
    Includes,

    /// Subject precedes object (the default when no cue is present)
    Precedes,
}

impl RelationType {
    /// All relation types in canonical order
    pub const ALL: [RelationType; 3] = [
        RelationType::Causes,
        RelationType::Includes,
        RelationType::Precedes,
    ];

    /// Get the relation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Causes => "causes",
            RelationType::Includes => "includes",
            RelationType::Precedes => "precedes",
        }
    }

    /// Parse a relation from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "causes" => Some(RelationType::Causes),
            "includes" => Some(RelationType::Includes),
            "precedes" => Some(RelationType::Precedes),
            _ => None,
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relation type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(
            RelationType::ALL,
            [RelationType::Causes, RelationType::Includes, RelationType::Precedes]
        );
        let mut sorted = RelationType::ALL;
        sorted.sort();
        assert_eq!(sorted, RelationType::ALL);
    }

    #[test]
    fn test_parse() {
        assert_eq!(RelationType::parse("Causes"), Some(RelationType::Causes));
        assert_eq!("includes".parse::<RelationType>(), Ok(RelationType::Includes));
        assert!("rel".parse::<RelationType>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RelationType::Precedes).unwrap();
        assert_eq!(json, "\"precedes\"");
    }
}
