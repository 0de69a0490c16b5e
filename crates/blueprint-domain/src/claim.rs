//! Claim module - the fundamental unit of a blueprint

use crate::RelationType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier for a claim within one blueprint
///
/// IDs are assigned as `c_0, c_1, …` over the merged claim sequence of a
/// single extraction call. They are unique within a blueprint and stable only
/// for identical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimId(usize);

impl ClaimId {
    /// Prefix used by the textual form
    pub const PREFIX: &'static str = "c_";

    /// Create a ClaimId for the given position in the claim sequence
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_domain::ClaimId;
    ///
    /// let id = ClaimId::new(3);
    /// assert_eq!(id.to_string(), "c_3");
    /// ```
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Parse a ClaimId from its `c_<index>` form
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_domain::ClaimId;
    ///
    /// let parsed = ClaimId::from_string("c_12").unwrap();
    /// assert_eq!(parsed.index(), 12);
    /// assert!(ClaimId::from_string("12").is_err());
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| format!("Invalid claim id '{}': missing '{}' prefix", s, Self::PREFIX))?;
        digits
            .parse::<usize>()
            .map(Self)
            .map_err(|e| format!("Invalid claim id '{}': {}", s, e))
    }

    /// Get the sequence index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl TryFrom<String> for ClaimId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

impl From<ClaimId> for String {
    fn from(id: ClaimId) -> Self {
        id.to_string()
    }
}

/// A typed claim extracted from a sentence
///
/// Claims are immutable once typed; the pruning stand-in only ever drops
/// whole claims from the end of a blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Sequential identifier
    pub id: ClaimId,

    /// Subject token
    pub subject: String,

    /// Canonical relation type
    pub relation: RelationType,

    /// Object token
    pub object: String,

    /// Confidence in [0.0, 1.0]
    pub confidence: f64,
}

impl Claim {
    /// Create a new claim
    ///
    /// # Panics
    /// Panics if confidence is outside [0, 1]
    pub fn new(
        id: ClaimId,
        subject: impl Into<String>,
        relation: RelationType,
        object: impl Into<String>,
        confidence: f64,
    ) -> Self {
        assert!((0.0..=1.0).contains(&confidence), "Confidence must be in [0, 1]");

        Self {
            id,
            subject: subject.into(),
            relation,
            object: object.into(),
            confidence,
        }
    }

    /// The `(subject, relation, object)` form of the claim
    pub fn form(&self) -> (&str, RelationType, &str) {
        (&self.subject, self.relation, &self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_ordering() {
        let id1 = ClaimId::new(1);
        let id2 = ClaimId::new(2);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_claim_id_display_and_parse() {
        let id = ClaimId::new(42);
        assert_eq!(id.to_string(), "c_42");
        assert_eq!(ClaimId::from_string("c_42").unwrap(), id);
    }

    #[test]
    fn test_claim_id_invalid_string() {
        assert!(ClaimId::from_string("not-an-id").is_err());
        assert!(ClaimId::from_string("c_").is_err());
        assert!(ClaimId::from_string("c_-1").is_err());
        assert!(ClaimId::from_string("").is_err());
    }

    #[test]
    fn test_claim_id_serializes_as_string() {
        let json = serde_json::to_string(&ClaimId::new(7)).unwrap();
        assert_eq!(json, "\"c_7\"");

        let parsed: ClaimId = serde_json::from_str("\"c_7\"").unwrap();
        assert_eq!(parsed.index(), 7);
        assert!(serde_json::from_str::<ClaimId>("\"x_7\"").is_err());
    }

    #[test]
    fn test_claim_form() {
        let claim = Claim::new(ClaimId::new(0), "rain", RelationType::Causes, "flood", 1.0);
        assert_eq!(claim.form(), ("rain", RelationType::Causes, "flood"));
    }

    #[test]
    #[should_panic]
    fn test_invalid_confidence() {
        Claim::new(ClaimId::new(0), "a", RelationType::Precedes, "b", 1.5);
    }
}
