//! Blueprint module - the structural summary of a document set

use crate::{Axes, Claim, Constraint, RelationType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A typed edge `(subject, relation, object)` borrowed from a claim
pub type Edge<'a> = (&'a str, RelationType, &'a str);

/// Axes + typed claims + constraint results for one document set
///
/// `constraints` holds exactly one entry per relation type, in canonical
/// order. The blueprint owns its claims and constraints; nothing is shared
/// or mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Set-level descriptors
    pub axes: Axes,

    /// Claims in extraction order
    pub claims: Vec<Claim>,

    /// Acyclicity checks, one per relation type
    pub constraints: Vec<Constraint>,
}

impl Blueprint {
    /// Assemble a blueprint from its parts
    pub fn new(axes: Axes, claims: Vec<Claim>, constraints: Vec<Constraint>) -> Self {
        Self {
            axes,
            claims,
            constraints,
        }
    }

    /// Number of structural elements: claims, constraints and the three axes
    pub fn size(&self) -> usize {
        self.claims.len() + self.constraints.len() + Axes::ELEMENT_COUNT
    }

    /// Distinct typed edges of the claim set
    pub fn edges(&self) -> HashSet<Edge<'_>> {
        self.claims.iter().map(Claim::form).collect()
    }

    /// Claims carrying the given relation, in order
    pub fn claims_of(&self, relation: RelationType) -> impl Iterator<Item = &Claim> {
        self.claims.iter().filter(move |c| c.relation == relation)
    }

    /// Check the invariants a deserialized blueprint may have lost
    ///
    /// Every confidence must lie in `[0, 1]`, and `constraints` must hold one
    /// 0/1 acyclicity entry per relation type in canonical order.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(claim) = self
            .claims
            .iter()
            .find(|c| !(0.0..=1.0).contains(&c.confidence))
        {
            return Err(format!(
                "claim {} has confidence {} outside [0, 1]",
                claim.id, claim.confidence
            ));
        }

        if self.constraints.len() != RelationType::ALL.len() {
            return Err(format!(
                "expected {} constraints, found {}",
                RelationType::ALL.len(),
                self.constraints.len()
            ));
        }

        for (constraint, relation) in self.constraints.iter().zip(RelationType::ALL) {
            let rule = Constraint::acyclic_rule(relation);
            if constraint.rule != rule {
                return Err(format!(
                    "expected constraint {}, found {}",
                    rule, constraint.rule
                ));
            }
            if constraint.value > 1 {
                return Err(format!(
                    "constraint {} has value {}, expected 0 or 1",
                    constraint.rule, constraint.value
                ));
            }
        }

        Ok(())
    }

    /// Look up the acyclicity constraint for a relation
    pub fn constraint(&self, relation: RelationType) -> Option<&Constraint> {
        let rule = Constraint::acyclic_rule(relation);
        self.constraints.iter().find(|c| c.rule == rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClaimId;

    fn sample() -> Blueprint {
        let claims = vec![
            Claim::new(ClaimId::new(0), "a", RelationType::Causes, "b", 1.0),
            Claim::new(ClaimId::new(1), "a", RelationType::Causes, "b", 1.0),
            Claim::new(ClaimId::new(2), "b", RelationType::Precedes, "c", 1.0),
        ];
        let constraints = RelationType::ALL
            .iter()
            .map(|r| Constraint::acyclic(*r, true))
            .collect();
        Blueprint::new(Axes::default(), claims, constraints)
    }

    #[test]
    fn test_size_counts_axes() {
        assert_eq!(sample().size(), 3 + 3 + 3);
    }

    #[test]
    fn test_edges_are_deduplicated() {
        let bp = sample();
        let edges = bp.edges();
        assert_eq!(edges.len(), 2);
        assert!(edges.contains(&("a", RelationType::Causes, "b")));
    }

    #[test]
    fn test_constraint_lookup() {
        let bp = sample();
        assert_eq!(bp.constraint(RelationType::Includes).map(|c| c.value), Some(1));
        assert_eq!(bp.claims_of(RelationType::Causes).count(), 2);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["claims"][0]["id"], "c_0");
        assert_eq!(value["claims"][2]["relation"], "precedes");
        assert_eq!(value["constraints"][0]["rule"], "causes_acyclic");
        assert_eq!(value["axes"]["timescale"], "long");
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut bp = sample();
        bp.claims[1].confidence = 1.5;
        assert!(bp.validate().unwrap_err().contains("c_1"));

        let mut bp = sample();
        bp.constraints.pop();
        assert!(bp.validate().is_err());

        let mut bp = sample();
        bp.constraints.swap(0, 1);
        assert!(bp.validate().is_err());

        let mut bp = sample();
        bp.constraints[2].value = 2;
        assert!(bp.validate().is_err());
    }
}
