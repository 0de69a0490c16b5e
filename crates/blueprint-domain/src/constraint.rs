//! Constraint module - structural invariants recorded on a blueprint

use crate::RelationType;
use serde::{Deserialize, Serialize};

/// Result of one structural check
///
/// A failed constraint is data, not an error: consumers decide what to do
/// with a value of 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    /// Rule name, e.g. `causes_acyclic`
    pub rule: String,

    /// 1 when the rule holds, 0 when violated
    pub value: u8,
}

impl Constraint {
    /// Build the acyclicity constraint for a relation
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_domain::{Constraint, RelationType};
    ///
    /// let c = Constraint::acyclic(RelationType::Causes, false);
    /// assert_eq!(c.rule, "causes_acyclic");
    /// assert_eq!(c.value, 0);
    /// ```
    pub fn acyclic(relation: RelationType, holds: bool) -> Self {
        Self {
            rule: Self::acyclic_rule(relation),
            value: u8::from(holds),
        }
    }

    /// Rule name of the acyclicity check for a relation
    pub fn acyclic_rule(relation: RelationType) -> String {
        format!("{}_acyclic", relation.as_str())
    }

    /// Whether the rule holds
    pub fn holds(&self) -> bool {
        self.value == 1
    }
}
