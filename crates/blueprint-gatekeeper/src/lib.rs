//! Blueprint Gatekeeper
//!
//! Checks the structural invariants of a claim set.
//!
//! Causal, inclusion and temporal-precedence relations are each expected to
//! form a DAG. For every relation type, in canonical order, the Gatekeeper
//! builds the directed graph induced by the claims of that relation and
//! records whether it is acyclic. A violation is recorded as a constraint
//! with value 0, never raised as an error.
//!
//! # Examples
//!
//! ```
//! use blueprint_domain::{Claim, ClaimId, RelationType};
//! use blueprint_gatekeeper::check_constraints;
//!
//! let claims = vec![
//!     Claim::new(ClaimId::new(0), "a", RelationType::Causes, "b", 1.0),
//!     Claim::new(ClaimId::new(1), "b", RelationType::Causes, "a", 1.0),
//! ];
//!
//! let constraints = check_constraints(&claims);
//! assert_eq!(constraints.len(), 3);
//! assert_eq!(constraints[0].rule, "causes_acyclic");
//! assert_eq!(constraints[0].value, 0);
//! ```

#![warn(missing_docs)]

mod validator;

pub use validator::{
    check_constraints, evaluate, find_cycle, is_acyclic, relation_graph, ConstraintReport,
    CycleViolation,
};
