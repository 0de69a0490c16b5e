//! Acyclicity validation over relation graphs

use blueprint_domain::{Claim, Constraint, RelationType};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, warn};

/// A detected cycle in one relation's graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleViolation {
    /// Relation whose graph contains the cycle
    pub relation: RelationType,

    /// A node lying on (or reaching) the cycle
    pub witness: String,
}

/// Outcome of checking every relation type
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintReport {
    /// One constraint per relation type, in canonical order
    pub constraints: Vec<Constraint>,

    /// Cycles found, in canonical relation order
    pub violations: Vec<CycleViolation>,
}

impl ConstraintReport {
    /// Whether every constraint holds
    pub fn all_hold(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Build the directed graph `subject → object` for one relation type
///
/// Parallel edges collapse: the graph has set semantics.
pub fn relation_graph(claims: &[Claim], relation: RelationType) -> DiGraphMap<&str, ()> {
    let mut graph = DiGraphMap::new();
    for claim in claims.iter().filter(|c| c.relation == relation) {
        graph.add_edge(claim.subject.as_str(), claim.object.as_str(), ());
    }
    graph
}

/// Find a cycle in the graph of one relation type, if any
///
/// Self-loops count as cycles.
pub fn find_cycle(claims: &[Claim], relation: RelationType) -> Option<CycleViolation> {
    let graph = relation_graph(claims, relation);
    match toposort(&graph, None) {
        Ok(_) => None,
        Err(cycle) => Some(CycleViolation {
            relation,
            witness: cycle.node_id().to_string(),
        }),
    }
}

/// Whether the graph of one relation type is a DAG
pub fn is_acyclic(claims: &[Claim], relation: RelationType) -> bool {
    find_cycle(claims, relation).is_none()
}

/// Check every relation type and collect diagnostics
pub fn evaluate(claims: &[Claim]) -> ConstraintReport {
    let mut constraints = Vec::with_capacity(RelationType::ALL.len());
    let mut violations = Vec::new();

    for relation in RelationType::ALL {
        match find_cycle(claims, relation) {
            None => constraints.push(Constraint::acyclic(relation, true)),
            Some(violation) => {
                warn!(
                    "Constraint {} violated: cycle through '{}'",
                    Constraint::acyclic_rule(relation),
                    violation.witness
                );
                constraints.push(Constraint::acyclic(relation, false));
                violations.push(violation);
            }
        }
    }

    debug!(
        "Checked {} constraints over {} claims, {} violated",
        constraints.len(),
        claims.len(),
        violations.len()
    );

    ConstraintReport {
        constraints,
        violations,
    }
}

/// Constraints for a claim set: exactly one per relation type, in canonical order
pub fn check_constraints(claims: &[Claim]) -> Vec<Constraint> {
    evaluate(claims).constraints
}
