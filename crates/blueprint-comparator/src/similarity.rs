//! Structural Preservation scoring

use crate::paths::two_hop_paths;
use blueprint_domain::Blueprint;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Weight of the edge Jaccard term in SP
pub const EDGE_WEIGHT: f64 = 0.5;

/// Weight of the path F1 term in SP
pub const PATH_WEIGHT: f64 = 0.5;

/// Breakdown of a structural comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// |E0 ∩ E1| / |E0 ∪ E1|
    pub edge_jaccard: f64,

    /// 2|P0 ∩ P1| / (|P0| + |P1|)
    pub path_f1: f64,

    /// Weighted blend of the two terms
    pub score: f64,
}

/// Jaccard index of two sets; 1.0 when both are empty
fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 1.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// F1 overlap of two sets; 1.0 when both are empty
fn f1<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * a.intersection(b).count() as f64 / total as f64
}

/// Edge Jaccard between two blueprints' typed edge sets
pub fn edge_jaccard(baseline: &Blueprint, candidate: &Blueprint) -> f64 {
    jaccard(&baseline.edges(), &candidate.edges())
}

/// F1 between two blueprints' 2-hop path sets
pub fn path_f1(baseline: &Blueprint, candidate: &Blueprint) -> f64 {
    f1(
        &two_hop_paths(&baseline.edges()),
        &two_hop_paths(&candidate.edges()),
    )
}

/// Compare two blueprints and report every term
pub fn compare(baseline: &Blueprint, candidate: &Blueprint) -> SimilarityReport {
    let edges0 = baseline.edges();
    let edges1 = candidate.edges();
    let paths0 = two_hop_paths(&edges0);
    let paths1 = two_hop_paths(&edges1);

    let edge_jaccard = jaccard(&edges0, &edges1);
    let path_f1 = f1(&paths0, &paths1);
    let score = EDGE_WEIGHT * edge_jaccard + PATH_WEIGHT * path_f1;

    debug!(
        "Compared {}/{} edges, {}/{} paths: jaccard={:.3} f1={:.3} sp={:.3}",
        edges0.len(),
        edges1.len(),
        paths0.len(),
        paths1.len(),
        edge_jaccard,
        path_f1,
        score
    );

    SimilarityReport {
        edge_jaccard,
        path_f1,
        score,
    }
}

/// Structural Preservation score in `[0, 1]`; higher means more structure kept
pub fn structural_similarity(baseline: &Blueprint, candidate: &Blueprint) -> f64 {
    compare(baseline, candidate).score
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_domain::{Axes, Claim, ClaimId, RelationType};

    fn blueprint(edges: &[(&str, RelationType, &str)]) -> Blueprint {
        let claims = edges
            .iter()
            .enumerate()
            .map(|(i, (s, r, o))| Claim::new(ClaimId::new(i), *s, *r, *o, 1.0))
            .collect();
        Blueprint::new(Axes::default(), claims, Vec::new())
    }

    #[test]
    fn test_empty_blueprints_fully_agree() {
        let empty = blueprint(&[]);
        let report = compare(&empty, &empty);
        assert_eq!(report.edge_jaccard, 1.0);
        assert_eq!(report.path_f1, 1.0);
        assert_eq!(report.score, 1.0);
    }

    #[test]
    fn test_self_similarity() {
        let bp = blueprint(&[
            ("a", RelationType::Causes, "b"),
            ("b", RelationType::Precedes, "c"),
        ]);
        assert_eq!(structural_similarity(&bp, &bp), 1.0);
    }

    #[test]
    fn test_disjoint_edges() {
        let a = blueprint(&[("a", RelationType::Causes, "b")]);
        let b = blueprint(&[("c", RelationType::Causes, "d")]);
        let report = compare(&a, &b);
        assert_eq!(report.edge_jaccard, 0.0);
        // neither has paths
        assert_eq!(report.path_f1, 1.0);
        assert_eq!(report.score, 0.5);
    }

    #[test]
    fn test_relation_is_part_of_edge_identity() {
        let a = blueprint(&[("a", RelationType::Causes, "b")]);
        let b = blueprint(&[("a", RelationType::Precedes, "b")]);
        assert_eq!(edge_jaccard(&a, &b), 0.0);
    }

    #[test]
    fn test_truncation_loses_paths() {
        let full = blueprint(&[
            ("a", RelationType::Causes, "b"),
            ("b", RelationType::Causes, "c"),
            ("c", RelationType::Causes, "d"),
        ]);
        let pruned = blueprint(&[("a", RelationType::Causes, "b")]);

        let report = compare(&full, &pruned);
        assert!((report.edge_jaccard - 1.0 / 3.0).abs() < 1e-12);
        // full has 2 paths, pruned has none
        assert_eq!(report.path_f1, 0.0);
        assert!((report.score - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_claims_count_once() {
        let a = blueprint(&[
            ("a", RelationType::Causes, "b"),
            ("a", RelationType::Causes, "b"),
        ]);
        let b = blueprint(&[("a", RelationType::Causes, "b")]);
        assert_eq!(edge_jaccard(&a, &b), 1.0);
    }

    #[test]
    fn test_path_f1_partial_overlap() {
        let a = blueprint(&[
            ("a", RelationType::Causes, "b"),
            ("b", RelationType::Causes, "c"),
            ("b", RelationType::Causes, "d"),
        ]);
        let b = blueprint(&[
            ("a", RelationType::Includes, "b"),
            ("b", RelationType::Includes, "c"),
        ]);
        // P0 = {abc, abd}, P1 = {abc}
        assert!((path_f1(&a, &b) - 2.0 / 3.0).abs() < 1e-12);
    }
}
