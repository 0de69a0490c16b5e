//! Property tests for structural comparison
//!
//! Blueprints are built from generated text so the properties are checked
//! against real extractor output rather than hand-built claims.

use blueprint_comparator::{compare, edge_jaccard, structural_similarity};
use blueprint_extractor::build_blueprint;
use proptest::prelude::*;

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "rain", "flood", "is", "because", "street", "includes", "drain", "are", "later",
            "make", ".", "!",
        ]),
        0..24,
    )
    .prop_map(|words| words.join(" "))
}

#[test]
fn test_end_to_end_self_similarity() {
    let bp = build_blueprint(&[
        "Rain fell because the drain is blocked.",
        "Therefore the street flooded.",
    ]);
    assert!(bp.claims.len() >= 2);
    assert_eq!(edge_jaccard(&bp, &bp), 1.0);
    assert_eq!(structural_similarity(&bp, &bp), 1.0);
}

proptest! {
    /// Property: every term stays within [0, 1]
    #[test]
    fn test_scores_bounded(a in document(), b in document()) {
        let report = compare(&build_blueprint(&[a]), &build_blueprint(&[b]));

        prop_assert!((0.0..=1.0).contains(&report.edge_jaccard));
        prop_assert!((0.0..=1.0).contains(&report.path_f1));
        prop_assert!((0.0..=1.0).contains(&report.score));
    }

    /// Property: a blueprint is fully similar to itself
    #[test]
    fn test_self_similarity(doc in document()) {
        let bp = build_blueprint(&[doc]);
        prop_assert_eq!(structural_similarity(&bp, &bp), 1.0);
    }

    /// Property: swapping the arguments does not change the score
    #[test]
    fn test_argument_order(a in document(), b in document()) {
        let bp_a = build_blueprint(&[a]);
        let bp_b = build_blueprint(&[b]);

        let forward = structural_similarity(&bp_a, &bp_b);
        let backward = structural_similarity(&bp_b, &bp_a);
        prop_assert!((forward - backward).abs() < 1e-12);
    }
}
