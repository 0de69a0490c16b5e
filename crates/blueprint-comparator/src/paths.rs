//! 2-hop path derivation

use blueprint_domain::Edge;
use std::collections::{HashMap, HashSet};

/// A 2-hop path `(a, b, c)` through node `b`
pub type Path<'a> = (&'a str, &'a str, &'a str);

/// Derive every 2-hop path of an edge set
///
/// An edge landing on `b` chains with any edge leaving `b`; relation labels
/// are ignored, so the result measures raw connectivity. Self-loops chain
/// with themselves.
pub fn two_hop_paths<'a>(edges: &HashSet<Edge<'a>>) -> HashSet<Path<'a>> {
    let mut successors: HashMap<&'a str, HashSet<&'a str>> = HashMap::new();
    for (subject, _, object) in edges {
        successors.entry(*subject).or_default().insert(*object);
    }

    let mut paths = HashSet::new();
    for (a, _, b) in edges {
        if let Some(next) = successors.get(b) {
            paths.extend(next.iter().map(|c| (*a, *b, *c)));
        }
    }
    paths
}
