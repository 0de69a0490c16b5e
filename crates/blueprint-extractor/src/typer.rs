//! Lexical relation typing

use crate::triplet::RawTriplet;
use blueprint_domain::{CueCategory, Lexicon, RelationType};

/// Assign a canonical relation to a candidate triplet
///
/// Scans the joined text `"<subject> rel <object>"` in fixed precedence:
/// any cause word gives `causes`, otherwise an inclusion cue gives
/// `includes`, otherwise `precedes`. This is a substring scan, so a cause
/// word appearing inside an unrelated token still wins.
pub fn type_relation(triplet: &RawTriplet<'_>, lexicon: &Lexicon) -> RelationType {
    let text = triplet.joined().to_lowercase();

    if lexicon.matches_lowercased(CueCategory::Cause, &text) {
        RelationType::Causes
    } else if lexicon.matches_lowercased(CueCategory::Inclusion, &text) {
        RelationType::Includes
    } else {
        RelationType::Precedes
    }
}
