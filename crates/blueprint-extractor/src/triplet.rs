//! Candidate triplet extraction from token sequences

use crate::tokenizer::tokenize;
use blueprint_domain::{CueCategory, Lexicon};

/// Provisional relation marker carried by untyped triplets
pub const RELATION_PLACEHOLDER: &str = "rel";

/// An untyped `(subject, "rel", object)` candidate borrowed from a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTriplet<'a> {
    /// Subject token
    pub subject: &'a str,

    /// Object token
    pub object: &'a str,
}

impl<'a> RawTriplet<'a> {
    /// Create a candidate triplet
    pub fn new(subject: &'a str, object: &'a str) -> Self {
        Self { subject, object }
    }

    /// The triplet as `[subject, "rel", object]`
    pub fn form(&self) -> [&'a str; 3] {
        [self.subject, RELATION_PLACEHOLDER, self.object]
    }

    /// The space-joined text `"<subject> rel <object>"` scanned by the typer
    pub fn joined(&self) -> String {
        self.form().join(" ")
    }
}

/// Find candidate triplets in a token sequence
///
/// Every consecutive `(a, b, c)` whose middle token contains a verb cue yields
/// `(a, rel, c)`. Over-generation is intended: all hits are kept and none are
/// deduplicated. When nothing matched and there are at least two tokens, a
/// single `(first, rel, last)` fallback is emitted.
pub fn triplets_from_tokens<'a>(tokens: &[&'a str], lexicon: &Lexicon) -> Vec<RawTriplet<'a>> {
    let mut triplets: Vec<RawTriplet<'a>> = tokens
        .windows(3)
        .filter(|w| lexicon.matches(CueCategory::Verb, w[1]))
        .map(|w| RawTriplet::new(w[0], w[2]))
        .collect();

    if triplets.is_empty() {
        if let [first, .., last] = tokens {
            triplets.push(RawTriplet::new(first, last));
        }
    }

    triplets
}

/// Tokenize a sentence and find its candidate triplets
///
/// # Examples
///
/// ```
/// use blueprint_domain::Lexicon;
/// use blueprint_extractor::extract_triplets;
///
/// let lexicon = Lexicon::default();
/// let triplets = extract_triplets("the drain is blocked", &lexicon);
/// assert_eq!(triplets.len(), 1);
/// assert_eq!(triplets[0].form(), ["drain", "rel", "blocked"]);
/// ```
pub fn extract_triplets<'a>(sentence: &'a str, lexicon: &Lexicon) -> Vec<RawTriplet<'a>> {
    triplets_from_tokens(&tokenize(sentence), lexicon)
}
