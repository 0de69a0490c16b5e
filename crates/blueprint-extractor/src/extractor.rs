//! Core Extractor implementation

use crate::axes::estimate_axes;
use crate::config::ExtractorConfig;
use crate::segmenter::split_sentences;
use crate::triplet::extract_triplets;
use crate::typer::type_relation;
use blueprint_domain::{Blueprint, Claim, ClaimId, Lexicon, RelationType};
use blueprint_gatekeeper::check_constraints;
use rayon::prelude::*;
use tracing::{debug, info};

/// Confidence assigned to every extracted claim
pub const EXTRACTED_CONFIDENCE: f64 = 1.0;

/// A typed triplet before ID assignment
#[derive(Debug, Clone, PartialEq)]
struct TypedTriplet {
    subject: String,
    relation: RelationType,
    object: String,
}

/// The Extractor converts free text into blueprints
///
/// Every operation is a pure function of its inputs and the configured
/// lexicon; the extractor holds no mutable state and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The active lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.config.lexicon
    }

    /// Build the blueprint of a document set
    ///
    /// Axes are estimated over all texts, claims are extracted per sentence
    /// and concatenated in input order, and constraints are checked over the
    /// final claim sequence.
    pub fn build_blueprint<S>(&self, documents: &[S]) -> Blueprint
    where
        S: AsRef<str> + Sync,
    {
        info!("Building blueprint from {} documents", documents.len());

        let axes = estimate_axes(documents, self.lexicon());
        let claims = self.extract_claims(documents);
        let constraints = check_constraints(&claims);

        info!(
            "Blueprint complete: {} claims, {}/{} constraints hold",
            claims.len(),
            constraints.iter().filter(|c| c.holds()).count(),
            constraints.len()
        );

        Blueprint::new(axes, claims, constraints)
    }

    /// Extract typed claims from a document set
    ///
    /// IDs `c_0, c_1, …` are assigned after all documents are merged, so the
    /// parallel and sequential paths produce identical claims.
    pub fn extract_claims<S>(&self, documents: &[S]) -> Vec<Claim>
    where
        S: AsRef<str> + Sync,
    {
        let per_document: Vec<Vec<TypedTriplet>> = if self.config.use_parallel(documents.len()) {
            debug!("Extracting {} documents in parallel", documents.len());
            documents
                .par_iter()
                .map(|doc| self.type_document(doc.as_ref()))
                .collect()
        } else {
            documents
                .iter()
                .map(|doc| self.type_document(doc.as_ref()))
                .collect()
        };

        per_document
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(index, t)| {
                Claim::new(
                    ClaimId::new(index),
                    t.subject,
                    t.relation,
                    t.object,
                    EXTRACTED_CONFIDENCE,
                )
            })
            .collect()
    }

    /// Raw triplet count over every sentence of every document, floored at 1
    ///
    /// This is the `|R|_struct` denominator for compression metrics and must
    /// be computed on the untouched documents.
    pub fn structural_size<S: AsRef<str>>(&self, documents: &[S]) -> usize {
        let count: usize = documents
            .iter()
            .flat_map(|doc| split_sentences(doc.as_ref()))
            .map(|sentence| extract_triplets(sentence, self.lexicon()).len())
            .sum();

        count.max(1)
    }

    fn type_document(&self, text: &str) -> Vec<TypedTriplet> {
        let lexicon = self.lexicon();
        let sentences = split_sentences(text);

        let typed: Vec<TypedTriplet> = sentences
            .iter()
            .flat_map(|sentence| extract_triplets(sentence, lexicon))
            .map(|raw| TypedTriplet {
                relation: type_relation(&raw, lexicon),
                subject: raw.subject.to_string(),
                object: raw.object.to_string(),
            })
            .collect();

        debug!(
            "Document of {} chars: {} sentences, {} triplets",
            text.len(),
            sentences.len(),
            typed.len()
        );

        typed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_documents() {
        let extractor = Extractor::default();
        let bp = extractor.build_blueprint::<&str>(&[]);

        assert!(bp.claims.is_empty());
        assert_eq!(bp.constraints.len(), 3);
        assert_eq!(bp.axes.causal_density, 0.3);
    }

    #[test]
    fn test_ids_are_sequential_across_documents() {
        let extractor = Extractor::default();
        let claims = extractor.extract_claims(&["a b. c d", "e f"]);

        let ids: Vec<String> = claims.iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, ["c_0", "c_1", "c_2"]);
        assert_eq!(claims[2].subject, "e");
    }

    #[test]
    fn test_confidence_is_one() {
        let claims = Extractor::default().extract_claims(&["rain flood"]);
        assert!(claims.iter().all(|c| c.confidence == 1.0));
    }

    #[test]
    fn test_structural_size_floor() {
        let extractor = Extractor::default();
        assert_eq!(extractor.structural_size::<&str>(&[]), 1);
        assert_eq!(extractor.structural_size(&["one. two. three"]), 1);
        assert_eq!(extractor.structural_size(&["a b. c d"]), 2);
    }

    #[test]
    fn test_custom_lexicon() {
        use blueprint_domain::CueCategory;

        let lexicon = Lexicon::default().with_cues(CueCategory::Inclusion, ["contains"]);
        let extractor = Extractor::new(ExtractorConfig::default().with_lexicon(lexicon));
        let claims = extractor.extract_claims(&["box contains"]);

        assert_eq!(claims[0].relation, RelationType::Includes);
    }
}
