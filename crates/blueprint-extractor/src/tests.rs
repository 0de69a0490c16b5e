//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{
        build_blueprint, extract_triplets, split_sentences, structural_size, Extractor,
        ExtractorConfig,
    };
    use blueprint_domain::{Lexicon, RelationType, Timescale};

    const RAIN: [&str; 2] = [
        "Rain fell because the drain is blocked.",
        "Therefore the street flooded.",
    ];

    #[test]
    fn test_full_extraction_flow() {
        let bp = build_blueprint(&RAIN);

        let forms: Vec<(&str, RelationType, &str)> = bp.claims.iter().map(|c| c.form()).collect();
        assert_eq!(
            forms,
            [
                ("fell", RelationType::Precedes, "the"),
                ("drain", RelationType::Precedes, "blocked"),
                ("Therefore", RelationType::Causes, "flooded"),
            ]
        );
        assert_eq!(bp.claims[2].id.to_string(), "c_2");
        assert!(bp.constraints.iter().all(|c| c.holds()));
        assert_eq!(bp.axes.causal_density, 1.0);
        assert_eq!(bp.axes.timescale, Timescale::Long);
    }

    #[test]
    fn test_structural_size_matches_raw_triplets() {
        let raw: usize = RAIN
            .iter()
            .flat_map(|doc| split_sentences(doc))
            .map(|s| extract_triplets(s, &Lexicon::default()).len())
            .sum();

        assert_eq!(structural_size(&RAIN), raw);
        assert!(structural_size(&RAIN) >= build_blueprint(&RAIN).claims.len());
    }

    #[test]
    fn test_blueprint_is_deterministic() {
        assert_eq!(build_blueprint(&RAIN), build_blueprint(&RAIN));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let documents: Vec<String> = (0..12)
            .map(|i| format!("Doc{} is ready. It includes part{}. Later the batch ships", i, i))
            .collect();

        let sequential = Extractor::new(ExtractorConfig::sequential()).build_blueprint(&documents);
        let parallel = Extractor::new(ExtractorConfig::parallel()).build_blueprint(&documents);

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.claims.len(), 36);
    }

    #[test]
    fn test_cycle_across_documents_fails_constraint() {
        let bp = build_blueprint(&["x is y", "y is x"]);

        let precedes = bp.constraint(RelationType::Precedes).unwrap();
        assert_eq!(precedes.value, 0);
        assert_eq!(bp.constraint(RelationType::Causes).unwrap().value, 1);
    }

    #[test]
    fn test_single_token_sentences_contribute_nothing() {
        let bp = build_blueprint(&["Stop. Go! Wait?"]);
        assert!(bp.claims.is_empty());
        assert_eq!(structural_size(&["Stop. Go! Wait?"]), 1);
    }

    #[test]
    fn test_japanese_document() {
        let bp = build_blueprint(&["昨日 雨 が 降った ので 道 が 混雑した。"]);

        assert_eq!(bp.axes.timescale, Timescale::Mid);
        assert_eq!(bp.axes.causal_density, 1.0);
        assert!(!bp.claims.is_empty());
    }

    #[test]
    fn test_config_toml_serialization() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();

        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config.lexicon, parsed.lexicon);
        assert_eq!(config.parallel, parsed.parallel);
    }
}
