//! Configuration for the Extractor

use crate::error::ExtractorError;
use blueprint_domain::{CueCategory, Lexicon};
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Extract documents on the rayon pool
    pub parallel: bool,

    /// Minimum number of documents before the parallel path is taken
    pub parallel_threshold: usize,

    /// Cue words driving the extraction heuristics
    pub lexicon: Lexicon,
}

impl ExtractorConfig {
    /// Validate the configuration
    ///
    /// The lexicon needs cause words for typing and verb cues for triplet
    /// windows; inclusion and time words may be empty.
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.parallel && self.parallel_threshold == 0 {
            return Err(ExtractorError::Config(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }
        if self.lexicon.cues(CueCategory::Cause).is_empty() {
            return Err(ExtractorError::Config(
                "lexicon must define at least one cause word".to_string(),
            ));
        }
        if self.lexicon.cues(CueCategory::Verb).is_empty() {
            return Err(ExtractorError::Config(
                "lexicon must define at least one verb cue".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a document set of the given size takes the parallel path
    pub fn use_parallel(&self, documents: usize) -> bool {
        self.parallel && documents >= self.parallel_threshold.max(1)
    }

    /// Sequential preset: one document after another
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Parallel preset: fan documents out once there are a few of them
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 4,
            lexicon: Lexicon::default(),
        }
    }

    /// Replace the lexicon
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 16,
            lexicon: Lexicon::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
        assert!(ExtractorConfig::parallel().validate().is_ok());
    }

    #[test]
    fn test_invalid_parallel_threshold() {
        let mut config = ExtractorConfig::parallel();
        config.parallel_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_cause_words_rejected() {
        let config = ExtractorConfig::default().with_lexicon(Lexicon::empty());
        assert!(matches!(config.validate(), Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_missing_verb_cues_rejected() {
        let lexicon = Lexicon::empty().with_cues(CueCategory::Cause, ["because"]);
        let config = ExtractorConfig::default().with_lexicon(lexicon);
        assert!(matches!(config.validate(), Err(ExtractorError::Config(_))));

        let result = ExtractorConfig::from_toml("[lexicon]\ncause = [\"because\"]\n");
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_use_parallel() {
        let config = ExtractorConfig::parallel();
        assert!(!config.use_parallel(3));
        assert!(config.use_parallel(4));
        assert!(!ExtractorConfig::sequential().use_parallel(1_000));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::parallel();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml(
            r#"
            parallel = true

            [lexicon]
            cause = ["weil", "deshalb"]
            verb = ["ist"]
            "#,
        )
        .unwrap();

        assert!(parsed.parallel);
        assert_eq!(parsed.parallel_threshold, 16);
        assert!(parsed.lexicon.cues(CueCategory::Cause).contains("weil"));
        assert!(parsed.lexicon.cues(CueCategory::Verb).contains("ist"));
        assert!(parsed.lexicon.cues(CueCategory::Time).is_empty());
    }

    #[test]
    fn test_malformed_toml() {
        let result = ExtractorConfig::from_toml("parallel = \"sometimes\"");
        assert!(matches!(result, Err(ExtractorError::TomlParse(_))));
    }
}
