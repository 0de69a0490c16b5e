//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use blueprint_extractor::ExtractorConfig;
use blueprint_janitor::{JanitorConfig, SweepMeta, DEFAULT_RATIOS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Extraction settings and lexicon
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Pruning settings
    #[serde(default)]
    pub janitor: JanitorConfig,

    /// Sweep defaults for the `run` command
    #[serde(default)]
    pub experiment: ExperimentConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Sweep defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Pruning ratios, in sweep order
    #[serde(default = "default_ratios")]
    pub ratios: Vec<f64>,

    /// Metrics output path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Labels written into the report
    #[serde(default)]
    pub meta: SweepMeta,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".blueprint").join("config.toml"))
    }

    /// Load configuration from an explicit path, or the default path if present.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate()?;
        self.janitor.validate()?;
        if self.experiment.ratios.is_empty() {
            return Err(CliError::Config(
                "experiment.ratios must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            ratios: default_ratios(),
            output: default_output(),
            meta: SweepMeta::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_ratios() -> Vec<f64> {
    DEFAULT_RATIOS.to_vec()
}

fn default_output() -> PathBuf {
    PathBuf::from("outputs").join("C1").join("metrics.json")
}
