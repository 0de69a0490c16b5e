//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blueprint CLI - Extract, prune and compare document blueprints.
#[derive(Debug, Parser)]
#[command(name = "blueprint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BLUEPRINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a blueprint from documents
    Extract(DocumentArgs),

    /// Report the raw structural size of documents
    Size(DocumentArgs),

    /// Score a candidate blueprint against a baseline
    Compare(CompareArgs),

    /// Apply the pruning transform to a blueprint
    Prune(PruneArgs),

    /// Run a pruning sweep and write metrics
    Run(RunArgs),
}

/// Document input shared by commands that read text.
#[derive(Debug, Parser)]
pub struct DocumentArgs {
    /// Text files, one document each
    pub files: Vec<PathBuf>,

    /// Read a single document from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Baseline blueprint (JSON)
    pub baseline: PathBuf,

    /// Candidate blueprint (JSON)
    pub candidate: PathBuf,
}

/// Arguments for the prune command.
#[derive(Debug, Parser)]
pub struct PruneArgs {
    /// Blueprint to prune (JSON)
    pub blueprint: PathBuf,

    /// Pruning ratio (0.0-1.0)
    #[arg(short, long)]
    pub ratio: f64,

    /// Write the pruned blueprint here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub documents: DocumentArgs,

    /// Pruning ratios, comma separated
    #[arg(long, value_delimiter = ',')]
    pub ratios: Option<Vec<f64>>,

    /// Metrics output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
