//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use blueprint_comparator::SimilarityReport;
use blueprint_domain::Blueprint;
use blueprint_janitor::SweepReport;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a blueprint.
    pub fn format_blueprint(&self, blueprint: &Blueprint) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(blueprint)?),
            OutputFormat::Table => Ok(self.format_blueprint_table(blueprint)),
            OutputFormat::Quiet => Ok(blueprint
                .claims
                .iter()
                .map(|c| format!("{}\t{}\t{}", c.subject, c.relation, c.object))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a blueprint as axes line, claims table and constraint line.
    fn format_blueprint_table(&self, blueprint: &Blueprint) -> String {
        let axes = &blueprint.axes;
        let mut sections = vec![self.info(&format!(
            "Axes: abstractness={:.2} causal_density={:.2} timescale={}",
            axes.abstractness,
            axes.causal_density,
            axes.timescale.as_str()
        ))];

        if blueprint.claims.is_empty() {
            sections.push(self.colorize("No claims found.", "yellow"));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["ID", "Subject", "Relation", "Object", "Confidence"]);
            for claim in &blueprint.claims {
                builder.push_record([
                    claim.id.to_string(),
                    claim.subject.clone(),
                    claim.relation.to_string(),
                    claim.object.clone(),
                    format!("{:.2}", claim.confidence),
                ]);
            }

            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            sections.push(table.to_string());
        }

        let constraints: Vec<String> = blueprint
            .constraints
            .iter()
            .map(|c| {
                let status = format!("{}={}", c.rule, c.value);
                if c.holds() {
                    self.colorize(&status, "green")
                } else {
                    self.colorize(&status, "red")
                }
            })
            .collect();
        sections.push(format!("Constraints: {}", constraints.join(" ")));

        sections.join("\n")
    }

    /// Format the raw structural size of a document set.
    pub fn format_size(&self, r_struct: usize, documents: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "documents": documents,
                "r_struct": r_struct,
            }))?),
            OutputFormat::Table => Ok(self.info(&format!(
                "|R|_struct = {} ({} document(s))",
                r_struct, documents
            ))),
            OutputFormat::Quiet => Ok(r_struct.to_string()),
        }
    }

    /// Format a structural comparison.
    pub fn format_similarity(&self, report: &SimilarityReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Edge Jaccard", "Path F1", "SP"]);
                builder.push_record([
                    format!("{:.4}", report.edge_jaccard),
                    format!("{:.4}", report.path_f1),
                    format!("{:.4}", report.score),
                ]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(format!("{:.4}", report.score)),
        }
    }

    /// Format a sweep report.
    pub fn format_sweep(&self, report: &SweepReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(report.to_json()?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["p", "CR", "SP", "BP_size"]);
                for row in &report.results {
                    builder.push_record([
                        format!("{:.2}", row.p),
                        format!("{:.2}", row.cr),
                        format!("{:.2}", row.sp),
                        row.bp_size.to_string(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(report
                .results
                .iter()
                .map(|r| format!("{}\t{}\t{}\t{}", r.p, r.cr, r.sp, r.bp_size))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_comparator::compare;
    use blueprint_extractor::build_blueprint;
    use blueprint_janitor::{SweepMeta, SweepResult};

    fn blueprint() -> Blueprint {
        build_blueprint(&["Rain fell because the drain is blocked."])
    }

    #[test]
    fn test_blueprint_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_blueprint(&blueprint()).unwrap();
        let parsed: Blueprint = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, blueprint());
    }

    #[test]
    fn test_blueprint_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_blueprint(&blueprint()).unwrap();
        assert!(output.contains("Subject"));
        assert!(output.contains("c_0"));
        assert!(output.contains("causes_acyclic=1"));
        assert!(output.contains("timescale=long"));
    }

    #[test]
    fn test_blueprint_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_blueprint(&blueprint()).unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("drain\tprecedes\tblocked"));
    }

    #[test]
    fn test_empty_blueprint_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let empty: [&str; 0] = [];
        let output = formatter.format_blueprint(&build_blueprint(&empty)).unwrap();
        assert!(output.contains("No claims found"));
    }

    #[test]
    fn test_similarity_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let bp = blueprint();
        let output = formatter.format_similarity(&compare(&bp, &bp)).unwrap();
        assert_eq!(output, "1.0000");
    }

    #[test]
    fn test_sweep_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut report = SweepReport::new(SweepMeta::default());
        report.record(SweepResult {
            p: 0.4,
            cr: 0.1,
            sp: 0.8,
            bp_size: 12,
        });
        let output = formatter.format_sweep(&report).unwrap();
        assert!(output.contains("BP_size"));
        assert!(output.contains("0.80"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.info("test"), "ℹ test");
    }
}
