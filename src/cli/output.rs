//! Run summary formatting
//!
//! Renders a [`GenerationReport`] as JSON, YAML or human-readable text.

use anyhow::{Context, Result};

use crate::pipeline::GenerationReport;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Formatter for run summaries
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &GenerationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize generation report to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(report)
                .context("Failed to serialize generation report to YAML"),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_human(&self, report: &GenerationReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Scanned {} file(s) under {} ({} template(s) skipped, {} failed)\n",
            report.files_scanned,
            report.apps_dir.display(),
            report.files_skipped,
            report.files_failed
        ));

        match &report.output_path {
            Some(path) => output.push_str(&format!(
                "Generated {} with {} unique endpoint(s)\n",
                path.display(),
                report.endpoints.len()
            )),
            None => output.push_str(&format!(
                "Dry run: {} unique endpoint(s), nothing written\n",
                report.endpoints.len()
            )),
        }

        if report.endpoints.is_empty() {
            output.push_str(
                "\n\u{26A0}  No valid FQDN found. Check that the manifests declare public hostnames \
                 (ingress rules, TLS hosts, certificates or kustomize patches)\n",
            );
            return output;
        }

        output.push_str("\nEndpoints found:\n");
        for record in &report.endpoints {
            output.push_str(&format!(
                "  - {} (app: {}, source: {})\n",
                record.fqdn,
                record.app_name,
                record.source_name()
            ));
        }

        output
    }
}
