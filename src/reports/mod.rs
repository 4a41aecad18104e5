//! Report generation for STRIDE analyses.
//!
//! This module provides multiple output formats for an [`ArchitectureReport`]:
//! - JSON: the canonical report schema, for programmatic integration
//! - Export: summary, raw detections and analyses in one document
//! - Markdown: Human-readable documentation
//! - Summary: Compact shell-friendly output
//! - Table: Aligned tabular terminal output
//!
//! # Security
//!
//! Component names come straight from the detector or the command line.
//! The `escape` module must be used before embedding them in Markdown.

pub mod escape;
mod export;
mod json;
mod markdown;
mod summary;
mod types;

pub use export::{ExportDocument, ExportReporter, ExportSummary};
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::model::ArchitectureReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render an architecture report
    fn generate(
        &self,
        report: &ArchitectureReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        report: &ArchitectureReport,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report, config)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true, true)
}

/// Create a report generator with color and pretty-printing control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
    pretty: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new().pretty(pretty)),
        ReportFormat::Export => Box::new(ExportReporter::new().pretty(pretty)),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StrideEngine;

    #[test]
    fn test_create_reporter_formats() {
        for format in [
            ReportFormat::Json,
            ReportFormat::Export,
            ReportFormat::Summary,
            ReportFormat::Table,
            ReportFormat::Markdown,
        ] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_write_report_matches_generate() {
        let report = StrideEngine::new().analyze_architecture(&["EC2", "WAF"]);
        let reporter = create_reporter_with_options(ReportFormat::Table, false, true);
        let config = ReportConfig::default();

        let mut buf = Vec::new();
        reporter.write_report(&report, &config, &mut buf).unwrap();
        let expected = reporter.generate(&report, &config).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}
