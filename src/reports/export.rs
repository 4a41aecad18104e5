//! Export document for persistence and download.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{ArchitectureReport, ComponentAnalysis, Detection, RiskLevel};
use chrono::Utc;
use serde::Serialize;

/// Record handed to a report store or offered as a JSON download.
///
/// Field names are stable; downstream storage maps them to columns.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub generated_at: String,
    pub summary: ExportSummary,
    pub detections: &'a [Detection],
    pub stride_analyses: &'a [ComponentAnalysis],
}

/// Headline figures of an [`ExportDocument`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub total_components: usize,
    pub analyzed_components: usize,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub total_risks: usize,
    pub security_controls: Vec<String>,
    pub failed: Vec<String>,
}

impl ExportSummary {
    pub fn from_report(report: &ArchitectureReport) -> Self {
        Self {
            total_components: report.total_components,
            analyzed_components: report.analyzed,
            risk_score: report.risk_score,
            risk_level: report.risk_level,
            total_risks: report.total_risks(),
            security_controls: report.security_controls(),
            failed: report.failed.clone(),
        }
    }
}

impl<'a> ExportDocument<'a> {
    /// Build a document, stamping it with the config's timestamp or now.
    pub fn new(report: &'a ArchitectureReport, config: &'a ReportConfig) -> Self {
        let generated_at = config
            .metadata
            .generated_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339());
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            generated_at,
            summary: ExportSummary::from_report(report),
            detections: config
                .detections
                .as_ref()
                .map_or(&[][..], |d| d.detections.as_slice()),
            stride_analyses: &report.components,
        }
    }
}

/// Export document reporter
pub struct ExportReporter {
    pretty: bool,
}

impl ExportReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for ExportReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for ExportReporter {
    fn generate(
        &self,
        report: &ArchitectureReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let document = ExportDocument::new(report, config);
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Export
    }
}
