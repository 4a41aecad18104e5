//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_list, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{ArchitectureReport, Severity};
use std::fmt::Write;

/// Markdown reporter
pub struct MarkdownReporter {
    /// Include the per-component threat sections
    include_details: bool,
}

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_details: true,
        }
    }

    /// Only the summary and overview table
    #[must_use]
    pub const fn summary_only(mut self) -> Self {
        self.include_details = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        report: &ArchitectureReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        let title = config.title.as_deref().unwrap_or("STRIDE Threat Report");
        writeln!(md, "# {}", escape_markdown_inline(title))?;
        writeln!(md)?;
        if let Some(generated_at) = &config.metadata.generated_at {
            writeln!(md, "_Generated {generated_at}_")?;
            writeln!(md)?;
        }

        writeln!(md, "## Summary")?;
        writeln!(md)?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Components | {} |", report.total_components)?;
        writeln!(md, "| Analyzed | {} |", report.analyzed)?;
        writeln!(md, "| Failed | {} |", report.failed.len())?;
        writeln!(md, "| Risk score | {:.1} |", report.risk_score)?;
        writeln!(md, "| Risk level | **{}** |", report.risk_level)?;
        writeln!(md, "| Total risks | {} |", report.total_risks())?;
        writeln!(md, "| By severity | {} |", severity_line(report))?;
        writeln!(md)?;

        let controls = report.security_controls();
        if controls.is_empty() {
            writeln!(
                md,
                "> **Warning:** no security controls (WAF, firewall, ...) were detected."
            )?;
        } else {
            let names: Vec<String> = controls.iter().map(|c| escape_markdown_inline(c)).collect();
            writeln!(md, "Security controls detected: {}", names.join(", "))?;
        }
        writeln!(md)?;

        if report.components.is_empty() {
            return Ok(md);
        }

        writeln!(md, "## Components")?;
        writeln!(md)?;
        writeln!(md, "| Component | Category | Element | STRIDE | Max severity |")?;
        writeln!(md, "|-----------|----------|---------|--------|--------------|")?;
        let limit = config.max_items.unwrap_or(usize::MAX);
        for analysis in report.components.iter().take(limit) {
            writeln!(
                md,
                "| {} | {} | {} | {} | {} |",
                escape_markdown_table(&analysis.component_name),
                analysis.category.display_name(),
                analysis.element_type,
                analysis.stride_summary,
                analysis.max_severity()
            )?;
        }
        writeln!(md)?;

        if !self.include_details {
            return Ok(md);
        }

        writeln!(md, "## Threats")?;
        for analysis in report.components.iter().take(limit) {
            writeln!(md)?;
            writeln!(
                md,
                "### {} ({}) → STRIDE: {}",
                escape_markdown_inline(&analysis.component_name),
                analysis.element_type,
                analysis.stride_summary
            )?;
            writeln!(md)?;
            writeln!(md, "{}", escape_markdown_list(&analysis.description))?;
            writeln!(md)?;
            for risk in analysis.risks.iter().filter(|r| config.shows(r.severity)) {
                writeln!(
                    md,
                    "- **{}** `{}`: {}",
                    risk.label,
                    risk.severity,
                    escape_markdown_list(risk.detail)
                )?;
                writeln!(md, "  - Mitigation: {}", escape_markdown_list(risk.mitigation))?;
            }
            if analysis
                .risks
                .iter()
                .all(|r| !config.shows(r.severity))
            {
                writeln!(md, "- No risks at or above the selected severity.")?;
            }
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

/// Risk counts per severity, highest first.
fn severity_line(report: &ArchitectureReport) -> String {
    let counts = report.severity_counts();
    Severity::ALL
        .iter()
        .map(|s| format!("{}: {}", s, counts.get(*s)))
        .collect::<Vec<_>>()
        .join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StrideEngine;

    #[test]
    fn test_markdown_sections() {
        let report = StrideEngine::new().analyze_architecture(&["EC2", "WAF"]);
        let md = MarkdownReporter::new()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        assert!(md.starts_with("# STRIDE Threat Report"));
        assert!(md.contains("| Risk level | **"));
        assert!(md.contains("Security controls detected: WAF"));
        assert!(md.contains("### EC2 (Process) → STRIDE: S, T, E"));
        assert!(md.contains("- **E - Elevation of Privilege** `CRITICAL`"));
    }

    #[test]
    fn test_markdown_escapes_names() {
        let report = StrideEngine::new().analyze_architecture(&["evil|name"]);
        let md = MarkdownReporter::new()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        assert!(md.contains("| evil\\|name |"));
    }

    #[test]
    fn test_markdown_summary_only() {
        let report = StrideEngine::new().analyze_architecture(&["EC2"]);
        let md = MarkdownReporter::new()
            .summary_only()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        assert!(md.contains("## Components"));
        assert!(!md.contains("## Threats"));
        assert!(md.contains("> **Warning:**"));
    }

    #[test]
    fn test_markdown_uses_category_display_names() {
        let report = StrideEngine::new().analyze_architecture(&["Sagemaker", "API Gateway"]);
        let md = MarkdownReporter::new()
            .summary_only()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        assert!(md.contains("| Sagemaker | ML/AI |"));
        assert!(md.contains("| API Gateway | API Gateway |"));
        assert!(!md.contains("| ml_ai |"));
    }

    #[test]
    fn test_markdown_min_severity() {
        let report = StrideEngine::new().analyze_architecture(&["Region"]);
        let config = ReportConfig {
            min_severity: Some(Severity::High),
            ..Default::default()
        };
        let md = MarkdownReporter::new().generate(&report, &config).unwrap();
        assert!(md.contains("No risks at or above the selected severity"));
    }

    #[test]
    fn test_severity_line() {
        let report = StrideEngine::new().analyze_architecture(&["EC2"]);
        assert_eq!(
            severity_line(&report),
            "CRITICAL: 1 · HIGH: 2 · MEDIUM: 0 · LOW: 0"
        );
    }
}
