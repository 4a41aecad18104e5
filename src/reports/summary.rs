//! Summary and table report generators for shell output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{ArchitectureReport, ComponentAnalysis, RiskLevel, Severity};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Critical | RiskLevel::High => "red",
        RiskLevel::Medium => "yellow",
        RiskLevel::Low => "green",
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "red",
        Severity::Medium => "yellow",
        Severity::Low => "dim",
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Components to list, honoring `max_items`.
fn listed<'a>(
    report: &'a ArchitectureReport,
    config: &ReportConfig,
) -> (&'a [ComponentAnalysis], usize) {
    let limit = config
        .max_items
        .unwrap_or(report.components.len())
        .min(report.components.len());
    (
        &report.components[..limit],
        report.components.len() - limit,
    )
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        report: &ArchitectureReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        let title = config
            .title
            .as_deref()
            .unwrap_or("STRIDE Architecture Summary");
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {} analyzed of {}",
            self.color("Components:", "cyan"),
            report.analyzed,
            report.total_components
        ));
        lines.push(format!(
            "{}  {:.1} / 100 ({})",
            self.color("Risk:", "cyan"),
            report.risk_score,
            self.color(report.risk_level.as_str(), level_color(report.risk_level))
        ));

        let counts = report.severity_counts();
        lines.push(format!(
            "{}  {} ({} critical, {} high, {} medium, {} low)",
            self.color("Threats:", "cyan"),
            plural(counts.total(), "risk"),
            counts.critical,
            counts.high,
            counts.medium,
            counts.low
        ));

        let controls = report.security_controls();
        if controls.is_empty() {
            lines.push(format!(
                "{}  {}",
                self.color("Controls:", "cyan"),
                self.color("no security controls (WAF, firewall, ...) detected", "yellow")
            ));
        } else {
            lines.push(format!(
                "{}  {}",
                self.color("Controls:", "cyan"),
                self.color(&controls.join(", "), "green")
            ));
        }

        if !report.failed.is_empty() {
            let failed = report.failed.len();
            lines.push(format!(
                "{}  {failed} {} skipped (blank name)",
                self.color("Failed:", "cyan"),
                if failed == 1 { "entry" } else { "entries" }
            ));
        }

        if report.components.is_empty() {
            lines.push(String::new());
            lines.push(format!("  {}", self.color("No components analyzed", "dim")));
            return Ok(lines.join("\n"));
        }

        lines.push(String::new());
        lines.push(self.color("Components:", "bold"));
        let (shown, hidden) = listed(report, config);
        for analysis in shown {
            let max = analysis.max_severity();
            lines.push(format!(
                "  {} ({}) → STRIDE: {}  {}",
                analysis.component_name,
                analysis.element_type,
                analysis.stride_summary,
                self.color(max.as_str(), severity_color(max))
            ));
        }
        if hidden > 0 {
            lines.push(self.color(
                &format!("  ... and {} more", plural(hidden, "component")),
                "dim",
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Pad to `width` columns first, then color, so escapes don't skew alignment.
    fn cell(&self, text: &str, width: usize, color: &str) -> String {
        self.color(&pad(&truncate(text, width), width), color)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

const WIDTHS: [usize; 6] = [32, 12, 16, 9, 6, 9];

impl ReportGenerator for TableReporter {
    fn generate(
        &self,
        report: &ArchitectureReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        let headers = ["COMPONENT", "CATEGORY", "ELEMENT", "STRIDE", "RISKS", "MAX"];
        let header: Vec<String> = headers
            .iter()
            .zip(WIDTHS)
            .map(|(h, w)| self.cell(h, w, "bold"))
            .collect();
        lines.push(header.join(" ").trim_end().to_string());
        lines.push("─".repeat(WIDTHS.iter().sum::<usize>() + WIDTHS.len() - 1));

        let (shown, hidden) = listed(report, config);
        for analysis in shown {
            let visible = analysis
                .risks
                .iter()
                .filter(|r| config.shows(r.severity))
                .count();
            let max = analysis.max_severity();
            let row = [
                self.cell(&analysis.component_name, WIDTHS[0], ""),
                self.cell(analysis.category.as_str(), WIDTHS[1], ""),
                self.cell(analysis.element_type, WIDTHS[2], ""),
                self.cell(analysis.stride_summary, WIDTHS[3], ""),
                self.cell(&visible.to_string(), WIDTHS[4], ""),
                self.cell(max.as_str(), WIDTHS[5], severity_color(max)),
            ];
            lines.push(row.join(" ").trim_end().to_string());
        }

        if hidden > 0 {
            lines.push(self.color(
                &format!("... and {} more", plural(hidden, "component")),
                "dim",
            ));
        }

        // Summary footer
        lines.push(String::new());
        lines.push(format!(
            "Total: {} analyzed, {} failed | Risks: {} | Score: {:.1} ({})",
            report.analyzed,
            report.failed.len(),
            report.total_risks(),
            report.risk_score,
            self.color(report.risk_level.as_str(), level_color(report.risk_level))
        ));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Right-pad `s` with spaces to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(used)))
}

/// Truncate to at most `max_width` display columns, marking the cut with "...".
fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max_width > 3 {
        out.push_str("...");
    }
    out
}
