//! Report type definitions.

use crate::model::{DetectionSet, Severity};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Canonical architecture report JSON
    Json,
    /// Export document with summary, detections and analyses
    Export,
    /// Brief summary output
    #[default]
    Summary,
    /// Compact table for terminal (colored)
    Table,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Export => write!(f, "export"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Hide risks below this severity in text reports
    pub min_severity: Option<Severity>,
    /// Maximum components listed in text reports
    pub max_items: Option<usize>,
    /// Raw detections, carried into the export document
    pub detections: Option<DetectionSet>,
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Whether a risk of `severity` should be shown
    #[must_use]
    pub fn shows(&self, severity: Severity) -> bool {
        self.min_severity.map_or(true, |min| severity >= min)
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: Option<String>,
    /// Input file the components were read from
    pub input_path: Option<String>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_without_threshold() {
        let config = ReportConfig::default();
        assert!(config.shows(Severity::Low));
    }

    #[test]
    fn test_shows_with_threshold() {
        let config = ReportConfig {
            min_severity: Some(Severity::High),
            ..Default::default()
        };
        assert!(config.shows(Severity::Critical));
        assert!(config.shows(Severity::High));
        assert!(!config.shows(Severity::Medium));
    }

    #[test]
    fn test_format_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let name = format.to_string();
            assert_eq!(ReportFormat::from_str(&name, true), Ok(*format));
        }
    }
}
