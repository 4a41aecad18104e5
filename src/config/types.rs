//! Configuration types for stride-tools operations.
//!
//! Provides structured configuration for analysis, output and CI behavior.

use super::defaults::{DEFAULT_IOU_THRESHOLD, DEFAULT_MIN_CONFIDENCE};
use crate::model::{Category, RiskLevel, Severity};
use crate::reports::ReportFormat;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Detection filtering and classification
    pub analysis: AnalysisConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the minimum detection confidence.
    pub const fn min_confidence(mut self, confidence: f64) -> Self {
        self.config.analysis.min_confidence = confidence;
        self
    }

    /// Keep repeated detections of the same class.
    pub const fn deduplicate(mut self, deduplicate: bool) -> Self {
        self.config.analysis.deduplicate = deduplicate;
        self
    }

    /// Add a custom component mapping.
    pub fn custom_mapping(mut self, component: impl Into<String>, category: Category) -> Self {
        self.config
            .analysis
            .custom_mappings
            .insert(component.into(), category);
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Hide risks below `severity` in text reports.
    pub const fn min_severity(mut self, severity: Option<Severity>) -> Self {
        self.config.output.min_severity = severity;
        self
    }

    /// Exit non-zero when the risk level reaches `level`.
    pub const fn fail_on(mut self, level: Option<RiskLevel>) -> Self {
        self.config.behavior.fail_on = level;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Runtime configuration for one analysis run
// ============================================================================

/// Where component names come from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Names given directly on the command line
    Names(Vec<String>),
    /// A detections JSON file (`-` for stdin)
    DetectionsFile(PathBuf),
}

/// Configuration for the analyze operation
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub input: InputSource,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
    /// Title for text reports
    pub title: Option<String>,
}

impl AnalyzeConfig {
    /// Combine an input source with loaded application settings.
    #[must_use]
    pub fn from_app(input: InputSource, app: AppConfig) -> Self {
        Self {
            input,
            analysis: app.analysis,
            output: app.output,
            behavior: app.behavior,
            title: None,
        }
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Detection filtering and classifier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Detections below this confidence are dropped (0.0-1.0)
    pub min_confidence: f64,
    /// IoU threshold forwarded to the detector (0.0-1.0)
    pub iou_threshold: f64,
    /// Report each detected class once, in first-seen order
    pub deduplicate: bool,
    /// Extra component-name mappings applied over the built-in table
    pub custom_mappings: IndexMap<String, Category>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            deduplicate: true,
            custom_mappings: IndexMap::new(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Pretty-print JSON formats
    pub pretty: bool,
    /// Hide risks below this severity in text reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<Severity>,
    /// Maximum components listed in text reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            no_color: false,
            pretty: true,
            min_severity: None,
            max_items: None,
        }
    }
}

/// Behavior flags for analyze operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if the architecture risk level reaches this level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<RiskLevel>,
    /// Suppress non-essential output
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.min_confidence, 0.25);
        assert_eq!(config.analysis.iou_threshold, 0.45);
        assert!(config.analysis.deduplicate);
        assert!(config.analysis.custom_mappings.is_empty());
        assert_eq!(config.output.format, ReportFormat::Summary);
        assert!(config.output.pretty);
        assert_eq!(config.behavior.fail_on, None);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .min_confidence(0.6)
            .deduplicate(false)
            .custom_mapping("MyService", Category::Compute)
            .output_format(ReportFormat::Json)
            .fail_on(Some(RiskLevel::High))
            .quiet(true)
            .build();
        assert_eq!(config.analysis.min_confidence, 0.6);
        assert!(!config.analysis.deduplicate);
        assert_eq!(
            config.analysis.custom_mappings.get("MyService"),
            Some(&Category::Compute)
        );
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.behavior.fail_on, Some(RiskLevel::High));
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_yaml_custom_mappings_keep_order() {
        let yaml = "analysis:\n  custom_mappings:\n    Zeta: storage\n    Alpha: compute\n";
        let config: AppConfig = serde_yaml_ng::from_str(yaml).unwrap();
        let keys: Vec<&str> = config
            .analysis
            .custom_mappings
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);
        assert_eq!(config.analysis.min_confidence, 0.25);
    }

    #[test]
    fn test_yaml_rejects_unknown_category() {
        let yaml = "analysis:\n  custom_mappings:\n    MyService: mainframe\n";
        assert!(serde_yaml_ng::from_str::<AppConfig>(yaml).is_err());
    }
}
