//! Default configurations and presets for stride-tools.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AnalysisConfig, AppConfig, BehaviorConfig, OutputConfig};
use crate::model::RiskLevel;
use crate::reports::ReportFormat;

/// Default minimum detection confidence
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.25;

/// Default IoU threshold forwarded to the detector
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.45;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default balanced settings suitable for most cases
    Default,
    /// Strict: only confident detections, fail from MEDIUM risk
    Strict,
    /// Permissive: keep low-confidence detections, never fail
    Permissive,
    /// CI: machine-readable output, fail from HIGH risk
    Ci,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Permissive => "permissive",
            Self::Ci => "ci",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "permissive" | "loose" => Some(Self::Permissive),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Balanced settings suitable for most diagrams",
            Self::Strict => "Only confident detections; fail at MEDIUM risk or above",
            Self::Permissive => "Keep low-confidence detections and duplicates; never fail",
            Self::Ci => "JSON output for pipelines; fail at HIGH risk or above",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Permissive, Self::Ci]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Permissive => Self::permissive_preset(),
            ConfigPreset::Ci => Self::ci_preset(),
        }
    }

    /// Strict preset.
    ///
    /// - Drops detections below 0.5 confidence
    /// - Fails from MEDIUM architecture risk
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            analysis: AnalysisConfig {
                min_confidence: 0.5,
                ..AnalysisConfig::default()
            },
            output: OutputConfig::default(),
            behavior: BehaviorConfig {
                fail_on: Some(RiskLevel::Medium),
                quiet: false,
            },
        }
    }

    /// Permissive preset for noisy detector output.
    #[must_use]
    pub fn permissive_preset() -> Self {
        Self {
            analysis: AnalysisConfig {
                min_confidence: 0.1,
                deduplicate: false,
                ..AnalysisConfig::default()
            },
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }

    /// CI pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Quiet, uncolored
    /// - Fails from HIGH architecture risk
    #[must_use]
    pub fn ci_preset() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                pretty: false,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on: Some(RiskLevel::High),
                quiet: true,
            },
        }
    }
}
