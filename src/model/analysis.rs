//! Per-component analyses and the aggregated architecture report.

use super::{Category, RiskLevel, Severity, ThreatRisk};
use serde::Serialize;

/// STRIDE analysis of a single detected component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct ComponentAnalysis {
    /// Name as supplied by the caller
    #[serde(rename = "component")]
    pub component_name: String,
    pub category: Category,
    /// Data-flow-diagram element type, e.g. "Process" or "Data Store"
    pub element_type: &'static str,
    /// Applicable STRIDE letters, e.g. "S, T, E"
    pub stride_summary: &'static str,
    pub description: String,
    pub risks: &'static [ThreatRisk],
}

impl ComponentAnalysis {
    /// Number of risks attached to this component
    #[must_use]
    pub fn risk_count(&self) -> usize {
        self.risks.len()
    }

    /// Highest severity among the risks, `Low` when there are none
    #[must_use]
    pub fn max_severity(&self) -> Severity {
        self.risks
            .iter()
            .map(|r| r.severity)
            .max()
            .unwrap_or(Severity::Low)
    }
}

/// Count of risks per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    #[must_use]
    pub const fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Architecture-level STRIDE report.
///
/// The serialized field set and order are consumed by downstream renderers
/// and storage; do not add serialized fields here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct ArchitectureReport {
    /// Number of names supplied, including unanalyzable ones
    pub total_components: usize,
    /// Number of successful analyses
    pub analyzed: usize,
    /// Names that could not be analyzed, in input order
    pub failed: Vec<String>,
    /// Normalized risk score (0-100)
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub components: Vec<ComponentAnalysis>,
}

impl ArchitectureReport {
    /// Total number of risks across all analyzed components
    #[must_use]
    pub fn total_risks(&self) -> usize {
        self.components.iter().map(ComponentAnalysis::risk_count).sum()
    }

    /// Names of analyzed components that are security controls
    #[must_use]
    pub fn security_controls(&self) -> Vec<String> {
        self.components
            .iter()
            .filter(|c| c.category == Category::Security)
            .map(|c| c.component_name.clone())
            .collect()
    }

    /// Risk counts per severity across all components
    #[must_use]
    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for risk in self.components.iter().flat_map(|c| c.risks) {
            counts.add(risk.severity);
        }
        counts
    }
}
