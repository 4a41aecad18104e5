//! The STRIDE engine.

use super::profiles::ProfileTable;
use super::scoring::calculate_risk_score;
use crate::classify::{is_blank, CategoryClassifier};
use crate::model::{
    ArchitectureReport, Category, ComponentAnalysis, RiskLevel, Severity, ThreatRisk, ThreatType,
};

/// Risk attached to components whose category has no registered profile.
const UNPROFILED_THREATS: &[ThreatRisk] = &[ThreatRisk {
    threat_type: ThreatType::Spoofing,
    label: "S - Spoofing",
    detail: "Component without a specific profile requires manual review.",
    mitigation: "Verify authentication and authorization manually.",
    severity: Severity::Medium,
}];

/// Classifies components and attaches their STRIDE threats.
///
/// The engine is immutable once built and holds no per-call state, so a
/// single instance may be shared freely between threads.
#[derive(Debug, Clone)]
pub struct StrideEngine {
    classifier: CategoryClassifier,
    profiles: ProfileTable,
}

impl Default for StrideEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StrideEngine {
    /// Engine with the seeded classifier and built-in profiles.
    #[must_use]
    pub fn new() -> Self {
        Self::with_classifier(CategoryClassifier::new())
    }

    #[must_use]
    pub fn with_classifier(classifier: CategoryClassifier) -> Self {
        Self::with_parts(classifier, ProfileTable::builtin())
    }

    /// Engine over an explicit profile table.
    #[must_use]
    pub fn with_parts(classifier: CategoryClassifier, profiles: ProfileTable) -> Self {
        tracing::info!(
            "StrideEngine initialized with {} category profiles",
            profiles.len()
        );
        Self {
            classifier,
            profiles,
        }
    }

    #[must_use]
    pub const fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    #[must_use]
    pub const fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Analyze one component. Returns `None` for blank names.
    #[must_use]
    pub fn analyze(&self, component_name: &str) -> Option<ComponentAnalysis> {
        if is_blank(component_name) {
            tracing::warn!("Empty component name received");
            return None;
        }

        let category = self.classifier.classify(component_name);
        tracing::debug!(
            "Component '{}' classified as '{}'",
            component_name,
            category
        );

        let Some(profile) = self.profiles.get(category) else {
            tracing::warn!("No STRIDE profile for category '{}'", category);
            return Some(generic_analysis(component_name, category));
        };

        Some(ComponentAnalysis {
            component_name: component_name.to_string(),
            category,
            element_type: profile.element_type,
            stride_summary: profile.stride_summary,
            description: profile.description.to_string(),
            risks: profile.threats,
        })
    }

    /// Analyze every name in order and aggregate the result.
    ///
    /// Blank names are reported in `failed`; duplicates are analyzed once
    /// per occurrence.
    pub fn analyze_architecture<S: AsRef<str>>(&self, components: &[S]) -> ArchitectureReport {
        let mut analyses = Vec::with_capacity(components.len());
        let mut failed = Vec::new();

        for name in components {
            let name = name.as_ref();
            match self.analyze(name) {
                Some(analysis) => analyses.push(analysis),
                None => failed.push(name.to_string()),
            }
        }

        let risk_score = calculate_risk_score(&analyses);
        let risk_level = RiskLevel::from_score(risk_score);
        tracing::debug!(
            "Architecture scored {} ({}) over {} components",
            risk_score,
            risk_level,
            analyses.len()
        );

        ArchitectureReport {
            total_components: components.len(),
            analyzed: analyses.len(),
            failed,
            risk_score,
            risk_level,
            components: analyses,
        }
    }
}

fn generic_analysis(component_name: &str, category: Category) -> ComponentAnalysis {
    ComponentAnalysis {
        component_name: component_name.to_string(),
        category,
        element_type: "External Entity",
        stride_summary: "S",
        description: format!("Component '{component_name}' without a specific analysis"),
        risks: UNPROFILED_THREATS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::COMPUTE_THREATS;

    #[test]
    fn test_analyze_ec2() {
        let engine = StrideEngine::new();
        let analysis = engine.analyze("EC2").unwrap();
        assert_eq!(analysis.category, Category::Compute);
        assert_eq!(analysis.risk_count(), COMPUTE_THREATS.len());
        assert_eq!(analysis.risk_count(), 3);
        assert_eq!(analysis.max_severity(), Severity::Critical);
        assert_eq!(analysis.element_type, "Process");
        assert_eq!(analysis.component_name, "EC2");
    }

    #[test]
    fn test_analyze_blank_is_none() {
        let engine = StrideEngine::new();
        assert!(engine.analyze("").is_none());
        assert!(engine.analyze("   ").is_none());
        assert!(engine.analyze("\x1c").is_none());
        assert!(engine.analyze(" \x1f\t").is_none());
    }

    #[test]
    fn test_unknown_component_gets_other_profile() {
        let engine = StrideEngine::new();
        let analysis = engine.analyze("UnknownWidget123").unwrap();
        assert_eq!(analysis.category, Category::Other);
        assert_eq!(analysis.risk_count(), 1);
    }

    #[test]
    fn test_missing_profile_synthesizes_generic_analysis() {
        let engine = StrideEngine::with_parts(
            CategoryClassifier::new(),
            ProfileTable::builtin().without(Category::Compute),
        );
        let analysis = engine.analyze("EC2").unwrap();
        assert_eq!(analysis.category, Category::Compute);
        assert_eq!(analysis.element_type, "External Entity");
        assert_eq!(analysis.stride_summary, "S");
        assert!(analysis.description.contains("EC2"));
        assert_eq!(analysis.risk_count(), 1);
        assert_eq!(analysis.risks[0].severity, Severity::Medium);
        assert_eq!(analysis.risks[0].threat_type, ThreatType::Spoofing);
        assert!(analysis.risks[0].detail.contains("requires manual review"));
    }

    #[test]
    fn test_architecture_four_components() {
        let engine = StrideEngine::new();
        let report = engine.analyze_architecture(&["EC2", "RDS", "S3", "IAM"]);
        assert_eq!(report.total_components, 4);
        assert_eq!(report.analyzed, 4);
        assert!(report.failed.is_empty());
        // (24 + 21 + 21 + 17) / 120
        assert_eq!(report.risk_score, 69.2);
        assert_eq!(report.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_architecture_failed_names_keep_order() {
        let engine = StrideEngine::new();
        let report = engine.analyze_architecture(&["", "EC2", "  ", "EC2"]);
        assert_eq!(report.total_components, 4);
        assert_eq!(report.analyzed, 2);
        assert_eq!(report.failed, vec!["".to_string(), "  ".to_string()]);
        assert_eq!(report.components.len(), 2);
    }

    #[test]
    fn test_empty_architecture() {
        let engine = StrideEngine::new();
        let report = engine.analyze_architecture::<&str>(&[]);
        assert_eq!(report.total_components, 0);
        assert_eq!(report.analyzed, 0);
        assert_eq!(report.risk_score, 0.0);
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_custom_classifier() {
        let classifier = CategoryClassifier::with_custom_mappings([("MyService", Category::Compute)]);
        let engine = StrideEngine::with_classifier(classifier);
        assert_eq!(
            engine.analyze("MyService").map(|a| a.category),
            Some(Category::Compute)
        );
    }
}
