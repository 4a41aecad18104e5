//! Pipeline orchestration for STRIDE analysis.
//!
//! Shared input → analyze → report logic used by the CLI command handlers.

mod input;
mod output;

pub use input::{parse_detections_str, read_detections, ComponentInput};
pub use output::{should_use_color, write_output, OutputTarget};

use crate::classify::CategoryClassifier;
use crate::config::{AnalysisConfig, AnalyzeConfig, BehaviorConfig, InputSource};
use crate::engine::StrideEngine;
use crate::error::{InputErrorKind, Result, StrideError};
use crate::model::{ArchitectureReport, DetectionSet};
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - risk level below the `--fail-on` threshold (or none set)
    pub const SUCCESS: i32 = 0;
    /// Architecture risk level reached the `--fail-on` threshold
    pub const RISK_THRESHOLD_EXCEEDED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Result of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: ArchitectureReport,
    /// Raw detections, when the input was detector output
    pub detections: Option<DetectionSet>,
}

/// Build an engine with the configured custom mappings applied.
#[must_use]
pub fn build_engine(analysis: &AnalysisConfig) -> StrideEngine {
    let classifier = CategoryClassifier::with_custom_mappings(
        analysis
            .custom_mappings
            .iter()
            .map(|(name, category)| (name.as_str(), *category)),
    );
    StrideEngine::with_classifier(classifier)
}

/// Load the component input described by `source`.
pub fn load_input(source: &InputSource) -> Result<ComponentInput> {
    match source {
        InputSource::Names(names) => Ok(ComponentInput::Names(names.clone())),
        InputSource::DetectionsFile(path) => read_detections(path),
    }
}

/// Run the analysis described by `config`.
///
/// Fails only when the input cannot be read or holds no components at all;
/// detections that are all filtered out yield an empty report.
pub fn run_analysis(config: &AnalyzeConfig) -> Result<AnalysisOutcome> {
    let input = load_input(&config.input)?;
    let names = input.component_names(&config.analysis);

    if let ComponentInput::Names(ref given) = input {
        if given.is_empty() {
            return Err(StrideError::input("loading components", InputErrorKind::Empty));
        }
    }

    if let Some(set) = input.detections() {
        tracing::info!(
            "{} of {} detections kept at confidence >= {} (IoU {})",
            names.len(),
            set.len(),
            config.analysis.min_confidence,
            config.analysis.iou_threshold
        );
    }

    let engine = build_engine(&config.analysis);
    let report = engine.analyze_architecture(&names);
    if !config.behavior.quiet {
        tracing::info!(
            "Analyzed {} components: risk {} ({})",
            report.analyzed,
            report.risk_score,
            report.risk_level
        );
    }

    Ok(AnalysisOutcome {
        report,
        detections: input.into_detections(),
    })
}

/// Render the outcome in the configured format and write it out.
pub fn output_report(config: &AnalyzeConfig, outcome: &AnalysisOutcome) -> anyhow::Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = target.is_terminal() && should_use_color(config.output.no_color);

    let input_path = match &config.input {
        InputSource::DetectionsFile(path) => Some(path.to_string_lossy().to_string()),
        InputSource::Names(_) => None,
    };
    let report_config = ReportConfig {
        title: config.title.clone(),
        min_severity: config.output.min_severity,
        max_items: config.output.max_items,
        detections: outcome.detections.clone(),
        metadata: ReportMetadata {
            input_path,
            ..ReportMetadata::new()
        },
    };

    let reporter = create_reporter_with_options(config.output.format, use_color, config.output.pretty);
    let rendered = reporter.generate(&outcome.report, &report_config)?;
    write_output(&rendered, &target, config.behavior.quiet)
}

/// Whether the report's risk level reaches the configured `fail_on` level.
#[must_use]
pub fn exceeds_threshold(report: &ArchitectureReport, behavior: &BehaviorConfig) -> bool {
    behavior
        .fail_on
        .is_some_and(|threshold| report.risk_level >= threshold)
}

/// Exit code for a finished analysis
#[must_use]
pub fn exit_code_for(report: &ArchitectureReport, behavior: &BehaviorConfig) -> i32 {
    if exceeds_threshold(report, behavior) {
        exit_codes::RISK_THRESHOLD_EXCEEDED
    } else {
        exit_codes::SUCCESS
    }
}
