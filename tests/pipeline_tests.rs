//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full input → analyze → report pipeline and the
//! config layer with real fixture files.

use stride_tools::config::{load_config_file, AnalyzeConfig, AppConfig, InputSource};
use stride_tools::error::InputErrorKind;
use stride_tools::model::{Category, RiskLevel};
use stride_tools::pipeline::{
    exit_code_for, exit_codes, output_report, parse_detections_str, read_detections,
    run_analysis, ComponentInput,
};
use stride_tools::reports::{create_reporter, ReportConfig, ReportFormat};
use stride_tools::StrideError;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn detections_config(name: &str, app: AppConfig) -> AnalyzeConfig {
    AnalyzeConfig::from_app(InputSource::DetectionsFile(fixture_path(name)), app)
}

// ============================================================================
// Input Stage
// ============================================================================

mod input_stage {
    use super::*;

    #[test]
    fn read_detector_output() {
        let input = read_detections(&fixture_path("detections/aws_web_app.json")).unwrap();
        let set = input.detections().unwrap();
        assert_eq!(set.len(), 8);
        assert_eq!(set.detections[0].class_name, "CloudFront");
        assert_eq!(set.detections[0].bbox, [12.0, 40.5, 96.0, 120.0]);
    }

    #[test]
    fn read_name_list() {
        let input = read_detections(&fixture_path("detections/names.json")).unwrap();
        assert!(matches!(input, ComponentInput::Names(ref names) if names.len() == 4));
    }

    #[test]
    fn confidence_outside_unit_interval_is_rejected() {
        let err = read_detections(&fixture_path("detections/bad_confidence.json")).unwrap_err();
        match err {
            StrideError::Input {
                context,
                source: InputErrorKind::InvalidConfidence { class_name, .. },
            } => {
                assert_eq!(class_name, "EC2");
                assert!(context.contains("bad_confidence.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn filtering_and_dedup_follow_config() {
        let input = read_detections(&fixture_path("detections/aws_web_app.json")).unwrap();

        let default_names = input.component_names(&AppConfig::default().analysis);
        assert_eq!(
            default_names,
            vec!["CloudFront", "WAF", "API Gateway", "Lambda", "DynamoDB", "Cognito"]
        );

        let keep_all = AppConfig::builder()
            .min_confidence(0.0)
            .deduplicate(false)
            .build();
        assert_eq!(input.component_names(&keep_all.analysis).len(), 8);
    }
}

// ============================================================================
// Analyze Stage
// ============================================================================

mod analyze_stage {
    use super::*;

    #[test]
    fn analyze_detector_output() {
        let outcome = run_analysis(&detections_config(
            "detections/aws_web_app.json",
            AppConfig::default(),
        ))
        .unwrap();

        let report = &outcome.report;
        assert_eq!(report.total_components, 6);
        assert_eq!(report.analyzed, 6);
        let categories: Vec<Category> = report.components.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Network,
                Category::Security,
                Category::ApiGateway,
                Category::Compute,
                Category::Database,
                Category::Identity,
            ]
        );
        assert_eq!(report.security_controls(), vec!["WAF".to_string()]);
        assert_eq!(outcome.detections.map(|d| d.len()), Some(8));
    }

    #[test]
    fn analyze_name_list_matches_direct_engine_call() {
        let outcome = run_analysis(&detections_config("detections/names.json", AppConfig::default()))
            .unwrap();
        assert_eq!(outcome.report.risk_score, 69.2);
        assert_eq!(outcome.report.risk_level, RiskLevel::High);
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let config = AnalyzeConfig::from_app(
            InputSource::DetectionsFile(PathBuf::from("/nonexistent/detections.json")),
            AppConfig::default(),
        );
        assert!(matches!(run_analysis(&config), Err(StrideError::Io { .. })));
    }

    #[test]
    fn fail_on_drives_exit_code() {
        let app = AppConfig::builder().fail_on(Some(RiskLevel::High)).build();
        let config = detections_config("detections/names.json", app);
        let outcome = run_analysis(&config).unwrap();
        assert_eq!(
            exit_code_for(&outcome.report, &config.behavior),
            exit_codes::RISK_THRESHOLD_EXCEEDED
        );
    }
}

// ============================================================================
// Report Stage
// ============================================================================

mod report_stage {
    use super::*;

    #[test]
    fn export_document_round_trips_through_input_parser() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("stride.json");
        let app = AppConfig::builder()
            .output_format(ReportFormat::Export)
            .output_file(Some(out.clone()))
            .quiet(true)
            .build();
        let config = detections_config("detections/aws_web_app.json", app);
        let outcome = run_analysis(&config).unwrap();
        output_report(&config, &outcome).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["summary"]["analyzed_components"], 6);
        assert_eq!(value["detections"].as_array().unwrap().len(), 8);
        assert_eq!(value["stride_analyses"].as_array().unwrap().len(), 6);

        // The exported document can be fed back in as input
        let reread = parse_detections_str(&written).unwrap();
        assert_eq!(reread.detections().map(|d| d.len()), Some(8));
    }

    #[test]
    fn every_format_renders_fixture_report() {
        let outcome = run_analysis(&detections_config(
            "detections/aws_web_app.json",
            AppConfig::default(),
        ))
        .unwrap();
        for format in [
            ReportFormat::Json,
            ReportFormat::Export,
            ReportFormat::Summary,
            ReportFormat::Table,
            ReportFormat::Markdown,
        ] {
            let rendered = create_reporter(format)
                .generate(&outcome.report, &ReportConfig::default())
                .unwrap();
            assert!(rendered.contains("Lambda"), "{format} output lacks Lambda");
        }
    }
}

// ============================================================================
// Config Files
// ============================================================================

mod config_files {
    use super::*;

    #[test]
    fn fixture_config_loads() {
        let config = load_config_file(&fixture_path("stride-tools.yaml")).unwrap();
        assert_eq!(config.analysis.min_confidence, 0.7);
        assert_eq!(config.output.format, ReportFormat::Markdown);
        assert_eq!(config.behavior.fail_on, Some(RiskLevel::High));
        assert_eq!(
            config.analysis.custom_mappings.get("Ledger"),
            Some(&Category::Database)
        );
    }

    #[test]
    fn fixture_config_drives_analysis() {
        let app = load_config_file(&fixture_path("stride-tools.yaml")).unwrap();
        let outcome = run_analysis(&detections_config("detections/aws_web_app.json", app)).unwrap();
        // Only detections at 0.7 or above survive
        let names: Vec<&str> = outcome
            .report
            .components
            .iter()
            .map(|c| c.component_name.as_str())
            .collect();
        assert_eq!(names, vec!["CloudFront", "WAF", "API Gateway", "Lambda", "DynamoDB"]);
    }

    #[test]
    fn custom_mappings_from_file_reach_classifier() {
        let app = load_config_file(&fixture_path("stride-tools.yaml")).unwrap();
        let config = AnalyzeConfig::from_app(
            InputSource::Names(vec!["Payments Service".to_string()]),
            app,
        );
        let outcome = run_analysis(&config).unwrap();
        assert_eq!(outcome.report.components[0].category, Category::Compute);
    }
}
