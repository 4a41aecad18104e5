//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: components in, STRIDE report out.

use crate::config::{AnalyzeConfig, Validatable};
use crate::pipeline::{exit_code_for, output_report, run_analysis};
use anyhow::{bail, Result};

/// Run the analyze command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let listed: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", listed.join("\n  "));
    }

    let outcome = run_analysis(&config)?;
    if !outcome.report.failed.is_empty() && !config.behavior.quiet {
        tracing::warn!(
            "{} blank component name(s) skipped",
            outcome.report.failed.len()
        );
    }

    output_report(&config, &outcome)?;
    Ok(exit_code_for(&outcome.report, &config.behavior))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, InputSource};
    use crate::model::RiskLevel;
    use crate::pipeline::exit_codes;
    use crate::reports::ReportFormat;
    use std::path::PathBuf;

    fn config_for(names: &[&str], app: AppConfig) -> AnalyzeConfig {
        AnalyzeConfig::from_app(
            InputSource::Names(names.iter().map(ToString::to_string).collect()),
            app,
        )
    }

    #[test]
    fn test_run_analyze_exit_codes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let app = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(tmp.path().join("out.json")))
            .fail_on(Some(RiskLevel::Critical))
            .quiet(true)
            .build();

        let code = run_analyze(config_for(&["EC2"], app.clone())).unwrap();
        assert_eq!(code, exit_codes::RISK_THRESHOLD_EXCEEDED);

        let code = run_analyze(config_for(&["VPC"], app)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_run_analyze_rejects_invalid_config() {
        let app = AppConfig::builder()
            .min_confidence(2.0)
            .output_file(Some(PathBuf::from("/nonexistent/dir/out.json")))
            .build();
        let err = run_analyze(config_for(&["EC2"], app)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("analysis.min_confidence"));
        assert!(message.contains("output.file"));
    }
}
