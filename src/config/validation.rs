//! Configuration validation for stride-tools.

use super::types::{AnalysisConfig, AnalyzeConfig, AppConfig, BehaviorConfig, InputSource, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn unit_interval(field: &str, value: f64, errors: &mut Vec<ConfigError>) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(ConfigError {
            field: field.to_string(),
            message: format!("Must be between 0.0 and 1.0, got {value}"),
        });
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.analysis.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        unit_interval("analysis.min_confidence", self.min_confidence, &mut errors);
        unit_interval("analysis.iou_threshold", self.iou_threshold, &mut errors);

        for component in self.custom_mappings.keys() {
            if crate::classify::is_blank(component) {
                errors.push(ConfigError {
                    field: "analysis.custom_mappings".to_string(),
                    message: "Component names must not be blank".to_string(),
                });
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        if self.max_items == Some(0) {
            errors.push(ConfigError {
                field: "output.max_items".to_string(),
                message: "Max items must be at least 1".to_string(),
            });
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Every fail_on value is a valid level
        Vec::new()
    }
}

impl Validatable for AnalyzeConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        match &self.input {
            InputSource::Names(names) => {
                if names.is_empty() {
                    errors.push(ConfigError {
                        field: "input".to_string(),
                        message: "No component names given".to_string(),
                    });
                }
            }
            InputSource::DetectionsFile(path) => {
                if path.as_os_str() != "-" && !path.exists() {
                    errors.push(ConfigError {
                        field: "input".to_string(),
                        message: format!("File not found: {}", path.display()),
                    });
                }
            }
        }

        errors.extend(self.analysis.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_confidence_out_of_range() {
        let config = AnalysisConfig {
            min_confidence: 1.5,
            iou_threshold: -0.1,
            ..AnalysisConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "analysis.min_confidence");
        assert_eq!(errors[1].field, "analysis.iou_threshold");
    }

    #[test]
    fn test_nan_confidence_rejected() {
        let config = AnalysisConfig {
            min_confidence: f64::NAN,
            ..AnalysisConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_blank_custom_mapping_key() {
        let mut config = AnalysisConfig::default();
        config
            .custom_mappings
            .insert("  ".to_string(), crate::model::Category::Compute);
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "analysis.custom_mappings");
    }

    #[test]
    fn test_output_file_parent_must_exist() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            ..OutputConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("output.file:"));
    }

    #[test]
    fn test_bare_file_name_is_valid() {
        let config = OutputConfig {
            file: Some(PathBuf::from("report.json")),
            ..OutputConfig::default()
        };
        assert!(config.is_valid());
    }

    #[test]
    fn test_analyze_config_input() {
        let missing = AnalyzeConfig::from_app(
            InputSource::DetectionsFile(PathBuf::from("/nonexistent/detections.json")),
            AppConfig::default(),
        );
        assert!(!missing.is_valid());

        let stdin = AnalyzeConfig::from_app(
            InputSource::DetectionsFile(PathBuf::from("-")),
            AppConfig::default(),
        );
        assert!(stdin.is_valid());

        let empty = AnalyzeConfig::from_app(InputSource::Names(Vec::new()), AppConfig::default());
        assert!(!empty.is_valid());
    }
}
