//! Configuration module for stride-tools.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use stride_tools::config::{AppConfig, ConfigPreset};
//! use stride_tools::model::{Category, RiskLevel};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Ci);
//! assert_eq!(config.behavior.fail_on, Some(RiskLevel::High));
//!
//! let config = AppConfig::builder()
//!     .min_confidence(0.5)
//!     .custom_mapping("Payments Service", Category::Compute)
//!     .build();
//! assert_eq!(config.analysis.min_confidence, 0.5);
//! ```
//!
//! # Configuration File
//!
//! Place a `.stride-tools.yaml` file in your project root or `~/.config/stride-tools/`:
//!
//! ```yaml
//! analysis:
//!   min_confidence: 0.4
//!   custom_mappings:
//!     Payments Service: compute
//! behavior:
//!   fail_on: HIGH
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_IOU_THRESHOLD, DEFAULT_MIN_CONFIDENCE};
pub use types::{
    AnalysisConfig, AnalyzeConfig, AppConfig, AppConfigBuilder, BehaviorConfig, InputSource,
    OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate `.stride-tools.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
