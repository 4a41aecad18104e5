//! **Rule-based STRIDE threat classification for cloud architecture components.**
//!
//! `stride-tools` takes the components detected in an architecture diagram
//! (plain names such as `"EC2"` or `"Amazon S3 Bucket"`), resolves each one to
//! a security category, attaches the STRIDE threats known for that category,
//! and scores the architecture as a whole.
//!
//! It powers both a command-line interface and a Rust library for
//! programmatic integration.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: categories, severities, threat records and the
//!   [`ArchitectureReport`] every analysis produces.
//! - **[`classify`]**: the [`CategoryClassifier`], which maps free-text names
//!   to a [`Category`] by exact match, then ordered partial match, then a
//!   fallback. It never fails.
//! - **[`knowledge`]**: the static STRIDE threat lists per category.
//! - **[`engine`]**: the [`StrideEngine`], which combines classification and
//!   knowledge into per-component analyses and a 0-100 risk score.
//! - **[`reports`]**: JSON, export, summary, table and Markdown renderers.
//! - **[`pipeline`]**: reading detections, running the engine and writing
//!   output, as the CLI does.
//! - **[`config`]**: YAML configuration, presets and validation.
//!
//! ## Getting Started
//!
//! ```
//! use stride_tools::{RiskLevel, StrideEngine};
//!
//! let engine = StrideEngine::new();
//! let report = engine.analyze_architecture(&["EC2", "RDS", "S3", "IAM"]);
//!
//! assert_eq!(report.analyzed, 4);
//! assert_eq!(report.risk_score, 69.2);
//! assert_eq!(report.risk_level, RiskLevel::High);
//! ```
//!
//! ### Custom mappings
//!
//! Names the seeded table does not know fall back to `other`. Custom mappings
//! take precedence over the built-in table:
//!
//! ```
//! use stride_tools::{Category, CategoryClassifier, StrideEngine};
//!
//! let classifier = CategoryClassifier::with_custom_mappings([("MyService", Category::Compute)]);
//! let engine = StrideEngine::with_classifier(classifier);
//!
//! let analysis = engine.analyze("MyService").unwrap();
//! assert_eq!(analysis.category, Category::Compute);
//! assert_eq!(analysis.risk_count(), 3);
//! ```
//!
//! ### Rendering
//!
//! ```
//! use stride_tools::reports::{create_reporter, ReportConfig, ReportFormat};
//! use stride_tools::StrideEngine;
//!
//! let report = StrideEngine::new().analyze_architecture(&["Lambda", "WAF"]);
//! let markdown = create_reporter(ReportFormat::Markdown)
//!     .generate(&report, &ReportConfig::default())
//!     .unwrap();
//! assert!(markdown.contains("Lambda"));
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `stride-tools` library crate. For the
//! command-line tool, see the project's README or run `stride-tools --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Counts become f64 for scoring; they stay far below 2^52
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod classify;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use classify::{CategoryClassifier, Classification, MatchMethod};
pub use config::{AnalyzeConfig, AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{ConfigError, Validatable};
pub use engine::{calculate_risk_score, CategoryProfile, ProfileTable, StrideEngine};
pub use error::{ErrorContext, OptionContext, Result, StrideError};
pub use model::{
    ArchitectureReport, Category, ComponentAnalysis, Detection, DetectionSet, RiskLevel, Severity,
    ThreatRisk, ThreatType,
};
pub use pipeline::{parse_detections_str, read_detections, ComponentInput};
pub use reports::{ReportFormat, ReportGenerator};
