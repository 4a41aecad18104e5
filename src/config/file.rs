//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::{DEFAULT_IOU_THRESHOLD, DEFAULT_MIN_CONFIDENCE};
use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".stride-tools.yaml",
    ".stride-tools.yml",
    "stride-tools.yaml",
    "stride-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/stride-tools/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = find_git_root().as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("stride-tools")) {
            return Some(path);
        }
    }

    dirs::home_dir().as_deref().and_then(find_config_in_dir)
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml_ng::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml_ng::Error> for ConfigFileError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults count as set, so CLI
    /// arguments can be layered over file config.
    #[allow(clippy::float_cmp)]
    pub fn merge(&mut self, other: &Self) {
        // Analysis config
        if other.analysis.min_confidence != DEFAULT_MIN_CONFIDENCE {
            self.analysis.min_confidence = other.analysis.min_confidence;
        }
        if other.analysis.iou_threshold != DEFAULT_IOU_THRESHOLD {
            self.analysis.iou_threshold = other.analysis.iou_threshold;
        }
        if !other.analysis.deduplicate {
            self.analysis.deduplicate = false;
        }
        for (component, category) in &other.analysis.custom_mappings {
            self.analysis
                .custom_mappings
                .insert(component.clone(), *category);
        }

        // Output config - only override if explicitly set
        if other.output.format != ReportFormat::Summary {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if !other.output.pretty {
            self.output.pretty = false;
        }
        if other.output.min_severity.is_some() {
            self.output.min_severity = other.output.min_severity;
        }
        if other.output.max_items.is_some() {
            self.output.max_items = other.output.max_items;
        }

        // Behavior config
        if other.behavior.fail_on.is_some() {
            self.behavior.fail_on = other.behavior.fail_on;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# stride-tools configuration
# Place this file at .stride-tools.yaml in your project root or ~/.config/stride-tools/

{}
",
        serde_yaml_ng::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# stride-tools Configuration File
# ===============================
#
# Place it at:
#   - .stride-tools.yaml in your project root
#   - ~/.config/stride-tools/stride-tools.yaml for global config
#
# CLI arguments always override file settings.

# Detection filtering and classification
analysis:
  # Detections below this confidence are dropped (0.0-1.0)
  min_confidence: 0.25
  # IoU threshold recorded for the detector (0.0-1.0)
  iou_threshold: 0.45
  # Report each detected class once
  deduplicate: true
  # Extra component names mapped onto categories. Categories:
  # compute, database, storage, network, security, api_gateway, messaging,
  # monitoring, identity, ml_ai, devops, serverless, analytics, groups, other
  custom_mappings: {}
  #   Payments Service: compute
  #   Audit Bucket: storage

# Output configuration
output:
  # Format: summary, table, json, export, markdown
  format: summary
  # Output file path (omit for stdout)
  # file: stride-report.json
  # Disable colored output
  no_color: false
  # Pretty-print JSON formats
  pretty: true
  # Hide risks below this severity in text reports: CRITICAL, HIGH, MEDIUM, LOW
  # min_severity: HIGH
  # Maximum components listed in text reports
  # max_items: 50

# Behavior flags
behavior:
  # Exit with code 1 when the risk level reaches: LOW, MEDIUM, HIGH, CRITICAL
  # fail_on: HIGH
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, RiskLevel, Severity};
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".stride-tools.yaml");
        std::fs::write(&config_path, "analysis:\n  min_confidence: 0.5\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_dotfile() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("stride-tools.yml"), "").unwrap();
        let dotfile = tmp.path().join(".stride-tools.yaml");
        std::fs::write(&dotfile, "").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(dotfile));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
analysis:
  min_confidence: 0.6
  custom_mappings:
    Payments Service: compute
output:
  format: json
  min_severity: HIGH
behavior:
  fail_on: HIGH
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.analysis.min_confidence, 0.6);
        assert_eq!(
            config.analysis.custom_mappings.get("Payments Service"),
            Some(&Category::Compute)
        );
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.output.min_severity, Some(Severity::High));
        assert_eq!(config.behavior.fail_on, Some(RiskLevel::High));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "analysis: [not, a, map]\n").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder()
            .custom_mapping("Ledger", Category::Database)
            .output_format(ReportFormat::Markdown)
            .build();
        let overrides = AppConfig::builder()
            .min_confidence(0.7)
            .custom_mapping("Ledger", Category::Storage)
            .fail_on(Some(RiskLevel::Critical))
            .build();

        base.merge(&overrides);

        assert_eq!(base.analysis.min_confidence, 0.7);
        assert_eq!(
            base.analysis.custom_mappings.get("Ledger"),
            Some(&Category::Storage)
        );
        // Default format in the overrides does not clobber the file setting
        assert_eq!(base.output.format, ReportFormat::Markdown);
        assert_eq!(base.behavior.fail_on, Some(RiskLevel::Critical));
    }

    #[test]
    fn test_from_file_with_overrides() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("stride-tools.yaml");
        let yaml = "analysis:\n  min_confidence: 0.6\noutput:\n  format: markdown\nbehavior:\n  fail_on: HIGH\n";
        std::fs::write(&config_path, yaml).unwrap();

        let overrides = AppConfig::builder()
            .fail_on(Some(RiskLevel::Critical))
            .no_color(true)
            .build();
        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides);

        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.analysis.min_confidence, 0.6);
        assert_eq!(config.output.format, ReportFormat::Markdown);
        assert!(config.output.no_color);
        assert_eq!(config.behavior.fail_on, Some(RiskLevel::Critical));
    }

    #[test]
    fn test_generate_example_config_parses() {
        let example = generate_example_config();
        assert!(example.contains("analysis:"));
        assert!(example.contains("min_confidence"));
        let parsed: AppConfig = serde_yaml_ng::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_full_example_config_parses_to_defaults() {
        let parsed: AppConfig =
            serde_yaml_ng::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "analysis:\n  deduplicate: false").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
