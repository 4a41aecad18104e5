//! Unified error types for stride-tools.
//!
//! The classifier and engine never fail on well-typed input. Errors only
//! arise in the outer layers: reading detections, rendering reports, loading
//! configuration, and applying custom classifier mappings.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stride-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StrideError {
    /// Errors while reading component names or detections
    #[error("Invalid input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// Errors while building a classifier
    #[error("Classification setup failed: {context}")]
    Classification {
        context: String,
        #[source]
        source: ClassificationErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Expected an array of detections or component names")]
    UnexpectedShape,

    #[error("Invalid confidence {value} for '{class_name}' (must be 0.0-1.0)")]
    InvalidConfidence { class_name: String, value: f64 },

    #[error("No components supplied")]
    Empty,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

/// Specific classification error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClassificationErrorKind {
    #[error("Unknown category '{category}' for component '{component}'")]
    UnknownCategory { component: String, category: String },

    #[error("Empty component name in custom mapping")]
    EmptyName,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for stride-tools operations
pub type Result<T> = std::result::Result<T, StrideError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl StrideError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create a classification error
    pub fn classification(context: impl Into<String>, source: ClassificationErrorKind) -> Self {
        Self::Classification {
            context: context.into(),
            source,
        }
    }

    /// Create a classification error for a mapping naming an unknown category
    pub fn unknown_category(component: impl Into<String>, category: impl Into<String>) -> Self {
        Self::classification(
            "custom mapping",
            ClassificationErrorKind::UnknownCategory {
                component: component.into(),
                category: category.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for StrideError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for StrideError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, so a
/// failure deep in the pipeline reads as "outer: middle: inner".
///
/// # Example
///
/// ```ignore
/// use stride_tools::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<DetectionSet> {
///     let content = std::fs::read_to_string(path)
///         .context("reading detections file")?;
///
///     parse_detections_str(&content)
///         .with_context(|| format!("parsing detections from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<StrideError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: StrideError, new_ctx: &str) -> StrideError {
    match err {
        StrideError::Input {
            context: existing,
            source,
        } => StrideError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        StrideError::Report {
            context: existing,
            source,
        } => StrideError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        StrideError::Classification {
            context: existing,
            source,
        } => StrideError::Classification {
            context: chain_context(new_ctx, &existing),
            source,
        },
        StrideError::Io {
            path,
            message,
            source,
        } => StrideError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        StrideError::Config(msg) => StrideError::Config(chain_context(new_ctx, &msg)),
        StrideError::Validation(msg) => StrideError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| StrideError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| StrideError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StrideError::unknown_category("MyService", "mainframe");
        let display = err.to_string();
        assert!(
            display.contains("Classification"),
            "Error message should mention classification: {}",
            display
        );

        let err = StrideError::input("detections.json", InputErrorKind::UnexpectedShape);
        assert!(err.to_string().contains("detections.json"));
    }

    #[test]
    fn test_unknown_category_source_names_both_sides() {
        let err = StrideError::unknown_category("MyService", "mainframe");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        let source = source.unwrap_or_default();
        assert!(source.contains("MyService"));
        assert!(source.contains("mainframe"));
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StrideError::io("/path/to/detections.json", io_err);

        assert!(err.to_string().contains("/path/to/detections.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(StrideError::input("base", InputErrorKind::Empty))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(StrideError::Input { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_serde_json_error_converts_to_input() {
        let err: StrideError = serde_json::from_str::<Vec<String>>("{")
            .map_err(StrideError::from)
            .unwrap_err();
        assert!(matches!(
            err,
            StrideError::Input {
                source: InputErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(StrideError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let some_value: Option<i32> = Some(42);
        assert_eq!(some_value.context_none("missing value").unwrap(), 42);

        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(StrideError::Validation(msg)) => assert_eq!(msg, "missing value"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
