//! Component input loading.
//!
//! Reads detector output or plain component-name lists from JSON.

use crate::config::AnalysisConfig;
use crate::error::{ErrorContext, InputErrorKind, Result, StrideError};
use crate::model::{Detection, DetectionSet};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Accepted JSON shapes, tried in order.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Detections(Vec<Detection>),
    Names(Vec<String>),
    /// A previously exported document carrying a `detections` array
    Export { detections: Vec<Detection> },
}

/// Components read from an input source
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentInput {
    /// Plain names, analyzed as given
    Names(Vec<String>),
    /// Detector output, filtered by confidence before analysis
    Detections(DetectionSet),
}

impl ComponentInput {
    /// Names to analyze under the given settings.
    ///
    /// Plain names are passed through unchanged; detections are filtered by
    /// `min_confidence` and optionally deduplicated.
    #[must_use]
    pub fn component_names(&self, analysis: &AnalysisConfig) -> Vec<String> {
        match self {
            Self::Names(names) => names.clone(),
            Self::Detections(set) => {
                set.component_names(analysis.min_confidence, analysis.deduplicate)
            }
        }
    }

    /// Raw detections, if the input carried any
    #[must_use]
    pub const fn detections(&self) -> Option<&DetectionSet> {
        match self {
            Self::Names(_) => None,
            Self::Detections(set) => Some(set),
        }
    }

    /// Consume the input, returning the detections if any
    #[must_use]
    pub fn into_detections(self) -> Option<DetectionSet> {
        match self {
            Self::Names(_) => None,
            Self::Detections(set) => Some(set),
        }
    }
}

/// Parse detections or component names from a JSON string.
///
/// Accepts an array of `{"class", "confidence", "box"}` objects, an array of
/// strings, or an export document with a `detections` array.
pub fn parse_detections_str(content: &str) -> Result<ComponentInput> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("parsing detections JSON")?;

    let raw: RawInput = serde_json::from_value(value).map_err(|_| {
        StrideError::input("parsing detections JSON", InputErrorKind::UnexpectedShape)
    })?;

    match raw {
        RawInput::Names(names) => Ok(ComponentInput::Names(names)),
        RawInput::Detections(detections) | RawInput::Export { detections } => {
            validate_confidences(&detections)?;
            Ok(ComponentInput::Detections(DetectionSet::new(detections)))
        }
    }
}

fn validate_confidences(detections: &[Detection]) -> Result<()> {
    match detections
        .iter()
        .find(|d| !(0.0..=1.0).contains(&d.confidence))
    {
        Some(bad) => Err(StrideError::input(
            "validating detections",
            InputErrorKind::InvalidConfidence {
                class_name: bad.class_name.clone(),
                value: bad.confidence,
            },
        )),
        None => Ok(()),
    }
}

/// Read a detections file. A path of `-` reads standard input.
pub fn read_detections(path: &Path) -> Result<ComponentInput> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| StrideError::io("<stdin>", e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| StrideError::io(path, e))?
    };

    let input = parse_detections_str(&content)
        .with_context(|| format!("reading {}", path.display()))?;

    match &input {
        ComponentInput::Names(names) => {
            tracing::debug!("Read {} component names from {}", names.len(), path.display());
        }
        ComponentInput::Detections(set) => {
            tracing::debug!("Read {} detections from {}", set.len(), path.display());
        }
    }
    Ok(input)
}
