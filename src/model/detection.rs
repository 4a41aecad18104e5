//! Detector output consumed by the analysis pipeline.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One labelled bounding box produced by the diagram detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(rename = "class", alias = "class_name")]
    pub class_name: String,
    pub confidence: f64,
    /// `[x1, y1, x2, y2]` in image pixels
    #[serde(rename = "box", alias = "bbox", default)]
    pub bbox: [f64; 4],
}

impl Detection {
    pub fn new(class_name: impl Into<String>, confidence: f64) -> Self {
        Self {
            class_name: class_name.into(),
            confidence,
            bbox: [0.0; 4],
        }
    }
}

/// Ordered detections for one diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionSet {
    pub detections: Vec<Detection>,
}

impl DetectionSet {
    #[must_use]
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    /// Detections at or above `min_confidence`
    pub fn confident(&self, min_confidence: f64) -> impl Iterator<Item = &Detection> {
        self.detections
            .iter()
            .filter(move |d| d.confidence >= min_confidence)
    }

    /// Component names at or above `min_confidence`, in first-seen order.
    ///
    /// With `deduplicate`, repeated class names are reported once.
    #[must_use]
    pub fn component_names(&self, min_confidence: f64, deduplicate: bool) -> Vec<String> {
        let names = self.confident(min_confidence).map(|d| d.class_name.clone());
        if deduplicate {
            names.collect::<IndexSet<_>>().into_iter().collect()
        } else {
            names.collect()
        }
    }
}

impl FromIterator<Detection> for DetectionSet {
    fn from_iter<I: IntoIterator<Item = Detection>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
