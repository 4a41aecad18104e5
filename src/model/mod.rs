//! Core data model shared by the classifier, engine, and reporters.
//!
//! All types here are plain values: they carry no back-references and are
//! never mutated after construction, so they can be freely shared across
//! threads.

mod analysis;
mod category;
mod detection;
mod threat;

pub use analysis::{ArchitectureReport, ComponentAnalysis, SeverityCounts};
pub use category::{severity_weight, Category, RiskLevel, Severity, UnknownCategory};
pub use detection::{Detection, DetectionSet};
pub use threat::{ThreatRisk, ThreatType};
