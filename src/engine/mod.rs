//! STRIDE analysis engine.
//!
//! Combines the [`CategoryClassifier`](crate::classify::CategoryClassifier)
//! with the per-category [`ProfileTable`] to produce per-component analyses,
//! then aggregates them into an [`ArchitectureReport`](crate::model::ArchitectureReport)
//! with a normalized risk score.

mod analyzer;
mod profiles;
mod scoring;

pub use analyzer::StrideEngine;
pub use profiles::{CategoryProfile, ProfileTable};
pub use scoring::{calculate_risk_score, MAX_RISKS_PER_COMPONENT};
