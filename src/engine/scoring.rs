//! Architecture risk scoring.

use crate::model::{ComponentAnalysis, Severity};

/// Risks per component assumed by the normalization ceiling.
///
/// Changing the number of threats per category does not change this
/// constant; scores stay comparable with previously stored reports.
pub const MAX_RISKS_PER_COMPONENT: usize = 3;

/// Normalized 0-100 risk score for a set of analyses.
///
/// Sums the severity weights of every risk and divides by the ceiling of
/// `analyses * MAX_RISKS_PER_COMPONENT * weight(CRITICAL)`. The result is
/// rounded to one decimal and capped at 100. No analyses score 0.
#[must_use]
pub fn calculate_risk_score(analyses: &[ComponentAnalysis]) -> f64 {
    let total: u32 = analyses
        .iter()
        .flat_map(|a| a.risks)
        .map(|r| r.severity.weight())
        .sum();
    let max_possible = analyses.len() * MAX_RISKS_PER_COMPONENT * Severity::Critical.weight() as usize;
    if max_possible == 0 {
        return 0.0;
    }
    round1(f64::from(total) / max_possible as f64 * 100.0).min(100.0)
}

/// Round to one decimal place.
///
/// Rounds the exact decimal value of `value`, with ties going to the even
/// digit, so stored scores keep their established values (`16.25 -> 16.2`).
/// Float formatting rounds this way; scaling by ten first would not.
fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
