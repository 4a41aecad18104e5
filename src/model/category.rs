//! Component categories and severity scales.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Security category of a detected cloud component.
///
/// The set is closed: every component resolves to exactly one value, with
/// [`Category::Other`] as the fallback.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Compute,
    Database,
    Storage,
    Network,
    Security,
    ApiGateway,
    Messaging,
    Monitoring,
    Identity,
    MlAi,
    Devops,
    Serverless,
    Analytics,
    Groups,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Compute,
        Self::Database,
        Self::Storage,
        Self::Network,
        Self::Security,
        Self::ApiGateway,
        Self::Messaging,
        Self::Monitoring,
        Self::Identity,
        Self::MlAi,
        Self::Devops,
        Self::Serverless,
        Self::Analytics,
        Self::Groups,
        Self::Other,
    ];

    /// Serialized name (snake_case)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compute => "compute",
            Self::Database => "database",
            Self::Storage => "storage",
            Self::Network => "network",
            Self::Security => "security",
            Self::ApiGateway => "api_gateway",
            Self::Messaging => "messaging",
            Self::Monitoring => "monitoring",
            Self::Identity => "identity",
            Self::MlAi => "ml_ai",
            Self::Devops => "devops",
            Self::Serverless => "serverless",
            Self::Analytics => "analytics",
            Self::Groups => "groups",
            Self::Other => "other",
        }
    }

    /// Human-readable name for reports
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Compute => "Compute",
            Self::Database => "Database",
            Self::Storage => "Storage",
            Self::Network => "Network",
            Self::Security => "Security",
            Self::ApiGateway => "API Gateway",
            Self::Messaging => "Messaging",
            Self::Monitoring => "Monitoring",
            Self::Identity => "Identity",
            Self::MlAi => "ML/AI",
            Self::Devops => "DevOps",
            Self::Serverless => "Serverless",
            Self::Analytics => "Analytics",
            Self::Groups => "Groups",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Severity of a single threat.
///
/// Ordering follows rank: `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, highest first
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Scoring weight used by the risk aggregation
    #[must_use]
    pub const fn weight(&self) -> u32 {
        match self {
            Self::Critical => 10,
            Self::High => 7,
            Self::Medium => 4,
            Self::Low => 1,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Parse a severity name. Returns `None` for unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" => Some(Self::Critical),
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring weight of a raw severity string; unknown names weigh nothing.
#[must_use]
pub fn severity_weight(name: &str) -> u32 {
    Severity::parse(name).map_or(0, |s| s.weight())
}

/// Architecture-level risk level derived from a 0-100 score.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Map a score to a level. Lower bounds are inclusive.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Self::Critical
        } else if score >= 50.0 {
            Self::High
        } else if score >= 25.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
