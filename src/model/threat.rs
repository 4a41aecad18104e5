//! STRIDE threat records.

use super::Severity;
use serde::Serialize;
use std::fmt;

/// STRIDE threat class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ThreatType {
    Spoofing,
    Tampering,
    Repudiation,
    #[serde(rename = "Information Disclosure")]
    InformationDisclosure,
    #[serde(rename = "Denial of Service")]
    DenialOfService,
    #[serde(rename = "Elevation of Privilege")]
    ElevationOfPrivilege,
}

impl ThreatType {
    /// All six STRIDE classes in acronym order
    pub const ALL: [Self; 6] = [
        Self::Spoofing,
        Self::Tampering,
        Self::Repudiation,
        Self::InformationDisclosure,
        Self::DenialOfService,
        Self::ElevationOfPrivilege,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Spoofing => "Spoofing",
            Self::Tampering => "Tampering",
            Self::Repudiation => "Repudiation",
            Self::InformationDisclosure => "Information Disclosure",
            Self::DenialOfService => "Denial of Service",
            Self::ElevationOfPrivilege => "Elevation of Privilege",
        }
    }

    /// Letter in the STRIDE acronym
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            Self::Spoofing => 'S',
            Self::Tampering => 'T',
            Self::Repudiation => 'R',
            Self::InformationDisclosure => 'I',
            Self::DenialOfService => 'D',
            Self::ElevationOfPrivilege => 'E',
        }
    }
}

impl fmt::Display for ThreatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single known threat for a category of component.
///
/// Records live in the static knowledge base and are shared by reference
/// across every analysis of the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThreatRisk {
    #[serde(rename = "type")]
    pub threat_type: ThreatType,
    /// Display label, e.g. "S - Spoofing"
    #[serde(rename = "threat")]
    pub label: &'static str,
    pub detail: &'static str,
    pub mitigation: &'static str,
    pub severity: Severity,
}
