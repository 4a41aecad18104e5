//! Category profile table.

use crate::knowledge::threats_for;
use crate::model::{Category, ThreatRisk};
use indexmap::IndexMap;
use serde::Serialize;

/// Data-flow-diagram role and threat list shared by every component of a
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProfile {
    pub element_type: &'static str,
    pub stride_summary: &'static str,
    pub description: &'static str,
    pub threats: &'static [ThreatRisk],
}

const fn builtin_profile(category: Category) -> CategoryProfile {
    let (element_type, stride_summary, description) = match category {
        Category::Compute => (
            "Process",
            "S, T, E",
            "Compute resources (VMs, containers, instances)",
        ),
        Category::Database => ("Data Store", "T, I, D", "Relational and NoSQL databases"),
        Category::Storage => ("Data Store", "I, T, R", "Object and file storage"),
        Category::Network => ("Data Flow", "S, I, D", "Networking and connectivity"),
        Category::Security => ("Trust Boundary", "S, E, R", "Security and protection services"),
        Category::ApiGateway => (
            "Process",
            "S, D, I",
            "API gateways and integration services",
        ),
        Category::Messaging => ("Data Flow", "T, I, D", "Message queues and event streaming"),
        Category::Monitoring => ("Data Store", "T, I", "Monitoring and logging services"),
        Category::Identity => (
            "External Entity",
            "S, E",
            "Identity and authentication providers",
        ),
        Category::MlAi => ("Process", "T, I, D", "Machine learning and AI services"),
        Category::Serverless => ("Process", "I, D, E", "Serverless functions and services"),
        Category::Devops => ("Process", "T, I, E", "CI/CD and automation tooling"),
        Category::Analytics => ("Data Store", "I, T", "Analytics and data lake services"),
        Category::Groups => ("Trust Boundary", "S", "Resource groupings and boundaries"),
        Category::Other => ("External Entity", "S", "Uncategorized component"),
    };
    CategoryProfile {
        element_type,
        stride_summary,
        description,
        threats: threats_for(category),
    }
}

/// Read-only map from [`Category`] to its [`CategoryProfile`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    profiles: IndexMap<Category, CategoryProfile>,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfileTable {
    /// One profile per category, in [`Category::ALL`] order.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profiles: Category::ALL
                .iter()
                .map(|c| (*c, builtin_profile(*c)))
                .collect(),
        }
    }

    /// Copy of this table with `category` unregistered.
    #[must_use]
    pub fn without(&self, category: Category) -> Self {
        let mut profiles = self.profiles.clone();
        profiles.shift_remove(&category);
        Self { profiles }
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<&CategoryProfile> {
        self.profiles.get(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryProfile)> {
        self.profiles.iter().map(|(c, p)| (*c, p))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_one_profile() {
        let table = ProfileTable::builtin();
        assert_eq!(table.len(), Category::ALL.len());
        for category in Category::ALL {
            let profile = table.get(category).unwrap();
            assert!(!profile.threats.is_empty(), "{category} has no threats");
        }
    }

    #[test]
    fn test_table_order_follows_category_order() {
        let order: Vec<Category> = ProfileTable::builtin().iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_summary_letters_are_stride_letters() {
        for (category, profile) in ProfileTable::builtin().iter() {
            for letter in profile.stride_summary.split(", ") {
                assert!(
                    matches!(letter, "S" | "T" | "R" | "I" | "D" | "E"),
                    "{category}: bad letter {letter}"
                );
            }
        }
    }

    #[test]
    fn test_known_profiles() {
        let table = ProfileTable::builtin();
        let compute = table.get(Category::Compute).unwrap();
        assert_eq!(compute.element_type, "Process");
        assert_eq!(compute.stride_summary, "S, T, E");
        let storage = table.get(Category::Storage).unwrap();
        assert_eq!(storage.element_type, "Data Store");
        assert_eq!(storage.stride_summary, "I, T, R");
    }

    #[test]
    fn test_without_removes_only_one() {
        let table = ProfileTable::builtin().without(Category::Serverless);
        assert_eq!(table.len(), Category::ALL.len() - 1);
        assert!(table.get(Category::Serverless).is_none());
        assert!(table.get(Category::Compute).is_some());
    }
}
