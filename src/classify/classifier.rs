//! Name-to-category resolution.

use super::table::SEEDED_COMPONENTS;
use crate::error::{ClassificationErrorKind, Result, StrideError};
use crate::model::Category;
use indexmap::IndexMap;
use serde::Serialize;

/// Which rule resolved a component name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MatchMethod {
    /// The name is a key of the table, verbatim
    Exact,
    /// A key and the name contain one another, ignoring case
    Partial { matched_key: String },
    /// Nothing matched (or the name was blank)
    Fallback,
}

/// Category plus the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    #[serde(flatten)]
    pub method: MatchMethod,
}

#[derive(Debug, Clone)]
struct Entry {
    lowered: String,
    category: Category,
}

/// Resolves free-text component names to a [`Category`].
///
/// Resolution never fails:
///
/// 1. blank names map to [`Category::Other`];
/// 2. an exact, case-sensitive key match wins;
/// 3. otherwise the first key (in table order) that contains, or is contained
///    in, the name ignoring case wins;
/// 4. otherwise [`Category::Other`].
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    table: IndexMap<String, Entry>,
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryClassifier {
    /// Classifier over the seeded component table.
    #[must_use]
    pub fn new() -> Self {
        let mut table = IndexMap::with_capacity(SEEDED_COMPONENTS.len());
        for (name, category) in SEEDED_COMPONENTS {
            table.insert((*name).to_string(), entry(name, *category));
        }
        Self { table }
    }

    /// Seeded table plus caller mappings.
    ///
    /// A mapping for an existing key replaces its category in place; new keys
    /// are appended after the seeded ones.
    ///
    /// Blank keys (see [`is_blank`]) are skipped with a warning rather than
    /// inserted. An inserted `""` key would be a substring of every name and
    /// so send every name no earlier key matches to its category instead of
    /// [`Category::Other`]. Use
    /// [`try_with_custom_mappings`](Self::try_with_custom_mappings) to reject
    /// them instead.
    #[must_use]
    pub fn with_custom_mappings<I, K>(mappings: I) -> Self
    where
        I: IntoIterator<Item = (K, Category)>,
        K: Into<String>,
    {
        let mut classifier = Self::new();
        for (name, category) in mappings {
            let name = name.into();
            if is_blank(&name) {
                tracing::warn!("Ignoring custom mapping with empty component name");
                continue;
            }
            classifier.insert(name, category);
        }
        classifier
    }

    /// Like [`with_custom_mappings`](Self::with_custom_mappings) but takes
    /// category names as strings, failing on the first one that is unknown.
    pub fn try_with_custom_mappings<I, K, V>(mappings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut classifier = Self::new();
        for (name, category) in mappings {
            let name = name.into();
            if is_blank(&name) {
                return Err(StrideError::classification(
                    "custom mapping",
                    ClassificationErrorKind::EmptyName,
                ));
            }
            let category = category
                .as_ref()
                .parse::<Category>()
                .map_err(|_| StrideError::unknown_category(&name, category.as_ref()))?;
            classifier.insert(name, category);
        }
        Ok(classifier)
    }

    fn insert(&mut self, name: String, category: Category) {
        let value = entry(&name, category);
        if let Some(previous) = self.table.insert(name, value) {
            tracing::debug!(
                "Custom mapping overrides seeded category '{}'",
                previous.category
            );
        }
    }

    /// Resolve `component_name` to a category.
    #[must_use]
    pub fn classify(&self, component_name: &str) -> Category {
        self.explain(component_name).category
    }

    /// Resolve `component_name` and report which rule fired.
    #[must_use]
    pub fn explain(&self, component_name: &str) -> Classification {
        if is_blank(component_name) {
            return Classification {
                category: Category::Other,
                method: MatchMethod::Fallback,
            };
        }

        if let Some(found) = self.table.get(component_name) {
            return Classification {
                category: found.category,
                method: MatchMethod::Exact,
            };
        }

        let name_lower = component_name.to_lowercase();
        let partial = self.table.iter().find(|(_, e)| {
            name_lower.contains(e.lowered.as_str()) || e.lowered.contains(name_lower.as_str())
        });

        match partial {
            Some((key, found)) => {
                tracing::debug!("'{}' partially matched '{}'", component_name, key);
                Classification {
                    category: found.category,
                    method: MatchMethod::Partial {
                        matched_key: key.clone(),
                    },
                }
            }
            None => Classification {
                category: Category::Other,
                method: MatchMethod::Fallback,
            },
        }
    }

    /// All known component names, sorted.
    #[must_use]
    pub fn supported_components(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.table.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Known component names mapped to `category`, in table order.
    pub fn components_in(&self, category: Category) -> impl Iterator<Item = &str> {
        self.table
            .iter()
            .filter(move |(_, e)| e.category == category)
            .map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Whether `name` has nothing but whitespace.
///
/// The ASCII separators `\x1c`..`\x1f` count as whitespace here, though
/// [`char::is_whitespace`] excludes them, so a detector label made of
/// separator bytes is treated as blank.
#[must_use]
pub fn is_blank(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

fn entry(name: &str, category: Category) -> Entry {
    Entry {
        lowered: name.to_lowercase(),
        category,
    }
}
