//! Component-name classification.
//!
//! Maps the free-text class names emitted by the diagram detector onto the
//! closed [`Category`](crate::model::Category) taxonomy using a seeded,
//! insertion-ordered lookup table.

mod classifier;
mod table;

pub use classifier::{is_blank, CategoryClassifier, Classification, MatchMethod};
pub use table::SEEDED_COMPONENTS;
