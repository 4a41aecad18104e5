//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! logic for one subcommand.

mod analyze;
mod categories;
mod classify;

pub use analyze::run_analyze;
pub use categories::{render_categories, run_categories};
pub use classify::{render_classifications, run_classify};

// Re-export config types used by handlers
pub use crate::config::{AnalyzeConfig, InputSource};
