//! Categories command handler.

use crate::engine::StrideEngine;
use std::fmt::Write as _;

/// Render the category profile table, optionally listing seeded components.
#[must_use]
pub fn render_categories(engine: &StrideEngine, with_components: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<16} {:<18} {:>7} {:>10}",
        "CATEGORY", "ELEMENT", "STRIDE", "THREATS", "COMPONENTS"
    );

    for (category, profile) in engine.profiles().iter() {
        let components: Vec<&str> = engine.classifier().components_in(category).collect();
        let _ = writeln!(
            out,
            "{:<12} {:<16} {:<18} {:>7} {:>10}",
            category.as_str(),
            profile.element_type,
            profile.stride_summary,
            profile.threats.len(),
            components.len()
        );
        if with_components && !components.is_empty() {
            let _ = writeln!(out, "    {}", components.join(", "));
        }
    }

    out.truncate(out.trim_end().len());
    out
}

/// Run the categories command.
pub fn run_categories(engine: &StrideEngine, with_components: bool) {
    println!("{}", render_categories(engine, with_components));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_one_row_per_category() {
        let out = render_categories(&StrideEngine::new(), false);
        assert_eq!(out.lines().count(), 1 + Category::ALL.len());
        assert!(out.lines().nth(1).unwrap().starts_with("compute"));
        assert!(out.lines().last().unwrap().starts_with("other"));
    }

    #[test]
    fn test_with_components_lists_names() {
        let out = render_categories(&StrideEngine::new(), true);
        assert!(out.contains("EC2"));
        assert!(out.contains("DynamoDB"));
    }
}
