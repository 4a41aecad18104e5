//! Classify command handler.
//!
//! Shows which category each name resolves to and why.

use crate::classify::{CategoryClassifier, Classification, MatchMethod};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct ClassifiedName<'a> {
    component: &'a str,
    #[serde(flatten)]
    classification: Classification,
}

/// Render classifications for `names`, one per line or as a JSON array.
pub fn render_classifications(
    classifier: &CategoryClassifier,
    names: &[String],
    json: bool,
) -> Result<String> {
    if json {
        let rows: Vec<ClassifiedName<'_>> = names
            .iter()
            .map(|name| ClassifiedName {
                component: name,
                classification: classifier.explain(name),
            })
            .collect();
        return serde_json::to_string_pretty(&rows).context("failed to serialize classifications");
    }

    let width = names
        .iter()
        .map(|n| unicode_width::UnicodeWidthStr::width(n.as_str()))
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = names
        .iter()
        .map(|name| {
            let result = classifier.explain(name);
            let how = match &result.method {
                MatchMethod::Exact => "exact".to_string(),
                MatchMethod::Partial { matched_key } => format!("partial via '{matched_key}'"),
                MatchMethod::Fallback => "fallback".to_string(),
            };
            let pad = width.saturating_sub(unicode_width::UnicodeWidthStr::width(name.as_str()));
            format!("{name}{}  → {:<12} ({how})", " ".repeat(pad), result.category.as_str())
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Run the classify command.
pub fn run_classify(classifier: &CategoryClassifier, names: &[String], json: bool) -> Result<()> {
    println!("{}", render_classifications(classifier, names, json)?);
    Ok(())
}
