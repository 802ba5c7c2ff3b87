//! Static study-resource catalog.
//!
//! Loaded from a fixed in-code list; the tutor flow exposes it to the model as
//! the `list_study_resources` tool.

use crate::model::{ResourceKind, StudyResource};

fn resource(title: &str, category: &str, source: &str, kind: ResourceKind) -> StudyResource {
    StudyResource {
        title: title.to_string(),
        category: category.to_string(),
        source: source.to_string(),
        kind,
    }
}

/// The full catalog, in authored order.
pub fn all_resources() -> Vec<StudyResource> {
    use ResourceKind::{External, Internal};
    vec![
        resource("Algebra Refresher", "quantitative-reasoning", "Chapter 2: Equations and Ratios", Internal),
        resource("Percentages and Rates Drill", "quantitative-reasoning", "Worksheet QR-4", Internal),
        resource("Khan Academy: Linear Equations", "quantitative-reasoning", "https://www.khanacademy.org/math/algebra", External),
        resource("Analogy Patterns Guide", "verbal-reasoning", "Chapter 5: Word Relations", Internal),
        resource("Sentence Completion Strategies", "verbal-reasoning", "Handout VR-2", Internal),
        resource("Grammar Essentials", "english", "Chapter 1: Tense and Agreement", Internal),
        resource("Purdue OWL: Verb Tenses", "english", "https://owl.purdue.edu/owl/general_writing/grammar/", External),
        resource("Formal Logic Primer", "logic", "Chapter 7: Syllogisms", Internal),
        resource("Series and Sequences Workbook", "psychometric", "Workbook PS-1", Internal),
        resource("Timed Practice: Full Simulation Tips", "exam-strategy", "Handout ES-3", Internal),
    ]
}

/// Catalog entries whose category matches (case-insensitive).
pub fn resources_by_category(category: &str) -> Vec<StudyResource> {
    all_resources()
        .into_iter()
        .filter(|r| r.category.eq_ignore_ascii_case(category))
        .collect()
}

/// The catalog rendered as JSON for the tutor flow's tool result.
pub fn resources_tool_json() -> serde_json::Value {
    serde_json::json!({
        "tool": "list_study_resources",
        "resources": all_resources(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_nonempty_and_filterable() {
        assert!(!all_resources().is_empty());
        let english = resources_by_category("English");
        assert!(!english.is_empty());
        assert!(english.iter().all(|r| r.category == "english"));
    }

    #[test]
    fn unknown_category_filters_to_empty() {
        assert!(resources_by_category("astrophysics").is_empty());
    }
}
