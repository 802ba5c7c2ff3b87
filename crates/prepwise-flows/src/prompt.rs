//! Shared prompt-rendering helpers.

use prepwise_core::PerformanceRecord;

/// Renders per-topic performance counters as template rows, one per line.
pub fn performance_rows(records: &[PerformanceRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "- {}: {} correct, {} incorrect ({:.0}% accuracy)",
                r.topic,
                r.correct,
                r.incorrect,
                r.accuracy() * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Standard instruction suffix for flows that require a JSON-only reply.
pub fn json_only(shape: &str) -> String {
    format!(
        "Respond with a single JSON object matching exactly this shape, with no extra prose:\n{}",
        shape
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_rows_one_line_per_record() {
        let records = vec![
            PerformanceRecord { topic: "logic".into(), correct: 4, incorrect: 1 },
            PerformanceRecord { topic: "english".into(), correct: 0, incorrect: 2 },
        ];
        let rows = performance_rows(&records);
        assert_eq!(rows.lines().count(), 2);
        assert!(rows.contains("logic: 4 correct, 1 incorrect (80% accuracy)"));
        assert!(rows.contains("english: 0 correct, 2 incorrect (0% accuracy)"));
    }
}
