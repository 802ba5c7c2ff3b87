//! Shared records used across the Prepwise crates.
//!
//! Everything here is a plain serde record with a create/read lifecycle:
//! quizzes are assembled on demand and never persisted, performance counters
//! are updated by the caller and only read here.

use serde::{Deserialize, Serialize};

/// Whether a study resource lives inside the app or points at an external URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Internal,
    External,
}

/// One entry in the static study-resource catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyResource {
    pub title: String,
    pub category: String,
    /// Where the material comes from: a chapter reference, a URL, a handout name.
    pub source: String,
    pub kind: ResourceKind,
}

/// A single multiple-choice question. Exactly four options by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    /// Index into `options` (0..4).
    pub correct_answer: usize,
    pub explanation: String,
    pub topic: String,
}

/// A quiz assembled from a pool. Built per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub is_psychometric: bool,
    /// Minutes allowed; only the exam simulation sets this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<u32>,
}

impl Quiz {
    /// Assembles a quiz around an already-sampled question list.
    pub fn new(title: &str, topic: &str, questions: Vec<Question>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            topic: topic.to_string(),
            questions,
            is_psychometric: false,
            time_limit_minutes: None,
        }
    }

    pub fn psychometric(mut self) -> Self {
        self.is_psychometric = true;
        self
    }

    pub fn with_time_limit(mut self, minutes: u32) -> Self {
        self.time_limit_minutes = Some(minutes);
        self
    }
}

/// Per-topic answer counters, maintained by the caller and passed as flow input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub topic: String,
    pub correct: u32,
    pub incorrect: u32,
}

impl PerformanceRecord {
    /// Fraction of answered questions that were correct; 0.0 when nothing answered.
    pub fn accuracy(&self) -> f32 {
        let total = self.correct + self.incorrect;
        if total == 0 {
            0.0
        } else {
            self.correct as f32 / total as f32
        }
    }
}

/// The onboarding artifact: a user's declared learning style plus the strategy
/// text generated for it. Presence of a stored strategy is what routes a user
/// to the dashboard instead of onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningStrategy {
    pub learning_style: String,
    pub strategy: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_handles_zero_answers() {
        let rec = PerformanceRecord { topic: "algebra".into(), correct: 0, incorrect: 0 };
        assert_eq!(rec.accuracy(), 0.0);
    }

    #[test]
    fn accuracy_is_correct_fraction() {
        let rec = PerformanceRecord { topic: "algebra".into(), correct: 3, incorrect: 1 };
        assert!((rec.accuracy() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn quiz_builders_set_flags() {
        let quiz = Quiz::new("Exam", "mixed", Vec::new()).psychometric().with_time_limit(45);
        assert!(quiz.is_psychometric);
        assert_eq!(quiz.time_limit_minutes, Some(45));
        assert!(!quiz.id.is_empty());
    }
}
