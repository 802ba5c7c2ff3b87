//! Study-plan flow: per-topic performance counters in, weekly plan out.
//!
//! The template iterates the performance rows so the model sees every topic's
//! counters, weakest first.

use crate::prompt::{json_only, performance_rows};
use crate::FlowError;
use prepwise_core::{ChatMessage, LlmMode, ModelBridge, PerformanceRecord};
use serde::{Deserialize, Serialize};

const SYSTEM: &str = "You are a study coach. Given a student's per-topic answer counters, \
    you produce a focused weekly study plan that spends the most time on the weakest topics.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanInput {
    pub records: Vec<PerformanceRecord>,
    pub hours_per_week: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyFocus {
    pub topic: String,
    pub hours: u32,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanOutput {
    pub overview: String,
    pub focus: Vec<WeeklyFocus>,
}

pub async fn run(bridge: &ModelBridge, input: StudyPlanInput) -> Result<StudyPlanOutput, FlowError> {
    if bridge.mode() == LlmMode::Mock {
        let mut records = input.records.clone();
        records.sort_by(|a, b| a.accuracy().total_cmp(&b.accuracy()));
        let hours_each = (input.hours_per_week / records.len().max(1) as u32).max(1);
        let focus = records
            .iter()
            .map(|r| WeeklyFocus {
                topic: r.topic.clone(),
                hours: hours_each,
                activities: vec![
                    format!("Review {} notes", r.topic),
                    format!("One timed {} quiz", r.topic),
                ],
            })
            .collect();
        return Ok(StudyPlanOutput {
            overview: format!(
                "Weakest topics first across {} hours per week.",
                input.hours_per_week
            ),
            focus,
        });
    }

    let user = format!(
        "The student has {} hours available per week. Current per-topic performance:\n{}\n\n{}",
        input.hours_per_week,
        performance_rows(&input.records),
        json_only(
            r#"{ "overview": string, "focus": [{ "topic": string, "hours": number, "activities": [string] }] }"#
        ),
    );
    let value = bridge
        .complete_json(vec![ChatMessage::system(SYSTEM), ChatMessage::user(user)])
        .await?;
    Ok(serde_json::from_value(value)?)
}
