//! Progress-summary flow: a natural-language readout of the same per-topic
//! counters the study plan consumes.

use crate::prompt::{json_only, performance_rows};
use crate::FlowError;
use prepwise_core::{ChatMessage, LlmMode, ModelBridge, PerformanceRecord};
use serde::{Deserialize, Serialize};

const SYSTEM: &str = "You are a study coach. You summarize a student's progress in plain, \
    encouraging language and name their strongest and weakest topics.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressInput {
    pub records: Vec<PerformanceRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressOutput {
    pub summary: String,
    pub strongest_topic: String,
    pub weakest_topic: String,
}

pub async fn run(bridge: &ModelBridge, input: ProgressInput) -> Result<ProgressOutput, FlowError> {
    if bridge.mode() == LlmMode::Mock {
        let strongest = input
            .records
            .iter()
            .max_by(|a, b| a.accuracy().total_cmp(&b.accuracy()))
            .map(|r| r.topic.clone())
            .unwrap_or_default();
        let weakest = input
            .records
            .iter()
            .min_by(|a, b| a.accuracy().total_cmp(&b.accuracy()))
            .map(|r| r.topic.clone())
            .unwrap_or_default();
        return Ok(ProgressOutput {
            summary: format!(
                "You have answered questions across {} topics. Keep drilling {}.",
                input.records.len(),
                weakest
            ),
            strongest_topic: strongest,
            weakest_topic: weakest,
        });
    }

    let user = format!(
        "Per-topic performance:\n{}\n\n{}",
        performance_rows(&input.records),
        json_only(r#"{ "summary": string, "strongest_topic": string, "weakest_topic": string }"#),
    );
    let value = bridge
        .complete_json(vec![ChatMessage::system(SYSTEM), ChatMessage::user(user)])
        .await?;
    Ok(serde_json::from_value(value)?)
}
