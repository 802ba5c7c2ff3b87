//! Summarization flow: study material in, titled key-point summary out.

use crate::prompt::json_only;
use crate::FlowError;
use prepwise_core::{ChatMessage, LlmMode, ModelBridge};
use serde::{Deserialize, Serialize};

const SYSTEM: &str = "You are a study assistant for exam preparation. \
    You turn raw study material into a short, accurate summary a student can review quickly.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeInput {
    pub topic: String,
    /// The material to summarize: pasted notes, a chapter, a resource body.
    pub material: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeOutput {
    pub title: String,
    pub key_points: Vec<String>,
    pub summary: String,
}

pub async fn run(bridge: &ModelBridge, input: SummarizeInput) -> Result<SummarizeOutput, FlowError> {
    if bridge.mode() == LlmMode::Mock {
        return Ok(SummarizeOutput {
            title: format!("{} — summary", input.topic),
            key_points: vec![
                format!("Core ideas of {} restated in one line each.", input.topic),
                "Definitions to memorize before practicing.".to_string(),
            ],
            summary: format!(
                "The material covers {} in {} characters; review the key points above before your next quiz.",
                input.topic,
                input.material.len()
            ),
        });
    }

    let user = format!(
        "Topic: {}\n\nMaterial:\n{}\n\n{}",
        input.topic,
        input.material,
        json_only(r#"{ "title": string, "key_points": [string], "summary": string }"#),
    );
    let value = bridge
        .complete_json(vec![ChatMessage::system(SYSTEM), ChatMessage::user(user)])
        .await?;
    Ok(serde_json::from_value(value)?)
}
