//! Flashcard generation flow.

use crate::prompt::json_only;
use crate::FlowError;
use prepwise_core::{ChatMessage, LlmMode, ModelBridge};
use serde::{Deserialize, Serialize};

const SYSTEM: &str = "You are a study assistant for exam preparation. \
    You write concise question/answer flashcards a student can drill from.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardsInput {
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardsOutput {
    pub topic: String,
    pub flashcards: Vec<Flashcard>,
}

pub async fn run(
    bridge: &ModelBridge,
    input: FlashcardsInput,
) -> Result<FlashcardsOutput, FlowError> {
    if bridge.mode() == LlmMode::Mock {
        let flashcards = (1..=input.count.max(1))
            .map(|i| Flashcard {
                front: format!("{} drill card {}", input.topic, i),
                back: format!("Key fact {} about {}.", i, input.topic),
            })
            .collect();
        return Ok(FlashcardsOutput { topic: input.topic, flashcards });
    }

    let user = format!(
        "Write {} flashcards for the exam topic \"{}\".\n\n{}",
        input.count,
        input.topic,
        json_only(r#"{ "topic": string, "flashcards": [{ "front": string, "back": string }] }"#),
    );
    let value = bridge
        .complete_json(vec![ChatMessage::system(SYSTEM), ChatMessage::user(user)])
        .await?;
    Ok(serde_json::from_value(value)?)
}
