//! Onboarding strategy flow: questionnaire answers in, a persisted
//! [`LearningStrategy`] out. This is the one flow whose output outlives the
//! request — the gateway saves it and the entry guard keys off its presence.

use crate::prompt::json_only;
use crate::FlowError;
use prepwise_core::{ChatMessage, LearningStrategy, LlmMode, ModelBridge};
use serde::{Deserialize, Serialize};

const SYSTEM: &str = "You are a learning coach. From a student's declared learning style and \
    goals you write a short, personal study strategy for their exam preparation.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInput {
    /// Declared learning style, e.g. "visual", "auditory", "practice-heavy".
    pub learning_style: String,
    pub goals: String,
    pub hours_per_week: u32,
}

#[derive(Deserialize)]
struct StrategyReply {
    strategy: String,
}

pub async fn run(bridge: &ModelBridge, input: StrategyInput) -> Result<LearningStrategy, FlowError> {
    let strategy = if bridge.mode() == LlmMode::Mock {
        format!(
            "As a {} learner with {} hours a week, start each session with {}-friendly material, \
             then close with a short timed quiz. Goal: {}.",
            input.learning_style, input.hours_per_week, input.learning_style, input.goals
        )
    } else {
        let user = format!(
            "Learning style: {}\nGoals: {}\nHours available per week: {}\n\n{}",
            input.learning_style,
            input.goals,
            input.hours_per_week,
            json_only(r#"{ "strategy": string }"#),
        );
        let value = bridge
            .complete_json(vec![ChatMessage::system(SYSTEM), ChatMessage::user(user)])
            .await?;
        serde_json::from_value::<StrategyReply>(value)?.strategy
    };

    Ok(LearningStrategy {
        learning_style: input.learning_style,
        strategy,
        created_at: chrono::Utc::now(),
    })
}
