//! Generated-quiz flow: the model writes fresh practice questions for a topic.
//!
//! Generated quizzes are returned to the caller and never persisted, same as
//! the statically sampled ones.

use crate::prompt::json_only;
use crate::FlowError;
use prepwise_core::{ChatMessage, LlmMode, ModelBridge, Question, Quiz};
use serde::{Deserialize, Serialize};

const SYSTEM: &str = "You are an exam author. You write original multiple-choice questions \
    with exactly four options, one correct answer index (0-3), and a short explanation.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizGenInput {
    pub topic: String,
    pub count: usize,
}

#[derive(Deserialize)]
struct GeneratedQuestions {
    questions: Vec<Question>,
}

pub async fn run(bridge: &ModelBridge, input: QuizGenInput) -> Result<Quiz, FlowError> {
    if bridge.mode() == LlmMode::Mock {
        let questions = (1..=input.count.max(1))
            .map(|i| Question {
                text: format!("Generated {} question {}?", input.topic, i),
                options: [
                    "Option A".to_string(),
                    "Option B".to_string(),
                    "Option C".to_string(),
                    "Option D".to_string(),
                ],
                correct_answer: 0,
                explanation: format!("Mock explanation {} for {}.", i, input.topic),
                topic: input.topic.clone(),
            })
            .collect();
        return Ok(Quiz::new(
            &format!("Generated {} Quiz", input.topic),
            &input.topic,
            questions,
        ));
    }

    let user = format!(
        "Write {} new multiple-choice questions for the exam topic \"{}\". \
         Each question must have exactly 4 options and set \"topic\" to \"{}\".\n\n{}",
        input.count,
        input.topic,
        input.topic,
        json_only(
            r#"{ "questions": [{ "text": string, "options": [string, string, string, string], "correct_answer": 0-3, "explanation": string, "topic": string }] }"#
        ),
    );
    let value = bridge
        .complete_json(vec![ChatMessage::system(SYSTEM), ChatMessage::user(user)])
        .await?;
    let generated: GeneratedQuestions = serde_json::from_value(value)?;
    Ok(Quiz::new(
        &format!("Generated {} Quiz", input.topic),
        &input.topic,
        generated.questions,
    ))
}
