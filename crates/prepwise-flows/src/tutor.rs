//! Tutor chat flow: conversational tutoring over a message history.
//!
//! The flow declares one callable tool, `list_study_resources`. When the model
//! replies with a tool request instead of an answer, the flow executes the
//! lookup locally and re-prompts once with the result; there is no tool loop.

use crate::FlowError;
use prepwise_core::{resources_tool_json, ChatMessage, LlmMode, ModelBridge};
use serde::{Deserialize, Serialize};

/// Name the model must echo to request the resource catalog.
pub const RESOURCE_TOOL_NAME: &str = "list_study_resources";

const SYSTEM: &str = "You are a patient exam tutor. Answer the student's question directly and \
    briefly. You have one tool: if the student asks what to study or which materials exist, \
    reply with exactly {\"tool\": \"list_study_resources\"} and nothing else; you will receive \
    the catalog and must then answer using it. Otherwise, just answer.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorInput {
    /// Prior conversation, oldest first; roles are "user" / "assistant".
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorOutput {
    pub reply: String,
    /// True when the model fetched the study-resource catalog this turn.
    pub used_resource_tool: bool,
}

#[derive(Deserialize)]
struct ToolRequest {
    tool: String,
}

fn is_resource_tool_call(reply: &str) -> bool {
    serde_json::from_str::<ToolRequest>(reply.trim())
        .map(|req| req.tool == RESOURCE_TOOL_NAME)
        .unwrap_or(false)
}

pub async fn run(bridge: &ModelBridge, input: TutorInput) -> Result<TutorOutput, FlowError> {
    if bridge.mode() == LlmMode::Mock {
        let last = input
            .messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
            .unwrap_or("");
        let wants_resources = last.to_lowercase().contains("resource");
        let reply = if wants_resources {
            let catalog = resources_tool_json();
            let count = catalog["resources"].as_array().map(|a| a.len()).unwrap_or(0);
            format!("There are {} study resources; start with the ones for your weakest topic.", count)
        } else {
            format!("Good question. Regarding \"{}\": break it into the definition, one worked example, and one practice question.", last)
        };
        return Ok(TutorOutput { reply, used_resource_tool: wants_resources });
    }

    let mut messages = Vec::with_capacity(input.messages.len() + 1);
    messages.push(ChatMessage::system(SYSTEM));
    messages.extend(input.messages.iter().cloned());

    let first = bridge.complete(messages.clone()).await?;
    if !is_resource_tool_call(&first) {
        return Ok(TutorOutput { reply: first, used_resource_tool: false });
    }

    tracing::debug!(tool = RESOURCE_TOOL_NAME, "tutor flow executing resource tool");
    messages.push(ChatMessage { role: "assistant".to_string(), content: first });
    messages.push(ChatMessage::system(format!(
        "Tool result for {}:\n{}",
        RESOURCE_TOOL_NAME,
        resources_tool_json()
    )));
    let second = bridge.complete(messages).await?;
    Ok(TutorOutput { reply: second, used_resource_tool: true })
}
