//! LLM bridge: the single seam to the hosted model provider.
//!
//! Speaks the OpenAI-compatible chat-completions wire format (OpenRouter by
//! default). One outbound call per invocation: no retries, no caching, no
//! idempotency; a repeated call with identical input may come back different.
//! A failed call, or a reply that fails JSON extraction, is the one error path
//! and propagates to the caller unrecovered.
//!
//! API key priority: `user_config.toml` > `PREPWISE_LLM_API_KEY` >
//! `OPENROUTER_API_KEY`.

use crate::config::UserConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_MODEL: &str = "meta-llama/llama-3.3-70b-instruct";
const ENV_LLM_MODE: &str = "PREPWISE_LLM_MODE";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Mock returns deterministic canned generations so flows and tests run
/// offline; Live calls the configured provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LlmMode {
    #[default]
    Mock,
    Live,
}

impl LlmMode {
    pub fn from_env() -> Self {
        match std::env::var(ENV_LLM_MODE).as_deref() {
            Ok("live") => LlmMode::Live,
            _ => LlmMode::Mock,
        }
    }
}

/// One chat turn, as sent on the wire and as accepted from tutor clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Sends rendered prompts to a mock LLM or a live OpenAI-compatible API.
pub struct ModelBridge {
    mode: LlmMode,
    model: String,
    api_url: String,
    client: reqwest::Client,
}

impl ModelBridge {
    /// Mode from `PREPWISE_LLM_MODE`, model/URL from user config then env.
    pub fn from_env() -> Self {
        let user = UserConfig::load().unwrap_or_default();
        Self::with_mode(LlmMode::from_env(), &user)
    }

    pub fn with_mode(mode: LlmMode, user: &UserConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            mode,
            model: user.effective_model().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url: user.effective_api_url().unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            client,
        }
    }

    pub fn mode(&self) -> LlmMode {
        self.mode
    }

    fn api_key() -> Result<String, BoxError> {
        UserConfig::load()
            .unwrap_or_default()
            .effective_api_key()
            .ok_or_else(|| "Missing LLM API key (user_config.toml, PREPWISE_LLM_API_KEY, or OPENROUTER_API_KEY)".into())
    }

    /// One chat-completions call. In mock mode this returns a deterministic
    /// canned generation; flows with structured outputs short-circuit earlier
    /// with typed mock results.
    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BoxError> {
        if self.mode == LlmMode::Mock {
            return Ok(mock_generate(&messages));
        }
        let key = Self::api_key()?;
        let body = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: Some(0.4),
            max_tokens: Some(2048),
        };

        tracing::debug!(model = %self.model, "dispatching chat completion");

        let res = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", key))
            .header("HTTP-Referer", "https://prepwise.local")
            .header("X-Title", "Prepwise")
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(format!("LLM API error {}: {}", status, text).into());
        }

        let parsed: ChatResponse = res.json().await?;
        parsed
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| "LLM reply contained no choices".into())
    }

    /// `complete` followed by structured-output extraction: the reply must
    /// contain a JSON object or array, optionally inside a code fence. Parse
    /// failure propagates as the flow's single error path.
    pub async fn complete_json(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<serde_json::Value, BoxError> {
        let raw = self.complete(messages).await?;
        extract_json(&raw)
            .ok_or_else(|| format!("LLM reply was not valid JSON: {}", preview(&raw)).into())
    }
}

fn preview(text: &str) -> String {
    text.chars().take(120).collect()
}

/// Deterministic mock generation: echoes a preview of the last user turn.
fn mock_generate(messages: &[ChatMessage]) -> String {
    let last = messages
        .iter()
        .rev()
        .find(|m| m.role == "user")
        .map(|m| m.content.as_str())
        .unwrap_or("");
    format!(
        "[Generated - mock LLM]\nBased on your request ({}), here is a study-focused response.",
        preview(last)
    )
}

/// Pulls the first JSON object or array out of a model reply, tolerating
/// surrounding prose and markdown code fences.
fn extract_json(raw: &str) -> Option<serde_json::Value> {
    let trimmed = raw.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Some(value);
    }
    let open = trimmed.find(['{', '['])?;
    let close_char = if trimmed.as_bytes()[open] == b'{' { '}' } else { ']' };
    let close = trimmed.rfind(close_char)?;
    if close <= open {
        return None;
    }
    serde_json::from_str(&trimmed[open..=close]).ok()
}
