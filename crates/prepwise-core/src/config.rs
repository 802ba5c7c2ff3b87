//! Configuration loaded from `.env` / environment, plus the optional
//! `user_config.toml` that lets a user supply their own LLM API key without
//! touching the environment.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Process-wide configuration, loaded once at gateway startup.
///
/// | Env | Default | Description |
/// |-----|---------|-------------|
/// | PREPWISE_STORAGE_PATH | ./data/prepwise | sled user store location |
/// | PREPWISE_BIND_ADDR | 127.0.0.1:8080 | gateway listen address |
/// | PREPWISE_LLM_MODE | mock | "mock" \| "live" — see [`crate::bridge::LlmMode`] |
/// | PREPWISE_AUTH_MODE | mock | "mock" \| "live" — token verification mode |
/// | PREPWISE_AUTH_VERIFY_URL | (none) | live-mode auth verify endpoint |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    pub storage_path: String,
    pub bind_addr: String,
    pub auth_verify_url: Option<String>,
}

impl CoreConfig {
    /// Load from environment. Unset values fall back to the defaults above.
    pub fn from_env() -> Result<Self, CoreError> {
        let storage_path = env_string("PREPWISE_STORAGE_PATH", "./data/prepwise");
        let bind_addr = env_string("PREPWISE_BIND_ADDR", "127.0.0.1:8080");
        let auth_verify_url = env_opt_string("PREPWISE_AUTH_VERIFY_URL");
        if bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(CoreError::Config(format!(
                "PREPWISE_BIND_ADDR is not a socket address: {}",
                bind_addr
            )));
        }
        Ok(Self {
            storage_path,
            bind_addr,
            auth_verify_url,
        })
    }
}

fn env_string(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

fn env_opt_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn default_true() -> bool {
    true
}

/// User-specific configuration stored in `user_config.toml`. Lets a user
/// supply a personal LLM key without editing `.env`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Personal LLM provider API key.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Preferred model identifier.
    #[serde(default)]
    pub llm_model: Option<String>,
    /// Preferred chat-completions endpoint.
    #[serde(default)]
    pub llm_api_url: Option<String>,
    /// Set to false after initial setup.
    #[serde(default = "default_true")]
    pub first_run: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            llm_model: None,
            llm_api_url: None,
            first_run: default_true(),
        }
    }
}

impl UserConfig {
    pub fn default_path() -> PathBuf {
        PathBuf::from("user_config.toml")
    }

    /// Load from the default path; a missing file yields defaults.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from_path(&Self::default_path())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("read {}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| CoreError::Config(format!("parse user config: {}", e)))
    }

    /// API key priority: user_config.toml > PREPWISE_LLM_API_KEY > OPENROUTER_API_KEY.
    pub fn effective_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("PREPWISE_LLM_API_KEY").ok())
            .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn effective_model(&self) -> Option<String> {
        self.llm_model
            .clone()
            .or_else(|| std::env::var("PREPWISE_LLM_MODEL").ok())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn effective_api_url(&self) -> Option<String> {
        self.llm_api_url
            .clone()
            .or_else(|| std::env::var("PREPWISE_LLM_API_URL").ok())
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_user_config_falls_back_to_defaults() {
        let cfg = UserConfig::load_from_path(Path::new("definitely-not-here.toml")).unwrap();
        assert!(cfg.api_key.is_none());
        assert!(cfg.first_run);
    }

    #[test]
    fn user_config_parses_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_config.toml");
        fs::write(&path, "api_key = \"sk-test\"\nllm_model = \"some/model\"\n").unwrap();
        let cfg = UserConfig::load_from_path(&path).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.llm_model.as_deref(), Some("some/model"));
    }
}
