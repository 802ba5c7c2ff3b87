//! Auth collaborator: bearer-token verification against the hosted provider.
//!
//! This code only ever learns "current user or none" — sign-in, sessions, and
//! account state all live with the provider. Mock mode maps fixed test tokens
//! to user ids so the gateway runs without the provider.

use axum::http::HeaderMap;
use std::time::Duration;

const ENV_AUTH_MODE: &str = "PREPWISE_AUTH_MODE";
/// Token accepted in mock mode.
pub const MOCK_TOKEN: &str = "test-token";
/// User id the mock token resolves to.
pub const MOCK_USER: &str = "student-1";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Mock,
    Live,
}

impl AuthMode {
    pub fn from_env() -> Self {
        match std::env::var(ENV_AUTH_MODE).as_deref() {
            Ok("live") => AuthMode::Live,
            _ => AuthMode::Mock,
        }
    }
}

#[derive(serde::Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

#[derive(serde::Deserialize)]
struct VerifyResponse {
    user_id: Option<String>,
}

/// Resolves bearer tokens to user ids.
pub struct AuthClient {
    mode: AuthMode,
    verify_url: Option<String>,
    client: reqwest::Client,
}

impl AuthClient {
    pub fn new(mode: AuthMode, verify_url: Option<String>) -> Result<Self, BoxError> {
        if mode == AuthMode::Live && verify_url.is_none() {
            return Err("PREPWISE_AUTH_MODE=live requires PREPWISE_AUTH_VERIFY_URL".into());
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Ok(Self { mode, verify_url, client })
    }

    /// Resolves the request's bearer token. An absent, malformed, or unknown
    /// token is `None`; only a transport failure against the live provider is
    /// an error.
    pub async fn current_user(&self, headers: &HeaderMap) -> Result<Option<String>, BoxError> {
        let Some(token) = bearer_token(headers) else {
            return Ok(None);
        };
        match self.mode {
            AuthMode::Mock => Ok(mock_lookup(&token)),
            AuthMode::Live => {
                // Constructor guarantees the URL in live mode.
                let url = self.verify_url.as_deref().unwrap_or_default();
                let res = self
                    .client
                    .post(url)
                    .json(&VerifyRequest { token: &token })
                    .send()
                    .await?;
                if !res.status().is_success() {
                    return Ok(None);
                }
                let verified: VerifyResponse = res.json().await?;
                Ok(verified.user_id)
            }
        }
    }
}

/// Mock resolution: the fixed test token, or `mock:<user>` for arbitrary
/// local users.
fn mock_lookup(token: &str) -> Option<String> {
    if token == MOCK_TOKEN {
        return Some(MOCK_USER.to_string());
    }
    token.strip_prefix("mock:").map(|user| user.to_string()).filter(|u| !u.is_empty())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[tokio::test]
    async fn mock_token_resolves_to_fixed_user() {
        let auth = AuthClient::new(AuthMode::Mock, None).unwrap();
        let headers = headers_with("Bearer test-token");
        assert_eq!(auth.current_user(&headers).await.unwrap().as_deref(), Some(MOCK_USER));
    }

    #[tokio::test]
    async fn mock_prefix_resolves_to_named_user() {
        let auth = AuthClient::new(AuthMode::Mock, None).unwrap();
        let headers = headers_with("Bearer mock:dana");
        assert_eq!(auth.current_user(&headers).await.unwrap().as_deref(), Some("dana"));
    }

    #[tokio::test]
    async fn unknown_or_missing_token_is_anonymous() {
        let auth = AuthClient::new(AuthMode::Mock, None).unwrap();
        assert!(auth.current_user(&HeaderMap::new()).await.unwrap().is_none());
        let headers = headers_with("Bearer nonsense");
        assert!(auth.current_user(&headers).await.unwrap().is_none());
    }

    #[test]
    fn live_mode_requires_verify_url() {
        assert!(AuthClient::new(AuthMode::Live, None).is_err());
    }
}
