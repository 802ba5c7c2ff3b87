//! Gateway handlers, grouped by surface.

pub mod flows;
pub mod onboarding;
pub mod quiz;

use crate::AppState;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

pub(crate) type JsonReply = (StatusCode, Json<serde_json::Value>);

pub(crate) fn error_reply(status: StatusCode, message: impl std::fmt::Display) -> JsonReply {
    (status, Json(serde_json::json!({ "status": "error", "error": message.to_string() })))
}

pub(crate) fn ok_reply(body: serde_json::Value) -> JsonReply {
    (StatusCode::OK, Json(body))
}

/// Resolves the request's user or short-circuits with 401 (no/bad token) or
/// 502 (auth provider unreachable).
pub(crate) async fn require_user(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<String, JsonReply> {
    match state.auth.current_user(headers).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(error_reply(StatusCode::UNAUTHORIZED, "missing or invalid bearer token")),
        Err(e) => {
            tracing::warn!(error = %e, "auth provider verification failed");
            Err(error_reply(StatusCode::BAD_GATEWAY, e))
        }
    }
}
