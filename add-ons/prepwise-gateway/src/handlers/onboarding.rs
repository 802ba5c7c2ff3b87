//! Entry guard and onboarding endpoints: the only handlers that touch
//! per-user state.

use super::{error_reply, ok_reply, require_user, JsonReply};
use crate::guard::entry_target;
use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use prepwise_flows as flows;

/// GET /api/v1/entry — the routing guard, executed once per app entry.
pub async fn entry_get(State(state): State<AppState>, headers: HeaderMap) -> JsonReply {
    let user = match state.auth.current_user(&headers).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "auth provider verification failed");
            return error_reply(StatusCode::BAD_GATEWAY, e);
        }
    };
    let has_strategy = match &user {
        Some(user_id) => match state.store.has_strategy(user_id) {
            Ok(found) => found,
            Err(e) => return error_reply(StatusCode::INTERNAL_SERVER_ERROR, e),
        },
        None => false,
    };
    let target = entry_target(user.as_deref(), has_strategy);
    ok_reply(serde_json::json!({ "redirect": target }))
}

/// GET /api/v1/onboarding/status
pub async fn status_get(State(state): State<AppState>, headers: HeaderMap) -> JsonReply {
    let user_id = match require_user(&state, &headers).await {
        Ok(user) => user,
        Err(reply) => return reply,
    };
    match state.store.get_strategy(&user_id) {
        Ok(strategy) => ok_reply(serde_json::json!({
            "needs_onboarding": strategy.is_none(),
            "strategy": strategy,
        })),
        Err(e) => error_reply(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

/// POST /api/v1/onboarding/strategy — run the strategy flow and persist the
/// result; the next entry check routes this user to the dashboard.
pub async fn strategy_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<flows::StrategyInput>,
) -> JsonReply {
    let user_id = match require_user(&state, &headers).await {
        Ok(user) => user,
        Err(reply) => return reply,
    };
    let strategy = match flows::generate_strategy(&state.bridge, input).await {
        Ok(strategy) => strategy,
        Err(e) => {
            tracing::warn!(error = %e, "strategy flow failed");
            return error_reply(StatusCode::BAD_GATEWAY, e);
        }
    };
    if let Err(e) = state.store.save_strategy(&user_id, &strategy) {
        return error_reply(StatusCode::INTERNAL_SERVER_ERROR, e);
    }
    tracing::info!(user = %user_id, "onboarding complete; strategy saved");
    ok_reply(serde_json::json!({ "status": "ok", "strategy": strategy }))
}
