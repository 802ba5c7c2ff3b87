//! Flow endpoints: each POST packages the typed body into its prompt template
//! and performs one model call. A bridge failure maps to 502 with no retry.

use super::{error_reply, ok_reply, JsonReply};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use prepwise_flows as flows;

fn flow_error(e: flows::FlowError) -> JsonReply {
    tracing::warn!(error = %e, "flow failed");
    error_reply(StatusCode::BAD_GATEWAY, e)
}

/// POST /api/v1/flows/summarize
pub async fn summarize_post(
    State(state): State<AppState>,
    Json(input): Json<flows::SummarizeInput>,
) -> JsonReply {
    match flows::summarize_material(&state.bridge, input).await {
        Ok(out) => ok_reply(serde_json::json!(out)),
        Err(e) => flow_error(e),
    }
}

/// POST /api/v1/flows/flashcards
pub async fn flashcards_post(
    State(state): State<AppState>,
    Json(input): Json<flows::FlashcardsInput>,
) -> JsonReply {
    match flows::generate_flashcards(&state.bridge, input).await {
        Ok(out) => ok_reply(serde_json::json!(out)),
        Err(e) => flow_error(e),
    }
}

/// POST /api/v1/flows/quiz — model-generated questions, never persisted.
pub async fn quiz_gen_post(
    State(state): State<AppState>,
    Json(input): Json<flows::QuizGenInput>,
) -> JsonReply {
    match flows::generate_quiz(&state.bridge, input).await {
        Ok(quiz) => ok_reply(serde_json::json!(quiz)),
        Err(e) => flow_error(e),
    }
}

/// POST /api/v1/flows/study-plan
pub async fn study_plan_post(
    State(state): State<AppState>,
    Json(input): Json<flows::StudyPlanInput>,
) -> JsonReply {
    match flows::generate_study_plan(&state.bridge, input).await {
        Ok(out) => ok_reply(serde_json::json!(out)),
        Err(e) => flow_error(e),
    }
}

/// POST /api/v1/flows/progress-summary
pub async fn progress_summary_post(
    State(state): State<AppState>,
    Json(input): Json<flows::ProgressInput>,
) -> JsonReply {
    match flows::summarize_progress(&state.bridge, input).await {
        Ok(out) => ok_reply(serde_json::json!(out)),
        Err(e) => flow_error(e),
    }
}

/// POST /api/v1/tutor/chat
pub async fn tutor_chat_post(
    State(state): State<AppState>,
    Json(input): Json<flows::TutorInput>,
) -> JsonReply {
    match flows::tutor_chat(&state.bridge, input).await {
        Ok(out) => ok_reply(serde_json::json!(out)),
        Err(e) => flow_error(e),
    }
}
