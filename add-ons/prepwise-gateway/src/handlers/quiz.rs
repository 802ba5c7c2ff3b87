//! Practice-surface handlers: topic quizzes, case studies, exam simulation,
//! psychometric practice, and the study-resource catalog.

use super::{error_reply, ok_reply, JsonReply};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use prepwise_core::{resources_by_category, all_resources, DEFAULT_QUIZ_SIZE};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct QuizParams {
    pub count: Option<usize>,
}

fn requested_count(params: &QuizParams) -> usize {
    params.count.unwrap_or(DEFAULT_QUIZ_SIZE).max(1)
}

/// GET /api/v1/topics
pub async fn topics_get(State(state): State<AppState>) -> JsonReply {
    ok_reply(serde_json::json!({ "topics": state.pools.topics() }))
}

/// GET /api/v1/quiz/:topic?count=K
pub async fn topic_quiz_get(
    State(state): State<AppState>,
    Path(topic): Path<String>,
    Query(params): Query<QuizParams>,
) -> JsonReply {
    match state.pools.topic_quiz(&topic, requested_count(&params)) {
        Ok(quiz) => ok_reply(serde_json::json!(quiz)),
        Err(e) => error_reply(StatusCode::NOT_FOUND, e),
    }
}

/// GET /api/v1/case-study?count=K
pub async fn case_study_get(
    State(state): State<AppState>,
    Query(params): Query<QuizParams>,
) -> JsonReply {
    ok_reply(serde_json::json!(state.pools.case_study_quiz(requested_count(&params))))
}

/// GET /api/v1/psychometric?count=K
pub async fn psychometric_get(
    State(state): State<AppState>,
    Query(params): Query<QuizParams>,
) -> JsonReply {
    ok_reply(serde_json::json!(state.pools.psychometric_quiz(requested_count(&params))))
}

/// GET /api/v1/exam-simulation — full 30-question timed draw.
pub async fn exam_simulation_get(State(state): State<AppState>) -> JsonReply {
    ok_reply(serde_json::json!(state.pools.exam_simulation()))
}

#[derive(Deserialize)]
pub struct ResourceParams {
    pub category: Option<String>,
}

/// GET /api/v1/resources?category=...
pub async fn resources_get(Query(params): Query<ResourceParams>) -> JsonReply {
    let resources = match params.category.as_deref() {
        Some(category) => resources_by_category(category),
        None => all_resources(),
    };
    ok_reply(serde_json::json!({ "resources": resources }))
}
