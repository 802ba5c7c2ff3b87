//! Axum-based API gateway for Prepwise.
//!
//! Holds the LLM API key and all per-user state; the web frontend is a
//! stateless client and never sees provider credentials. Every user-triggered
//! action is one request/response pair awaiting one hosted call; there is no
//! background scheduling and no shared mutable state beyond the `Arc`s below.

mod auth;
mod guard;
mod handlers;

use auth::{AuthClient, AuthMode};
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use prepwise_core::{CoreConfig, ModelBridge, PoolCatalog, UserStore};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) pools: Arc<PoolCatalog>,
    pub(crate) store: Arc<UserStore>,
    pub(crate) bridge: Arc<ModelBridge>,
    pub(crate) auth: Arc<AuthClient>,
}

fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/entry", get(handlers::onboarding::entry_get))
        .route("/api/v1/topics", get(handlers::quiz::topics_get))
        .route("/api/v1/quiz/:topic", get(handlers::quiz::topic_quiz_get))
        .route("/api/v1/case-study", get(handlers::quiz::case_study_get))
        .route("/api/v1/exam-simulation", get(handlers::quiz::exam_simulation_get))
        .route("/api/v1/psychometric", get(handlers::quiz::psychometric_get))
        .route("/api/v1/resources", get(handlers::quiz::resources_get))
        .route("/api/v1/flows/summarize", post(handlers::flows::summarize_post))
        .route("/api/v1/flows/flashcards", post(handlers::flows::flashcards_post))
        .route("/api/v1/flows/quiz", post(handlers::flows::quiz_gen_post))
        .route("/api/v1/flows/study-plan", post(handlers::flows::study_plan_post))
        .route("/api/v1/flows/progress-summary", post(handlers::flows::progress_summary_post))
        .route("/api/v1/tutor/chat", post(handlers::flows::tutor_chat_post))
        .route("/api/v1/onboarding/status", get(handlers::onboarding::status_get))
        .route("/api/v1/onboarding/strategy", post(handlers::onboarding::strategy_post))
        .layer(cors)
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[tokio::main]
async fn main() {
    // Load .env first: the LLM key lives in the gateway environment only.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[prepwise-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[prepwise-gateway] config error: {}", e);
            std::process::exit(1);
        }
    };

    let store = match UserStore::open_path(Path::new(&config.storage_path).join("prepwise_users")) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("[prepwise-gateway] user store at {}: {}", config.storage_path, e);
            std::process::exit(1);
        }
    };

    let auth = match AuthClient::new(AuthMode::from_env(), config.auth_verify_url.clone()) {
        Ok(auth) => Arc::new(auth),
        Err(e) => {
            eprintln!("[prepwise-gateway] auth config error: {}", e);
            std::process::exit(1);
        }
    };

    let bridge = Arc::new(ModelBridge::from_env());
    tracing::info!(mode = ?bridge.mode(), "LLM bridge ready");

    let state = AppState {
        pools: Arc::new(PoolCatalog::new()),
        store,
        bridge,
        auth,
    };
    let app = build_app(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("[prepwise-gateway] bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %config.bind_addr, "prepwise-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("[prepwise-gateway] server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use prepwise_core::{LlmMode, UserConfig, EXAM_SIMULATION_SIZE};
    use tower::util::ServiceExt;

    fn test_app(dir: &tempfile::TempDir) -> Router {
        let state = AppState {
            pools: Arc::new(PoolCatalog::new()),
            store: Arc::new(UserStore::open_path(dir.path().join("users")).unwrap()),
            bridge: Arc::new(ModelBridge::with_mode(LlmMode::Mock, &UserConfig::default())),
            auth: Arc::new(AuthClient::new(AuthMode::Mock, None).unwrap()),
        };
        build_app(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_request(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(&dir)
            .oneshot(get_request("/api/v1/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn topic_quiz_returns_requested_count() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(&dir)
            .oneshot(get_request("/api/v1/quiz/logic?count=3", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let quiz = body_json(response).await;
        assert_eq!(quiz["questions"].as_array().unwrap().len(), 3);
        assert_eq!(quiz["topic"], "logic");
    }

    #[tokio::test]
    async fn unknown_topic_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(&dir)
            .oneshot(get_request("/api/v1/quiz/no-such-topic", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn exam_simulation_is_full_size_and_timed() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(&dir)
            .oneshot(get_request("/api/v1/exam-simulation", None))
            .await
            .unwrap();
        let quiz = body_json(response).await;
        assert_eq!(quiz["questions"].as_array().unwrap().len(), EXAM_SIMULATION_SIZE);
        assert!(quiz["time_limit_minutes"].as_u64().is_some());
    }

    #[tokio::test]
    async fn entry_guard_routes_through_each_state() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        // Anonymous → login.
        let response = app
            .clone()
            .oneshot(get_request("/api/v1/entry", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["redirect"], "login");

        // Authenticated, no saved strategy → onboarding.
        let response = app
            .clone()
            .oneshot(get_request("/api/v1/entry", Some("test-token")))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["redirect"], "onboarding");

        // Complete onboarding (mock flow), then → dashboard.
        let response = app
            .clone()
            .oneshot(post_request(
                "/api/v1/onboarding/strategy",
                Some("test-token"),
                serde_json::json!({
                    "learning_style": "visual",
                    "goals": "pass in June",
                    "hours_per_week": 5
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request("/api/v1/entry", Some("test-token")))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["redirect"], "dashboard");
    }

    #[tokio::test]
    async fn onboarding_requires_a_token() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(&dir)
            .oneshot(get_request("/api/v1/onboarding/status", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn tutor_chat_answers_in_mock_mode() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(&dir)
            .oneshot(post_request(
                "/api/v1/tutor/chat",
                None,
                serde_json::json!({
                    "messages": [{ "role": "user", "content": "Explain syllogisms" }]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["reply"].as_str().unwrap().contains("syllogisms"));
    }

    #[tokio::test]
    async fn resources_filter_by_category() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(&dir)
            .oneshot(get_request("/api/v1/resources?category=english", None))
            .await
            .unwrap();
        let body = body_json(response).await;
        let resources = body["resources"].as_array().unwrap();
        assert!(!resources.is_empty());
        assert!(resources.iter().all(|r| r["category"] == "english"));
    }
}
