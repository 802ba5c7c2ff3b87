//! Flow behavior in mock mode: every flow produces a well-formed typed output
//! without a network call. Live replies go through the same serde parsing, so
//! shape mismatches would fail identically there.

use prepwise_core::{ChatMessage, LlmMode, ModelBridge, PerformanceRecord, UserConfig};
use prepwise_flows as flows;

fn mock_bridge() -> ModelBridge {
    ModelBridge::with_mode(LlmMode::Mock, &UserConfig::default())
}

fn sample_records() -> Vec<PerformanceRecord> {
    vec![
        PerformanceRecord { topic: "logic".into(), correct: 9, incorrect: 1 },
        PerformanceRecord { topic: "english".into(), correct: 2, incorrect: 8 },
    ]
}

#[tokio::test]
async fn summarize_returns_key_points() {
    let out = flows::summarize_material(
        &mock_bridge(),
        flows::SummarizeInput { topic: "logic".into(), material: "syllogisms...".into() },
    )
    .await
    .expect("mock summarize");
    assert!(out.title.contains("logic"));
    assert!(!out.key_points.is_empty());
}

#[tokio::test]
async fn flashcards_respect_count() {
    let out = flows::generate_flashcards(
        &mock_bridge(),
        flows::FlashcardsInput { topic: "english".into(), count: 4 },
    )
    .await
    .expect("mock flashcards");
    assert_eq!(out.flashcards.len(), 4);
    assert!(out.flashcards.iter().all(|c| !c.front.is_empty() && !c.back.is_empty()));
}

#[tokio::test]
async fn generated_quiz_has_four_options_per_question() {
    let quiz = flows::generate_quiz(
        &mock_bridge(),
        flows::QuizGenInput { topic: "logic".into(), count: 3 },
    )
    .await
    .expect("mock quiz");
    assert_eq!(quiz.questions.len(), 3);
    for question in &quiz.questions {
        assert_eq!(question.options.len(), 4);
        assert!(question.correct_answer < 4);
    }
}

#[tokio::test]
async fn study_plan_puts_weakest_topic_first() {
    let out = flows::generate_study_plan(
        &mock_bridge(),
        flows::StudyPlanInput { records: sample_records(), hours_per_week: 6 },
    )
    .await
    .expect("mock study plan");
    assert_eq!(out.focus.first().map(|f| f.topic.as_str()), Some("english"));
    assert!(out.focus.iter().all(|f| f.hours >= 1));
}

#[tokio::test]
async fn progress_summary_names_strongest_and_weakest() {
    let out = flows::summarize_progress(
        &mock_bridge(),
        flows::ProgressInput { records: sample_records() },
    )
    .await
    .expect("mock progress");
    assert_eq!(out.strongest_topic, "logic");
    assert_eq!(out.weakest_topic, "english");
}

#[tokio::test]
async fn strategy_flow_builds_a_persistable_record() {
    let strategy = flows::generate_strategy(
        &mock_bridge(),
        flows::StrategyInput {
            learning_style: "visual".into(),
            goals: "pass in June".into(),
            hours_per_week: 5,
        },
    )
    .await
    .expect("mock strategy");
    assert_eq!(strategy.learning_style, "visual");
    assert!(strategy.strategy.contains("visual"));
}

#[tokio::test]
async fn tutor_uses_resource_tool_when_asked_about_resources() {
    let out = flows::tutor_chat(
        &mock_bridge(),
        flows::TutorInput {
            messages: vec![ChatMessage::user("Which study resources should I use?")],
        },
    )
    .await
    .expect("mock tutor");
    assert!(out.used_resource_tool);
    assert!(!out.reply.is_empty());
}

#[tokio::test]
async fn tutor_answers_directly_otherwise() {
    let out = flows::tutor_chat(
        &mock_bridge(),
        flows::TutorInput {
            messages: vec![ChatMessage::user("Explain modus tollens")],
        },
    )
    .await
    .expect("mock tutor");
    assert!(!out.used_resource_tool);
    assert!(out.reply.contains("modus tollens"));
}
