//! User store round trip: a saved learning strategy is what flips the entry
//! guard from onboarding to dashboard.

use prepwise_core::{LearningStrategy, UserStore};

fn strategy(style: &str) -> LearningStrategy {
    LearningStrategy {
        learning_style: style.to_string(),
        strategy: format!("Lean into {} materials first.", style),
        created_at: chrono::Utc::now(),
    }
}

#[test]
fn strategy_persists_per_user() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = UserStore::open_path(dir.path().join("prepwise_users")).expect("open store");

    assert!(!store.has_strategy("alice").unwrap());
    store.save_strategy("alice", &strategy("visual")).unwrap();

    let loaded = store.get_strategy("alice").unwrap().expect("strategy saved");
    assert_eq!(loaded.learning_style, "visual");
    assert!(store.has_strategy("alice").unwrap());

    // Other users are unaffected.
    assert!(store.get_strategy("bob").unwrap().is_none());
}

#[test]
fn strategy_survives_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("prepwise_users");
    {
        let store = UserStore::open_path(&path).expect("open store");
        store.save_strategy("carol", &strategy("auditory")).unwrap();
    }
    let reopened = UserStore::open_path(&path).expect("reopen store");
    let loaded = reopened.get_strategy("carol").unwrap().expect("persisted");
    assert_eq!(loaded.learning_style, "auditory");
}
