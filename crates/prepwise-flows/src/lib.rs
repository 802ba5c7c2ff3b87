//! Prepwise AI flows.
//!
//! A *flow* pairs a fixed natural-language template with typed serde input and
//! output records and executes it against the [`prepwise_core::ModelBridge`].
//! Each flow is one module, one `run` function, one outbound model call. No
//! retries, no caching; a failed call or unparseable reply propagates to the
//! caller as-is.

mod flashcards;
mod progress;
mod quiz_gen;
mod strategy;
mod study_plan;
mod summarize;
mod tutor;

pub(crate) mod prompt;

pub use flashcards::{run as generate_flashcards, Flashcard, FlashcardsInput, FlashcardsOutput};
pub use progress::{run as summarize_progress, ProgressInput, ProgressOutput};
pub use quiz_gen::{run as generate_quiz, QuizGenInput};
pub use strategy::{run as generate_strategy, StrategyInput};
pub use study_plan::{run as generate_study_plan, StudyPlanInput, StudyPlanOutput, WeeklyFocus};
pub use summarize::{run as summarize_material, SummarizeInput, SummarizeOutput};
pub use tutor::{run as tutor_chat, TutorInput, TutorOutput, RESOURCE_TOOL_NAME};

/// Flow error: the bridge's failure or a reply that failed schema parsing.
pub type FlowError = Box<dyn std::error::Error + Send + Sync>;
