//! prepwise-core: shared types, static question pools, the quiz sampler,
//! the per-user store, and the LLM bridge.
//!
//! The gateway and the flows crate both depend on this crate so they share one
//! set of records and one bridge configuration.

mod bridge;
mod config;
mod error;
mod model;
mod pools;
mod resources;
mod sampler;
mod storage;

pub use bridge::{ChatMessage, LlmMode, ModelBridge};
pub use config::{CoreConfig, UserConfig};
pub use error::CoreError;
pub use model::{
    LearningStrategy, PerformanceRecord, Question, Quiz, ResourceKind, StudyResource,
};
pub use pools::{
    PoolCatalog, TopicSummary, DEFAULT_QUIZ_SIZE, EXAM_SIMULATION_SIZE, EXAM_TIME_LIMIT_MINUTES,
};
pub use resources::{all_resources, resources_by_category, resources_tool_json};
pub use sampler::sample;
pub use storage::UserStore;
