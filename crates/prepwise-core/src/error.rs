//! Error type for core operations.

use thiserror::Error;

/// Errors surfaced by the core crate. Flow/bridge failures stay as boxed
/// errors at the async seams; this enum covers storage and lookup paths.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
