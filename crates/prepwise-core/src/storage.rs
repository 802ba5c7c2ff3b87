//! Per-user persistence: sled long-term store with a DashMap hot cache.
//!
//! The only record kept here is the onboarding [`LearningStrategy`]; its
//! presence is what routes a returning user straight to the dashboard.

use crate::error::CoreError;
use crate::model::LearningStrategy;
use dashmap::DashMap;
use sled::Db;
use std::path::Path;
use std::sync::Arc;

const STRATEGY_PREFIX: &str = "strategy/";

fn strategy_key(user_id: &str) -> String {
    format!("{}{}", STRATEGY_PREFIX, user_id)
}

/// Opens the sled database once at startup; reads go through the hot cache.
pub struct UserStore {
    db: Db,
    cache: Arc<DashMap<String, Vec<u8>>>,
}

impl UserStore {
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let db = sled::open(path)?;
        Ok(Self {
            db,
            cache: Arc::new(DashMap::new()),
        })
    }

    /// Persists a user's learning strategy. Writes both the cache and sled.
    pub fn save_strategy(
        &self,
        user_id: &str,
        strategy: &LearningStrategy,
    ) -> Result<(), CoreError> {
        let key = strategy_key(user_id);
        let bytes = serde_json::to_vec(strategy)?;
        self.db.insert(key.as_bytes(), bytes.as_slice())?;
        self.cache.insert(key, bytes);
        Ok(())
    }

    /// Reads a user's learning strategy, cache first.
    pub fn get_strategy(&self, user_id: &str) -> Result<Option<LearningStrategy>, CoreError> {
        let key = strategy_key(user_id);
        if let Some(bytes) = self.cache.get(&key) {
            return Ok(Some(serde_json::from_slice(&bytes)?));
        }
        match self.db.get(key.as_bytes())? {
            Some(bytes) => {
                self.cache.insert(key, bytes.to_vec());
                Ok(Some(serde_json::from_slice(&bytes)?))
            }
            None => Ok(None),
        }
    }

    /// True when the user has completed onboarding.
    pub fn has_strategy(&self, user_id: &str) -> Result<bool, CoreError> {
        Ok(self.get_strategy(user_id)?.is_some())
    }
}
