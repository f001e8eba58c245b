use std::collections::HashMap;

use super::{HistoryStore, StoreError};
use crate::models::Trade;

/// In-process store holding serialized JSON per key, the same shape a
/// browser's local storage would hold.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, e.g. data written by an older version.
    pub fn insert_raw(&mut self, key: &str, json: impl Into<String>) {
        self.entries.insert(key.to_string(), json.into());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Vec<Trade>, StoreError> {
        match self.entries.get(key) {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, key: &str, trades: &[Trade]) -> Result<(), StoreError> {
        let json = serde_json::to_string(trades)?;
        self.entries.insert(key.to_string(), json);
        Ok(())
    }
}
