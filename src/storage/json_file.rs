use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::{HistoryStore, StoreError};
use crate::models::Trade;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Vec<Trade>, StoreError> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let trades: Vec<Trade> = serde_json::from_str(&content)?;
        debug!("Loaded {} trades from {}", trades.len(), path.display());
        Ok(trades)
    }

    fn save(&mut self, key: &str, trades: &[Trade]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(trades)?;
        fs::write(&path, json)?;
        debug!("Saved {} trades to {}", trades.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::trade;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load("trades").unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested"));
        let trades = vec![trade("newest"), trade("oldest")];
        store.save("trades", &trades).unwrap();

        assert!(store.path_for("trades").exists());
        let loaded = store.load("trades").unwrap();
        assert_eq!(loaded, trades);
    }

    #[test]
    fn keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        store.save("a", &[trade("1")]).unwrap();
        assert!(store.load("b").unwrap().is_empty());
        assert_eq!(store.load("a").unwrap().len(), 1);
    }

    #[test]
    fn corrupt_file_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.path_for("trades"), "not json").unwrap();
        assert!(matches!(store.load("trades"), Err(StoreError::Serde(_))));
    }
}
