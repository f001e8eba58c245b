pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::Trade;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored history is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Key-value persistence for the trade history. A key that was never saved
/// loads as an empty list.
pub trait HistoryStore {
    fn load(&self, key: &str) -> Result<Vec<Trade>, StoreError>;
    fn save(&mut self, key: &str, trades: &[Trade]) -> Result<(), StoreError>;
}
