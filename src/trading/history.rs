use serde::{Deserialize, Serialize};

use crate::models::{Trade, TradeId};

/// Accepted trades, newest first. Trades are only ever added at the front or
/// removed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeHistory {
    trades: Vec<Trade>,
}

impl TradeHistory {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    pub fn prepend(&mut self, trade: Trade) {
        self.trades.insert(0, trade);
    }

    /// Returns false and leaves the history untouched when `id` is unknown.
    pub fn remove(&mut self, id: &TradeId) -> bool {
        let before = self.trades.len();
        self.trades.retain(|t| &t.id != id);
        self.trades.len() != before
    }

    pub fn find(&self, id: &TradeId) -> Option<&Trade> {
        self.trades.iter().find(|t| &t.id == id)
    }

    pub fn latest(&self) -> Option<&Trade> {
        self.trades.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trade> {
        self.trades.iter()
    }

    pub fn as_slice(&self) -> &[Trade] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
