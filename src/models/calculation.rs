use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// Outcome figures for a trade. Derived on demand, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeCalculation {
    pub potential_profit: f64,
    pub potential_loss: f64,
    pub profit_percentage: f64,
    pub loss_percentage: f64,
    pub risk_reward_ratio: f64,
    pub risk_level: RiskLevel,
}

impl TradeCalculation {
    /// Ratio rounded to two decimals, as shown in the history table.
    pub fn display_ratio(&self) -> f64 {
        (self.risk_reward_ratio * 100.0).round() / 100.0
    }
}
