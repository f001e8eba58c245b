pub mod calculation;
pub mod direction;
pub mod risk_level;
pub mod trade;

pub use calculation::TradeCalculation;
pub use direction::*;
pub use risk_level::{RiskBand, RiskLevel};
pub use trade::{Trade, TradeId, TradeParams};
