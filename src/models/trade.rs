use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Direction;

/// Opaque trade identifier assigned when a trade is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(String);

impl TradeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The position a user proposes, before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeParams {
    pub amount: f64,
    pub entry_price: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub leverage: f64,
    pub asset: String,
    /// Stored as `type`; entries written before direction existed read as long.
    #[serde(rename = "type", default)]
    pub direction: Direction,
}

impl TradeParams {
    /// Notional exposure: amount scaled by leverage.
    pub fn exposure(&self) -> f64 {
        self.amount * self.leverage
    }
}

/// An accepted trade. Never modified after creation; the history only gains
/// new trades or loses them by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub params: TradeParams,
}

impl Trade {
    pub fn new(id: TradeId, timestamp: DateTime<Utc>, params: TradeParams) -> Self {
        Self {
            id,
            timestamp,
            params,
        }
    }

    pub fn direction(&self) -> Direction {
        self.params.direction
    }

    pub fn asset(&self) -> &str {
        &self.params.asset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_trade() -> Trade {
        Trade::new(
            TradeId::new("abc-123"),
            Utc.timestamp_millis_opt(1_705_320_000_000).unwrap(),
            TradeParams {
                amount: 1000.0,
                entry_price: 100.0,
                take_profit: 110.0,
                stop_loss: 95.0,
                leverage: 5.0,
                asset: "BTC/EUR".to_string(),
                direction: Direction::Short,
            },
        )
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let value = serde_json::to_value(sample_trade()).unwrap();
        assert_eq!(value["id"], "abc-123");
        assert_eq!(value["entryPrice"], 100.0);
        assert_eq!(value["takeProfit"], 110.0);
        assert_eq!(value["stopLoss"], 95.0);
        assert_eq!(value["timestamp"], 1_705_320_000_000i64);
        assert_eq!(value["type"], "short");
    }

    #[test]
    fn missing_type_reads_as_long() {
        let json = r#"{
            "id": "legacy",
            "amount": 50,
            "entryPrice": 20000,
            "takeProfit": 21000,
            "stopLoss": 19500,
            "leverage": 2,
            "timestamp": 1700000000000,
            "asset": "ETH/EUR"
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.direction(), Direction::Long);
        assert_eq!(trade.asset(), "ETH/EUR");
        assert_eq!(trade.params.exposure(), 100.0);
    }
}
