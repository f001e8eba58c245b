use chrono::{DateTime, TimeZone, Utc};

use crate::config::Config;
use crate::models::{Direction, Trade, TradeId, TradeParams};
use crate::trading::form::TradeForm;
use crate::trading::stamp::{Clock, IdGenerator};

pub fn params(
    amount: f64,
    entry_price: f64,
    take_profit: f64,
    stop_loss: f64,
    leverage: f64,
    direction: Direction,
) -> TradeParams {
    TradeParams {
        amount,
        entry_price,
        take_profit,
        stop_loss,
        leverage,
        asset: "BTC/EUR".to_string(),
        direction,
    }
}

/// A valid 5x long on BTC/EUR with the given id.
pub fn trade(id: &str) -> Trade {
    Trade::new(
        TradeId::new(id),
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        params(1000.0, 100.0, 110.0, 95.0, 5.0, Direction::Long),
    )
}

pub fn form(
    amount: &str,
    entry_price: &str,
    take_profit: &str,
    stop_loss: &str,
    leverage: &str,
    direction: Direction,
) -> TradeForm {
    TradeForm {
        amount: amount.to_string(),
        entry_price: entry_price.to_string(),
        take_profit: take_profit.to_string(),
        stop_loss: stop_loss.to_string(),
        leverage: leverage.to_string(),
        direction,
        ..TradeForm::default()
    }
}

/// A Config for tests — no .env lookup, temp data dir.
pub fn default_test_config() -> Config {
    Config {
        data_dir: std::env::temp_dir()
            .join(format!("trade_risk_test_{}", std::process::id()))
            .to_string_lossy()
            .to_string(),
        ..Config::default()
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Yields `trade-1`, `trade-2`, ...
#[derive(Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TradeId {
        self.next += 1;
        TradeId::new(format!("trade-{}", self.next))
    }
}
