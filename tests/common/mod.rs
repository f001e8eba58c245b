use chrono::{DateTime, TimeZone, Utc};

use trade_risk::config::Config;
use trade_risk::models::{Direction, TradeId};
use trade_risk::trading::{Clock, IdGenerator, TradeForm};

/// Clock that advances one minute per reading, starting 2024-01-15 12:00 UTC.
pub struct SteppingClock {
    next: std::cell::Cell<DateTime<Utc>>,
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self {
            next: std::cell::Cell::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + chrono::Duration::minutes(1));
        now
    }
}

/// Yields `t1`, `t2`, ...
#[derive(Default)]
pub struct CountingIds(u64);

impl IdGenerator for CountingIds {
    fn next_id(&mut self) -> TradeId {
        self.0 += 1;
        TradeId::new(format!("t{}", self.0))
    }
}

pub fn config_in(dir: &std::path::Path) -> Config {
    Config {
        data_dir: dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}

pub fn form(
    amount: &str,
    entry: &str,
    take_profit: &str,
    stop_loss: &str,
    leverage: &str,
    direction: Direction,
) -> TradeForm {
    TradeForm {
        amount: amount.to_string(),
        entry_price: entry.to_string(),
        take_profit: take_profit.to_string(),
        stop_loss: stop_loss.to_string(),
        leverage: leverage.to_string(),
        direction,
        ..TradeForm::default()
    }
}
