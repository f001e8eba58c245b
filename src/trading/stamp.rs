use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::TradeId;

/// Source of acceptance timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of trade ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> TradeId;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> TradeId {
        TradeId::new(Uuid::new_v4().to_string())
    }
}
