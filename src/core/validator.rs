use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Direction, TradeParams};

/// Minimum distance between take-profit and stop-loss, as a fraction of the
/// entry price (0.1%).
pub const MIN_DISTANCE_RATIO: f64 = 0.001;

/// Where a validation message is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorSlot {
    TakeProfit,
    StopLoss,
    General,
}

impl ErrorSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSlot::TakeProfit => "takeProfit",
            ErrorSlot::StopLoss => "stopLoss",
            ErrorSlot::General => "general",
        }
    }
}

impl fmt::Display for ErrorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Slot-keyed validation messages. Each slot holds at most one message; a
/// later violation for the same slot replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    slots: BTreeMap<ErrorSlot, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: ErrorSlot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorSlot, &str)> {
        self.slots.iter().map(|(slot, msg)| (*slot, msg.as_str()))
    }

    fn set(&mut self, slot: ErrorSlot, message: impl Into<String>) {
        self.slots.insert(slot, message.into());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(slot, msg)| format!("{}: {}", slot, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks take-profit and stop-loss placement for a direction, using the
/// default 0.1% minimum distance.
pub fn validate(
    entry_price: f64,
    take_profit: f64,
    stop_loss: f64,
    direction: Direction,
) -> Result<(), ValidationErrors> {
    validate_with_min_distance(
        entry_price,
        take_profit,
        stop_loss,
        direction,
        MIN_DISTANCE_RATIO,
    )
}

/// All rules are evaluated. The distance rule runs last, so its message wins
/// the general slot over an ordering message.
pub fn validate_with_min_distance(
    entry_price: f64,
    take_profit: f64,
    stop_loss: f64,
    direction: Direction,
    min_distance_ratio: f64,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    match direction {
        Direction::Long => {
            if take_profit <= entry_price {
                errors.set(ErrorSlot::TakeProfit, "Take-profit must exceed entry price");
            }
            if stop_loss >= entry_price {
                errors.set(ErrorSlot::StopLoss, "Stop-loss must be below entry price");
            }
            if take_profit <= stop_loss {
                errors.set(ErrorSlot::General, "Take-profit must exceed stop-loss");
            }
        }
        Direction::Short => {
            if take_profit >= entry_price {
                errors.set(ErrorSlot::TakeProfit, "Take-profit must be below entry price");
            }
            if stop_loss <= entry_price {
                errors.set(ErrorSlot::StopLoss, "Stop-loss must exceed entry price");
            }
            if take_profit >= stop_loss {
                errors.set(ErrorSlot::General, "Take-profit must be below stop-loss");
            }
        }
    }

    let min_distance = entry_price * min_distance_ratio;
    if (take_profit - stop_loss).abs() < min_distance {
        errors.set(
            ErrorSlot::General,
            format!(
                "Distance between take-profit and stop-loss must be at least {}%",
                percent_label(min_distance_ratio)
            ),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Convenience wrapper over [`validate_with_min_distance`] for typed params.
pub fn validate_params(
    params: &TradeParams,
    min_distance_ratio: f64,
) -> Result<(), ValidationErrors> {
    validate_with_min_distance(
        params.entry_price,
        params.take_profit,
        params.stop_loss,
        params.direction,
        min_distance_ratio,
    )
}

fn percent_label(ratio: f64) -> String {
    let pct = (ratio * 100.0 * 1_000_000.0).round() / 1_000_000.0;
    format!("{}", pct)
}
