use thiserror::Error;

use crate::config::Config;
use crate::models::{Direction, TradeParams};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("leverage {value}x is not one of the allowed options ({allowed})")]
    UnsupportedLeverage { value: f64, allowed: String },
}

/// Raw trade entry as typed by the user. Numeric fields stay text until
/// [`TradeForm::parse`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeForm {
    pub amount: String,
    pub entry_price: String,
    pub take_profit: String,
    pub stop_loss: String,
    pub leverage: String,
    pub asset: String,
    pub direction: Direction,
}

impl Default for TradeForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            entry_price: String::new(),
            take_profit: String::new(),
            stop_loss: String::new(),
            leverage: "1".to_string(),
            asset: "BTC/EUR".to_string(),
            direction: Direction::Long,
        }
    }
}

impl TradeForm {
    /// Parses every field in form order and reports the first problem found.
    pub fn parse(&self, cfg: &Config) -> Result<TradeParams, InputError> {
        let amount = parse_positive("amount", &self.amount)?;
        let entry_price = parse_positive("entry price", &self.entry_price)?;
        let take_profit = parse_positive("take-profit", &self.take_profit)?;
        let stop_loss = parse_positive("stop-loss", &self.stop_loss)?;
        let leverage = parse_positive(
            "leverage",
            self.leverage.trim().trim_end_matches(['x', 'X']),
        )?;

        if cfg.strict_leverage && !cfg.is_listed_leverage(leverage) {
            let allowed: Vec<String> = cfg
                .leverage_options
                .iter()
                .map(|opt| format!("{}x", opt))
                .collect();
            return Err(InputError::UnsupportedLeverage {
                value: leverage,
                allowed: allowed.join(", "),
            });
        }

        let asset = self.asset.trim();
        if asset.is_empty() {
            return Err(InputError::Missing { field: "asset" });
        }

        Ok(TradeParams {
            amount,
            entry_price,
            take_profit,
            stop_loss,
            leverage,
            asset: asset.to_string(),
            direction: self.direction,
        })
    }
}

fn parse_positive(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Missing { field });
    }
    let value: f64 = raw.parse().map_err(|_| InputError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotANumber {
            field,
            value: raw.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(value)
}
