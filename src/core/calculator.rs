use thiserror::Error;

use crate::core::risk::classify_risk;
use crate::models::{TradeCalculation, TradeParams};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid {field}: {value} (must be a finite number greater than zero)")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("risk/reward ratio undefined: zero loss")]
    UndefinedRatio,

    #[error("calculation overflowed: {field} is not finite")]
    Overflow { field: &'static str },
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Overflow { field })
    }
}

/// Derives profit, loss, percentages, risk/reward ratio and risk level for a
/// trade that has already passed validation.
pub fn calculate(params: &TradeParams) -> Result<TradeCalculation, CalcError> {
    require_positive("amount", params.amount)?;
    let entry = require_positive("entry price", params.entry_price)?;
    let take_profit = require_positive("take-profit", params.take_profit)?;
    let stop_loss = require_positive("stop-loss", params.stop_loss)?;
    let leverage = require_positive("leverage", params.leverage)?;

    let m = params.direction.multiplier();
    let exposure = require_finite("exposure", params.exposure())?;

    // Finite inputs can still overflow once scaled by exposure or divided by a tiny entry.
    let potential_profit =
        require_finite("potential profit", m * (take_profit - entry) * exposure / entry)?;
    let potential_loss =
        require_finite("potential loss", m * (stop_loss - entry) * exposure / entry)?;
    let profit_percentage = require_finite(
        "profit percentage",
        m * ((take_profit - entry) / entry) * 100.0 * leverage,
    )?;
    let loss_percentage = require_finite(
        "loss percentage",
        m * ((stop_loss - entry) / entry) * 100.0 * leverage,
    )?;

    if potential_loss == 0.0 {
        return Err(CalcError::UndefinedRatio);
    }
    let risk_reward_ratio = require_finite(
        "risk/reward ratio",
        (potential_profit / potential_loss).abs(),
    )?;
    let risk_level = classify_risk(risk_reward_ratio, leverage);

    Ok(TradeCalculation {
        potential_profit,
        potential_loss,
        profit_percentage,
        loss_percentage,
        risk_reward_ratio,
        risk_level,
    })
}
