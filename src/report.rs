use std::fmt;

use crate::core::calculate;
use crate::models::{RiskBand, RiskLevel, Trade, TradeCalculation};
use crate::trading::TradeHistory;

/// Result panel for a single calculation.
#[derive(Debug, Clone)]
pub struct ResultPanel {
    pub calculation: TradeCalculation,
    pub currency: String,
}

impl ResultPanel {
    pub fn from_calculation(calculation: &TradeCalculation, currency: &str) -> Self {
        Self {
            calculation: *calculation,
            currency: currency.to_string(),
        }
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.calculation;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "  TRADE RESULT")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(
            f,
            "  Potential profit:  {:.2} {} ({:+.2}%)",
            c.potential_profit, self.currency, c.profit_percentage
        )?;
        writeln!(
            f,
            "  Potential loss:    {:.2} {} ({:+.2}%)",
            c.potential_loss, self.currency, c.loss_percentage
        )?;
        writeln!(f, "  Risk/reward:       1:{:.2}", c.risk_reward_ratio)?;
        writeln!(
            f,
            "  Risk level:        {} [{}]",
            c.risk_level.label(),
            c.risk_level.band()
        )?;
        write!(f, "{}", "=".repeat(50))
    }
}

/// One line of the history table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    pub date: String,
    pub asset: String,
    pub direction: String,
    pub amount: f64,
    pub entry_price: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub leverage: f64,
    /// `None` when the stored trade cannot be calculated.
    pub ratio: Option<f64>,
    pub risk_level: Option<RiskLevel>,
}

impl HistoryRow {
    pub fn from_trade(trade: &Trade) -> Self {
        let calc = calculate(&trade.params).ok();
        Self {
            id: trade.id.to_string(),
            date: trade.timestamp.format("%d/%m/%Y %H:%M").to_string(),
            asset: trade.params.asset.clone(),
            direction: trade.direction().as_str().to_uppercase(),
            amount: trade.params.amount,
            entry_price: trade.params.entry_price,
            take_profit: trade.params.take_profit,
            stop_loss: trade.params.stop_loss,
            leverage: trade.params.leverage,
            ratio: calc.as_ref().map(TradeCalculation::display_ratio),
            risk_level: calc.map(|c| c.risk_level),
        }
    }

    pub fn band(&self) -> Option<RiskBand> {
        self.risk_level.map(|level| level.band())
    }

    pub fn ratio_label(&self) -> String {
        match self.ratio {
            Some(r) => format!("1:{:.2}", r),
            None => "n/a".to_string(),
        }
    }
}

/// Renders the history newest first as a fixed-width table.
pub fn render_history(history: &TradeHistory, currency: &str) -> String {
    if history.is_empty() {
        return "No trades recorded".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:<9} {:<5} {:>12} {:>12} {:>12} {:>12} {:>6} {:>9} {:<7} {}\n",
        "Date", "Asset", "Type", "Amount", "Entry", "TP", "SL", "Lev", "R/R", "Risk", "ID"
    ));
    out.push_str(&"─".repeat(120));

    for trade in history.iter() {
        let row = HistoryRow::from_trade(trade);
        let band = row
            .band()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "\n{:<16} {:<9} {:<5} {:>12} {:>12} {:>12} {:>12} {:>6} {:>9} {:<7} {}",
            row.date,
            row.asset,
            row.direction,
            format!("{} {}", row.amount, currency),
            row.entry_price,
            row.take_profit,
            row.stop_loss,
            format!("{}x", row.leverage),
            row.ratio_label(),
            band,
            row.id
        ));
    }
    out
}
