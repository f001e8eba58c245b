use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{calculate, validate_params, CalcError, ValidationErrors};
use crate::models::{Trade, TradeCalculation, TradeId};
use crate::simulation::PriceSimulator;
use crate::storage::HistoryStore;
use crate::trading::form::{InputError, TradeForm};
use crate::trading::history::TradeHistory;
use crate::trading::stamp::{Clock, IdGenerator};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("trade rejected: {0}")]
    Rejected(#[from] ValidationErrors),

    #[error("calculation refused: {0}")]
    Calculation(#[from] CalcError),
}

/// Result of an accepted submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub trade: Trade,
    pub calculation: TradeCalculation,
    pub price_history: Vec<f64>,
}

/// Owns the trade history and runs submissions through parsing, validation
/// and calculation before recording them.
pub struct TradeDesk {
    cfg: Config,
    history: TradeHistory,
    store: Box<dyn HistoryStore>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    simulator: Box<dyn PriceSimulator>,
}

impl TradeDesk {
    /// Loads the stored history. An unreadable store starts an empty history.
    pub fn open(
        cfg: &Config,
        store: Box<dyn HistoryStore>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
        simulator: Box<dyn PriceSimulator>,
    ) -> Self {
        let history = match store.load(&cfg.history_key) {
            Ok(trades) => {
                debug!("Loaded {} trades under '{}'", trades.len(), cfg.history_key);
                TradeHistory::new(trades)
            }
            Err(e) => {
                warn!("Could not load trade history '{}': {}", cfg.history_key, e);
                TradeHistory::default()
            }
        };

        Self {
            cfg: cfg.clone(),
            history,
            store,
            clock,
            ids,
            simulator,
        }
    }

    pub fn history(&self) -> &TradeHistory {
        &self.history
    }

    /// Parses, validates and calculates the form. Only a trade that gets
    /// through all three is stamped, prepended to the history and saved.
    pub fn submit(&mut self, form: &TradeForm) -> Result<Submission, SubmitError> {
        let params = form.parse(&self.cfg)?;
        if !self.cfg.is_listed_asset(&params.asset) {
            debug!("Asset {} is not one of the configured assets", params.asset);
        }
        validate_params(&params, self.cfg.min_distance_ratio)?;
        let calculation = calculate(&params)?;

        let trade = Trade::new(self.ids.next_id(), self.clock.now(), params);
        self.history.prepend(trade.clone());
        self.persist();

        let price_history = self
            .simulator
            .simulate(trade.params.entry_price, self.cfg.price_history_points);

        info!(
            "Recorded {} {} {} | profit {:.2} | loss {:.2} | R/R {:.2} | risk {}",
            trade.id,
            trade.direction(),
            trade.asset(),
            calculation.potential_profit,
            calculation.potential_loss,
            calculation.risk_reward_ratio,
            calculation.risk_level
        );

        Ok(Submission {
            trade,
            calculation,
            price_history,
        })
    }

    /// Removes a trade by id. Unknown ids leave the history and the store
    /// untouched.
    pub fn delete(&mut self, id: &TradeId) -> bool {
        if !self.history.remove(id) {
            debug!("No trade with id {} to delete", id);
            return false;
        }
        self.persist();
        info!("Deleted trade {}", id);
        true
    }

    fn persist(&mut self) {
        let key = &self.cfg.history_key;
        if let Err(e) = self.store.save(key, self.history.as_slice()) {
            warn!("Could not save trade history '{}': {}", key, e);
        }
    }
}
