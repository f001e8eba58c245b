use serde::{Deserialize, Serialize};

use crate::core::MIN_DISTANCE_RATIO;

const DEFAULT_LEVERAGE_OPTIONS: &[f64] = &[1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 20.0, 50.0, 100.0, 150.0];
const DEFAULT_ASSETS: &[&str] = &["BTC/EUR", "ETH/EUR", "BNB/EUR", "SOL/EUR", "ADA/EUR"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Storage
    pub history_key: String,
    pub data_dir: String,

    // Form
    pub currency: String,
    pub leverage_options: Vec<f64>,
    /// Reject leverage values outside `leverage_options`.
    pub strict_leverage: bool,
    pub assets: Vec<String>,

    // Validation
    pub min_distance_ratio: f64,

    // Simulated price path
    pub price_history_points: usize,
    pub price_volatility: f64,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            history_key: "trades".to_string(),
            data_dir: "data".to_string(),
            currency: "€".to_string(),
            leverage_options: DEFAULT_LEVERAGE_OPTIONS.to_vec(),
            strict_leverage: false,
            assets: DEFAULT_ASSETS.iter().map(|s| s.to_string()).collect(),
            min_distance_ratio: MIN_DISTANCE_RATIO,
            price_history_points: 20,
            price_volatility: 0.01,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank, unparsable or out-of-range
    /// values fall back to the defaults one key at a time.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let leverage_options = env("LEVERAGE_OPTIONS")
            .map(|raw| parse_list(&raw, |s| s.parse::<f64>().ok().filter(|v| *v > 0.0)))
            .filter(|opts| !opts.is_empty())
            .unwrap_or(defaults.leverage_options);

        let assets = env("ASSETS")
            .map(|raw| parse_list(&raw, |s| Some(s.to_string())))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.assets);

        Config {
            history_key: env("HISTORY_KEY").unwrap_or(defaults.history_key),
            data_dir: env("DATA_DIR").unwrap_or(defaults.data_dir),
            currency: env("CURRENCY").unwrap_or(defaults.currency),
            leverage_options,
            strict_leverage: env("STRICT_LEVERAGE")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(defaults.strict_leverage),
            assets,
            min_distance_ratio: env("MIN_DISTANCE_RATIO")
                .and_then(|v| v.trim().parse().ok())
                .filter(|v: &f64| v.is_finite() && *v >= 0.0)
                .unwrap_or(defaults.min_distance_ratio),
            price_history_points: env("PRICE_HISTORY_POINTS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.price_history_points),
            price_volatility: env("PRICE_VOLATILITY")
                .and_then(|v| v.trim().parse().ok())
                .filter(|v: &f64| v.is_finite() && *v >= 0.0)
                .unwrap_or(defaults.price_volatility),
            log_level: env("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn is_listed_leverage(&self, leverage: f64) -> bool {
        self.leverage_options.iter().any(|opt| (opt - leverage).abs() < 1e-9)
    }

    pub fn is_listed_asset(&self, asset: &str) -> bool {
        self.assets.iter().any(|a| a.eq_ignore_ascii_case(asset))
    }

    pub fn default_asset(&self) -> &str {
        self.assets.first().map(String::as_str).unwrap_or("BTC/EUR")
    }
}

fn parse_list<T>(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(parse)
        .collect()
}
