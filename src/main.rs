use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use trade_risk::config::Config;
use trade_risk::models::{Direction, TradeId};
use trade_risk::report::{render_history, ResultPanel};
use trade_risk::simulation::RandomWalk;
use trade_risk::storage::JsonFileStore;
use trade_risk::trading::{SubmitError, SystemClock, TradeDesk, TradeForm, UuidGenerator};

#[derive(Parser, Debug)]
#[command(author, version, about = "Leveraged trade risk calculator.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculates a trade and records it in the history.
    Calc {
        /// Position size in account currency.
        #[arg(long)]
        amount: String,

        /// Entry price.
        #[arg(long)]
        entry: String,

        /// Take-profit price.
        #[arg(long)]
        take_profit: String,

        /// Stop-loss price.
        #[arg(long)]
        stop_loss: String,

        /// Leverage multiplier (e.g. 5 or 5x).
        #[arg(long, default_value = "1")]
        leverage: String,

        /// Asset symbol. Defaults to the first configured asset.
        #[arg(long)]
        asset: Option<String>,

        /// long or short.
        #[arg(long, default_value = "long", value_parser = parse_direction)]
        direction: Direction,

        /// Print the trade, calculation and simulated path as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Shows recorded trades, newest first.
    History {
        #[arg(long)]
        json: bool,
    },

    /// Lists the configured assets and leverage choices.
    Options,

    /// Deletes a recorded trade by id.
    Delete {
        id: String,
    },
}

fn parse_direction(s: &str) -> std::result::Result<Direction, String> {
    Direction::from_str_loose(s).ok_or_else(|| format!("expected 'long' or 'short', got '{}'", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let mut desk = TradeDesk::open(
        &cfg,
        Box::new(JsonFileStore::new(&cfg.data_dir)),
        Box::new(SystemClock),
        Box::new(UuidGenerator),
        Box::new(RandomWalk::from_entropy(cfg.price_volatility)),
    );

    match cli.command {
        Commands::Calc {
            amount,
            entry,
            take_profit,
            stop_loss,
            leverage,
            asset,
            direction,
            json,
        } => {
            let form = TradeForm {
                amount,
                entry_price: entry,
                take_profit,
                stop_loss,
                leverage,
                asset: asset.unwrap_or_else(|| cfg.default_asset().to_string()),
                direction,
            };

            let submission = match desk.submit(&form) {
                Ok(submission) => submission,
                Err(SubmitError::Rejected(errors)) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&errors)?);
                    } else {
                        println!("Trade rejected:");
                        for (slot, message) in errors.iter() {
                            println!("  {:<11} {}", slot, message);
                        }
                    }
                    bail!("trade rejected");
                }
                Err(e) => return Err(e.into()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&submission)?);
            } else {
                println!(
                    "{}",
                    ResultPanel::from_calculation(&submission.calculation, &cfg.currency)
                );
                println!("  Trade id:          {}", submission.trade.id);
                let path: Vec<String> = submission
                    .price_history
                    .iter()
                    .map(|p| format!("{:.2}", p))
                    .collect();
                println!("  Simulated path:    {}", path.join(" "));
            }
        }
        Commands::History { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(desk.history())?);
            } else {
                println!("{}", render_history(desk.history(), &cfg.currency));
            }
        }
        Commands::Options => {
            println!("Assets:   {}", cfg.assets.join(", "));
            let leverage: Vec<String> = cfg
                .leverage_options
                .iter()
                .map(|opt| format!("{}x", opt))
                .collect();
            let mode = if cfg.strict_leverage { "strict" } else { "any positive value" };
            println!("Leverage: {} ({})", leverage.join(", "), mode);
        }
        Commands::Delete { id } => {
            let id = TradeId::new(id);
            if desk.delete(&id) {
                println!("Deleted trade {}", id);
            } else {
                println!("No trade with id {}", id);
            }
        }
    }

    Ok(())
}
