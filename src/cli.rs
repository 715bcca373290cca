use clap::{Parser, Subcommand};

use crate::commands;
use crate::constants::DEFAULT_WATCH_INTERVAL_SECS;

#[derive(Parser)]
#[command(name = "optionpulse")]
#[command(about = "Unusual options activity dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Market-wide view: API status, unusual contracts, sentiment
    Dashboard,
    /// Unusualness score and options activity for a single ticker
    Ticker {
        /// Stock ticker symbol (e.g. AAPL)
        symbol: String,
    },
    /// Show backend API status
    Status,
    /// Re-poll backend status on a fixed interval
    Watch {
        /// Seconds between polls
        #[arg(short, long, default_value_t = DEFAULT_WATCH_INTERVAL_SECS)]
        interval: u64,
    },
    /// Trigger a backend recomputation, then show refreshed sentiment
    Analyze,
    /// Clear the backend cache
    ClearCache,
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard => commands::dashboard::run(),
        Commands::Ticker { symbol } => commands::ticker::run(symbol),
        Commands::Status => commands::status::run(),
        Commands::Watch { interval } => commands::watch::run(interval),
        Commands::Analyze => commands::analyze::run(),
        Commands::ClearCache => commands::clear_cache::run(),
    }
}
