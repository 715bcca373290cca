use crate::analysis::split_volumes;
use crate::error::Error;
use crate::models::TickerSnapshot;
use crate::render::{format_price, render_options_table, render_score_card, render_sentiment_bar};
use crate::services::OptionsApiClient;

pub fn run(symbol: String) {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        eprintln!("❌ Ticker symbol cannot be empty");
        std::process::exit(1);
    }

    println!("🔍 Loading data for {}...\n", symbol);

    match fetch_snapshot(&symbol) {
        Ok(snapshot) => render(&snapshot),
        Err(e) => {
            eprintln!("❌ Error loading data: {}", e);
            eprintln!("   Check the ticker symbol or try again once the backend is reachable.");
            std::process::exit(1);
        }
    }
}

fn fetch_snapshot(symbol: &str) -> Result<TickerSnapshot, Error> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Network(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(async {
        let client = OptionsApiClient::from_env()?;
        client.ticker_snapshot(symbol).await
    })
}

fn render(snapshot: &TickerSnapshot) {
    let score = &snapshot.score;
    let activity = &snapshot.activity;

    println!(
        "━━━ {}  {}  (as of {}) ━━━\n",
        score.ticker,
        format_price(score.current_price.or(activity.current_price)),
        activity.date
    );

    let split = split_volumes(activity.calls_volume, activity.puts_volume);
    render_sentiment_bar(&split);
    println!();

    render_score_card(score);
    println!();

    if activity.has_unusual_activity && !activity.options_activity.is_empty() {
        println!("🔥 Unusual Options Activity\n");
        render_options_table(&activity.options_activity);
    } else {
        println!("   No unusual options activity detected for {}.", activity.ticker);
    }
}
