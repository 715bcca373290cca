use crate::constants::POPULAR_TICKERS;
use crate::error::Error;
use crate::models::{ApiStatus, OptionRecord, SentimentSummary};
use crate::render::{format_status_line, render_options_table, render_sentiment_summary};
use crate::services::OptionsApiClient;

pub fn run() {
    println!("📊 Unusual Options Activity Dashboard\n");

    match fetch_and_render() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Failed to fetch data: {}", e);
            std::process::exit(1);
        }
    }
}

fn fetch_and_render() -> Result<(), Error> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Network(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(async {
        let client = OptionsApiClient::from_env()?;

        // Initial-load order: status, then options, then sentiment
        let status = client.api_status().await?;
        let options = client.unusual_options().await?;
        let sentiment = client.bullish_bearish().await?;

        render(&status, &options, &sentiment);
        Ok(())
    })
}

fn render(status: &ApiStatus, options: &[OptionRecord], sentiment: &SentimentSummary) {
    println!("{}\n", format_status_line(status));

    if options.is_empty() {
        println!("   No unusual options activity detected right now.");
    } else {
        println!("🔥 Unusual contracts across the market ({}):\n", options.len());
        render_options_table(options);
    }
    println!();

    render_sentiment_summary(sentiment);

    println!();
    println!("💡 Tip: run `optionpulse ticker <SYMBOL>` for a full breakdown");
    println!("   Popular: {}", POPULAR_TICKERS.join(", "));
}
