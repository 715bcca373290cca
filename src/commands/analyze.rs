use crate::error::Error;
use crate::render::{format_status_line, render_sentiment_summary};
use crate::services::OptionsApiClient;

pub fn run() {
    println!("🔄 Triggering backend analysis...\n");

    match trigger_and_refetch() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Analysis failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn trigger_and_refetch() -> Result<(), Error> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Network(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(async {
        let client = OptionsApiClient::from_env()?;

        client.run_analysis().await?;
        println!("✅ Backend recomputation triggered");

        // Re-fetch a fresh snapshot instead of reloading blind
        let status = client.api_status().await?;
        let sentiment = client.bullish_bearish().await?;

        println!("\n{}\n", format_status_line(&status));
        render_sentiment_summary(&sentiment);

        Ok(())
    })
}
