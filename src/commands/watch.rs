use std::time::Duration;

use tracing::warn;

use crate::error::Error;
use crate::render::format_status_line;
use crate::services::OptionsApiClient;

pub fn run(interval_secs: u64) {
    println!("👀 Watching backend status every {}s (Ctrl-C to stop)\n", interval_secs);

    if let Err(e) = watch_loop(interval_secs) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn watch_loop(interval_secs: u64) -> Result<(), Error> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Network(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(async {
        let client = OptionsApiClient::from_env()?;
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // A failed poll is logged and the next tick retries
                    match client.api_status().await {
                        Ok(status) => {
                            println!(
                                "{}  {}",
                                chrono::Local::now().format("%H:%M:%S"),
                                format_status_line(&status)
                            );
                        }
                        Err(e) => warn!("Status poll failed: {}", e),
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    println!("\n👋 Stopped");
                    break;
                }
            }
        }

        Ok(())
    })
}
