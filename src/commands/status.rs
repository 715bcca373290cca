use crate::error::Error;
use crate::models::ApiStatus;
use crate::services::OptionsApiClient;

pub fn run() {
    println!("📡 Backend API Status\n");

    match fetch_status() {
        Ok(status) => render(&status),
        Err(e) => {
            eprintln!("❌ Failed to fetch data: {}", e);
            std::process::exit(1);
        }
    }
}

fn fetch_status() -> Result<ApiStatus, Error> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Network(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(async {
        let client = OptionsApiClient::from_env()?;
        client.api_status().await
    })
}

fn render(status: &ApiStatus) {
    println!("   Status:     {}", status.status);
    println!("   API calls:  {} / {}", status.api_calls, status.max_api_calls);
    println!("   Timestamp:  {}", status.timestamp);
    if status.synthetic_data_mode {
        println!("   ⚠️  Synthetic data mode is ON: figures are fabricated, not live market data");
    }
}
