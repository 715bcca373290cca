use crate::error::Error;
use crate::services::OptionsApiClient;

pub fn run() {
    match clear() {
        Ok(()) => println!("✅ Backend cache cleared"),
        Err(e) => {
            eprintln!("❌ Failed to clear cache: {}", e);
            std::process::exit(1);
        }
    }
}

fn clear() -> Result<(), Error> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Network(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(async {
        let client = OptionsApiClient::from_env()?;
        client.clear_cache().await
    })
}
