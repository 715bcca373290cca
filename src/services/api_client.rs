use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::constants::HTTP_TIMEOUT_SECS;
use crate::error::{Error, Result};
use crate::models::{
    ApiStatus, OptionRecord, SentimentSummary, TickerActivity, TickerSnapshot, UnusualnessScore,
};
use crate::utils::get_api_base_url;

/// HTTP client for the unusual-options backend.
///
/// A thin fetch layer: every method performs one request and
/// deserializes one payload. No retries and no caching; failures surface
/// as [`Error`] values for the command layer to report.
pub struct OptionsApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl OptionsApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: String) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "Invalid base URL: must start with http:// or https://, got: '{}'",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created OptionsApiClient: base_url='{}'", base_url);

        Ok(Self { base_url, client })
    }

    /// Create a client from the OPTIONPULSE_API_URL environment variable
    pub fn from_env() -> Result<Self> {
        Self::new(get_api_base_url())
    }

    /// GET /api-status
    pub async fn api_status(&self) -> Result<ApiStatus> {
        self.get_json("/api-status").await
    }

    /// GET /unusual-options, unusual contracts across the whole market
    pub async fn unusual_options(&self) -> Result<Vec<OptionRecord>> {
        self.get_json("/unusual-options").await
    }

    /// GET /bullish-bearish
    pub async fn bullish_bearish(&self) -> Result<SentimentSummary> {
        self.get_json("/bullish-bearish").await
    }

    /// GET /unusualness-score/{ticker}
    pub async fn unusualness_score(&self, ticker: &str) -> Result<UnusualnessScore> {
        self.get_json(&format!("/unusualness-score/{}", normalize_ticker(ticker)))
            .await
    }

    /// GET /ticker/{ticker}
    pub async fn ticker_activity(&self, ticker: &str) -> Result<TickerActivity> {
        self.get_json(&format!("/ticker/{}", normalize_ticker(ticker)))
            .await
    }

    /// Fetch the full view snapshot for one ticker: score first, then
    /// activity, the same order the results screen loads in. The first
    /// failure aborts the snapshot.
    pub async fn ticker_snapshot(&self, ticker: &str) -> Result<TickerSnapshot> {
        let score = self.unusualness_score(ticker).await?;
        let activity = self.ticker_activity(ticker).await?;
        Ok(TickerSnapshot { score, activity })
    }

    /// POST /run-analysis, triggering a backend recomputation. Only
    /// success or failure is consumed; the response body is ignored.
    pub async fn run_analysis(&self) -> Result<()> {
        self.post_empty("/run-analysis").await
    }

    /// POST /clear-cache
    pub async fn clear_cache(&self) -> Result<()> {
        self.post_empty("/clear-cache").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Status {
                endpoint: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response from {}: {}", path, e)))?;

        serde_json::from_str(&body)
            .map_err(|e| Error::Parse(format!("Failed to parse response from {}: {}", path, e)))
    }

    async fn post_empty(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        info!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Status {
                endpoint: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}

/// Tickers come from user input: trim and uppercase before hitting the API
fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = OptionsApiClient::new("http://localhost:8000/".to_string()).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");

        let client = OptionsApiClient::new("  https://api.example.com///  ".to_string()).unwrap();
        assert_eq!(client.base_url, "https://api.example.com");
    }

    #[test]
    fn test_new_rejects_missing_scheme() {
        let result = OptionsApiClient::new("localhost:8000".to_string());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_normalize_ticker() {
        assert_eq!(normalize_ticker(" aapl "), "AAPL");
        assert_eq!(normalize_ticker("Spy"), "SPY");
    }
}
