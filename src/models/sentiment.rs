use serde::{Deserialize, Serialize};

/// Market-wide bullish/bearish breakdown.
///
/// `calls` and `puts` count tickers leaning each way, not contracts; the
/// percentage pair comes precomputed from the backend and sums to 100
/// whenever either count is non-zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total_unusual: u64,
    pub calls: u64,
    pub puts: u64,
    pub calls_percentage: f64,
    pub puts_percentage: f64,
    pub bullish_tickers: Vec<String>,
    pub bearish_tickers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_deserialize() {
        let json = r#"{
            "total_unusual": 12,
            "calls": 8,
            "puts": 4,
            "calls_percentage": 66.67,
            "puts_percentage": 33.33,
            "bullish_tickers": ["NVDA", "AAPL"],
            "bearish_tickers": ["TSLA"]
        }"#;

        let summary: SentimentSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_unusual, 12);
        assert_eq!(summary.bullish_tickers, vec!["NVDA", "AAPL"]);
        assert_eq!(summary.bearish_tickers, vec!["TSLA"]);
    }
}
