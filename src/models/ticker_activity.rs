use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{OptionRecord, UnusualnessScore};

/// Options activity payload for one ticker.
///
/// `options_activity` arrives pre-sorted by descending volume ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerActivity {
    pub ticker: String,
    pub date: NaiveDate,
    /// Null when the backend could not resolve a price either
    #[serde(default)]
    pub current_price: Option<f64>,
    pub has_unusual_activity: bool,
    pub options_activity: Vec<OptionRecord>,
    pub calls_volume: u64,
    pub puts_volume: u64,
    pub calls_percentage: f64,
    pub puts_percentage: f64,
}

/// Immutable view state for the ticker screen: both payloads from one
/// load, fetched together and handed to the renderer as a unit. The next
/// load produces a fresh snapshot; nothing is patched in place.
#[derive(Debug, Clone)]
pub struct TickerSnapshot {
    pub score: UnusualnessScore,
    pub activity: TickerActivity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_activity_deserialize() {
        let json = r#"{
            "ticker": "AMD",
            "date": "2025-08-05",
            "current_price": 171.44,
            "has_unusual_activity": false,
            "options_activity": [],
            "calls_volume": 0,
            "puts_volume": 0,
            "calls_percentage": 0,
            "puts_percentage": 0
        }"#;

        let activity: TickerActivity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.ticker, "AMD");
        assert!(!activity.has_unusual_activity);
        assert!(activity.options_activity.is_empty());
    }

    #[test]
    fn test_ticker_activity_null_price() {
        let json = r#"{
            "ticker": "AMD",
            "date": "2025-08-05",
            "current_price": null,
            "has_unusual_activity": false,
            "options_activity": [],
            "calls_volume": 0,
            "puts_volume": 0,
            "calls_percentage": 0,
            "puts_percentage": 0
        }"#;

        let activity: TickerActivity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.current_price, None);
    }
}
