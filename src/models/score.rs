use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four sub-component ratios behind the composite score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub volume_oi_ratio: f64,
    pub put_call_ratio: f64,
    pub iv_vs_historical: f64,
    pub skew_analysis: f64,
}

/// Composite unusualness score snapshot for one ticker.
///
/// The score is 0-10 by contract, but the contract is the backend's to
/// keep: the field stays a plain number so out-of-contract values arrive
/// untouched and display exactly as sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnusualnessScore {
    pub ticker: String,

    /// Missing in the backend's degraded responses
    #[serde(default)]
    pub current_price: Option<f64>,

    pub score: f64,

    /// Human-readable observations, in the order the backend produced them
    pub interpretation: Vec<String>,

    pub components: ScoreComponents,

    /// Null when the backend had no options data for the ticker
    pub nearest_expiry: Option<NaiveDate>,
    pub target_expiry: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_deserialize() {
        let json = r#"{
            "ticker": "TSLA",
            "current_price": 242.18,
            "score": 8,
            "interpretation": [
                "Score 8/10: Options show highly unusual activity!",
                "High volume relative to open interest suggests unusual trading activity."
            ],
            "components": {
                "volume_oi_ratio": 2.4,
                "put_call_ratio": 0.8,
                "iv_vs_historical": 2.1,
                "skew_analysis": 1.2
            },
            "nearest_expiry": "2025-08-15",
            "target_expiry": "2025-09-19"
        }"#;

        let score: UnusualnessScore = serde_json::from_str(json).unwrap();
        assert_eq!(score.ticker, "TSLA");
        assert_eq!(score.score, 8.0);
        assert_eq!(score.interpretation.len(), 2);
        assert_eq!(score.components.volume_oi_ratio, 2.4);
        assert_eq!(
            score.nearest_expiry,
            Some(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap())
        );
    }

    #[test]
    fn test_score_deserialize_degraded_response() {
        // No-data responses omit current_price and null out the expiries
        let json = r#"{
            "ticker": "XXXX",
            "score": 0,
            "interpretation": ["No options data available for this ticker."],
            "components": {
                "volume_oi_ratio": 0,
                "put_call_ratio": 0,
                "iv_vs_historical": 0,
                "skew_analysis": 0
            },
            "nearest_expiry": null,
            "target_expiry": null
        }"#;

        let score: UnusualnessScore = serde_json::from_str(json).unwrap();
        assert_eq!(score.current_price, None);
        assert_eq!(score.nearest_expiry, None);
        assert_eq!(score.components, ScoreComponents::default());
    }

    #[test]
    fn test_score_survives_out_of_contract_values() {
        let json = r#"{
            "ticker": "YOLO",
            "current_price": 1.0,
            "score": 13.5,
            "interpretation": [],
            "components": {
                "volume_oi_ratio": -0.5,
                "put_call_ratio": 0,
                "iv_vs_historical": 0,
                "skew_analysis": 0
            },
            "nearest_expiry": null,
            "target_expiry": null
        }"#;

        let score: UnusualnessScore = serde_json::from_str(json).unwrap();
        assert_eq!(score.score, 13.5);
        assert_eq!(score.components.volume_oi_ratio, -0.5);
    }
}
