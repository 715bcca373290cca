//! Plain-println terminal rendering for the fetched snapshots.

mod options_table;
mod score_card;
mod sentiment_bar;

pub use options_table::render_options_table;
pub use score_card::render_score_card;
pub use sentiment_bar::{render_sentiment_bar, render_sentiment_summary};

use crate::models::ApiStatus;

/// One-line backend status summary used by the dashboard and watch views
pub fn format_status_line(status: &ApiStatus) -> String {
    let synthetic = if status.synthetic_data_mode {
        " | ⚠ synthetic data"
    } else {
        ""
    };
    format!(
        "API {} | calls {}/{} | {}{}",
        status.status, status.api_calls, status.max_api_calls, status.timestamp, synthetic
    )
}

/// Thousands-separated integer, e.g. 1234567 -> "1,234,567"
pub(crate) fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Dollar price with two decimals; "n/a" when the backend sent none
pub(crate) fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", p),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(184.3)), "$184.30");
        assert_eq!(format_price(None), "n/a");
    }

    #[test]
    fn test_format_status_line_flags_synthetic_mode() {
        let status = ApiStatus {
            status: "operational".to_string(),
            api_calls: 10,
            max_api_calls: 500,
            timestamp: "2025-08-05 14:32:10".to_string(),
            synthetic_data_mode: true,
        };
        let line = format_status_line(&status);
        assert!(line.contains("calls 10/500"));
        assert!(line.contains("synthetic data"));
    }
}
