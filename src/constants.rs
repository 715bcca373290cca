//! Presentation constants.
//!
//! The score brackets and component thresholds are display conventions
//! carried over from the original dashboard, not statistically derived
//! values. They decide which numbers light up, nothing else.

/// Scores at or below this bound read as normal activity
pub const SCORE_NORMAL_MAX: f64 = 3.0;

/// Scores above the normal bound and at or below this read as somewhat unusual
pub const SCORE_SOMEWHAT_MAX: f64 = 6.0;

/// Highlight when current volume runs above open interest by this factor
pub const VOLUME_OI_FLAG_THRESHOLD: f64 = 1.5;

/// Highlight when the put/call component exceeds this
pub const PUT_CALL_FLAG_THRESHOLD: f64 = 2.0;

/// Highlight when the implied-vs-historical volatility component exceeds this
pub const IV_FLAG_THRESHOLD: f64 = 2.0;

/// Highlight when the skew component exceeds this
pub const SKEW_FLAG_THRESHOLD: f64 = 1.5;

/// Default backend base URL (local development server)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Request timeout for all backend calls
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default re-poll interval for `watch`
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 30;

/// Ticker suggestions shown on the dashboard
pub const POPULAR_TICKERS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA",
    "META", "NVDA", "SPY", "QQQ", "AMD",
];
