use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Side of an option contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[serde(alias = "CALL", alias = "Call")]
    Call,
    #[serde(alias = "PUT", alias = "Put")]
    Put,
}

impl OptionType {
    /// Uppercase label used in the options table
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "CALL",
            OptionType::Put => "PUT",
        }
    }
}

/// One unusual option contract as reported by the backend.
///
/// Records are immutable once received; a new fetch replaces the whole
/// list rather than patching individual rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionRecord {
    pub underlying_ticker: String,
    pub option_symbol: String,
    pub option_type: OptionType,
    pub strike_price: f64,
    pub expiration_date: NaiveDate,
    pub days_to_expiry: u32,
    pub current_volume: u64,
    pub open_interest: u64,
    /// Implied volatility as a percentage (45.2 means 45.2%)
    pub implied_volatility: f64,
    /// Current volume over open interest
    pub volume_ratio: f64,
    pub in_the_money: bool,
    pub current_stock_price: f64,
    pub last_price: f64,
}
