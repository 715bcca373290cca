use chrono::NaiveDate;

use super::format_number;
use crate::models::OptionRecord;

/// Print the unusual-options table.
///
/// Columns mirror the dashboard table: type, strike, expiration, days to
/// expiry, IV%, volume, open interest, volume/OI ratio, last price, ITM.
pub fn render_options_table(options: &[OptionRecord]) {
    println!(
        "   {:<5} {:>9} {:>13} {:>5} {:>7} {:>10} {:>10} {:>7} {:>9} {:>4}",
        "Type", "Strike", "Expiration", "Days", "IV%", "Volume", "OI", "Vol/OI", "Price", "ITM"
    );

    for option in options {
        println!(
            "   {:<5} {:>9} {:>13} {:>5} {:>7} {:>10} {:>10} {:>7} {:>9} {:>4}",
            option.option_type.as_str(),
            format!("${:.2}", option.strike_price),
            format_expiration(option.expiration_date),
            option.days_to_expiry,
            format!("{:.1}%", option.implied_volatility),
            format_number(option.current_volume),
            format_number(option.open_interest),
            format!("{:.1}x", option.volume_ratio),
            format!("${:.2}", option.last_price),
            if option.in_the_money { "Yes" } else { "No" },
        );
    }
}

/// Short-month date, e.g. "Sep 19, 2025"
fn format_expiration(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_expiration() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 19).unwrap();
        assert_eq!(format_expiration(date), "Sep 19, 2025");

        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(format_expiration(date), "Jan 3, 2025");
    }
}
