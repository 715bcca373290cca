use crate::analysis::VolumeSplit;
use crate::models::SentimentSummary;

/// Total character width of the call/put bar
const BAR_WIDTH: usize = 40;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print the call-vs-put share bar with percentage labels.
///
/// A 0/0 split means no volume was recorded on either side; that renders
/// as a placeholder rather than an empty bar.
pub fn render_sentiment_bar(split: &VolumeSplit) {
    if split.is_empty() {
        println!("   Call/Put Ratio: no volume recorded");
        return;
    }

    let calls_cells = bar_cells(split.calls_pct);
    let puts_cells = BAR_WIDTH - calls_cells;

    println!(
        "   Calls {:>5.1}% {}{}{}{}{}{} {:>5.1}% Puts",
        split.calls_pct,
        GREEN,
        "█".repeat(calls_cells),
        RESET,
        RED,
        "█".repeat(puts_cells),
        RESET,
        split.puts_pct,
    );
}

/// Print the market-wide sentiment block: counts, bar and ticker lists
pub fn render_sentiment_summary(sentiment: &SentimentSummary) {
    println!(
        "🐂 Bullish {} vs 🐻 Bearish {}  ({} tickers with unusual activity)",
        sentiment.calls, sentiment.puts, sentiment.total_unusual
    );
    render_sentiment_bar(&VolumeSplit {
        calls_pct: sentiment.calls_percentage,
        puts_pct: sentiment.puts_percentage,
    });
    if !sentiment.bullish_tickers.is_empty() {
        println!("   Bullish: {}", sentiment.bullish_tickers.join(", "));
    }
    if !sentiment.bearish_tickers.is_empty() {
        println!("   Bearish: {}", sentiment.bearish_tickers.join(", "));
    }
}

/// Number of bar cells for a percentage, clamped to the bar width
fn bar_cells(pct: f64) -> usize {
    let cells = (pct / 100.0 * BAR_WIDTH as f64).round();
    (cells.max(0.0) as usize).min(BAR_WIDTH)
}
