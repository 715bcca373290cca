use chrono::Local;

use crate::analysis::{classify, flag_components, ColorToken};
use crate::models::UnusualnessScore;

/// Print the unusualness score card: colored score, severity headline,
/// interpretation list and the four-component grid with per-component
/// highlighting.
pub fn render_score_card(score: &UnusualnessScore) {
    let severity = classify(score.score);
    let color = severity.color();

    println!(
        "📋 Options Unusualness Score          {}",
        Local::now().format("%A, %B %-d, %Y")
    );
    println!();
    println!(
        "   {}  {}",
        color.paint(&format!("[ {} / 10 ]", format_score(score.score))),
        severity.headline()
    );
    println!();

    if score.interpretation.is_empty() {
        println!("   No specific observations for this ticker.");
    } else {
        for line in &score.interpretation {
            println!("   {}", line);
        }
    }
    println!();

    let flags = flag_components(&score.components);
    render_component("Volume to Open Interest", score.components.volume_oi_ratio, flags.volume_oi_ratio);
    render_component("Put-Call Ratio", score.components.put_call_ratio, flags.put_call_ratio);
    render_component("IV vs Historical", score.components.iv_vs_historical, flags.iv_vs_historical);
    render_component("Options Skew", score.components.skew_analysis, flags.skew_analysis);

    match (score.nearest_expiry, score.target_expiry) {
        (Some(nearest), Some(target)) => {
            println!();
            println!("   Nearest expiry: {}   Target expiry: {}", nearest, target);
        }
        (Some(nearest), None) => {
            println!();
            println!("   Nearest expiry: {}", nearest);
        }
        _ => {}
    }
}

fn render_component(name: &str, value: f64, flagged: bool) {
    let color = if flagged {
        ColorToken::Red
    } else {
        ColorToken::NeutralGray
    };
    println!("   {:<26} {}", name, color.paint(&format!("{:.2}", value)));
}

/// Integer scores print bare ("7"); anything else keeps its decimals
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(7.0), "7");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(3.5), "3.5");
        assert_eq!(format_score(-2.0), "-2");
    }
}
