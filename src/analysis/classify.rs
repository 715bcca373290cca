use crate::constants::{SCORE_NORMAL_MAX, SCORE_SOMEWHAT_MAX};

/// Display color token attached to a severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    NeutralGray,
    Amber,
    Red,
}

impl ColorToken {
    /// ANSI escape prefix used by the terminal renderer
    pub fn ansi(&self) -> &'static str {
        match self {
            ColorToken::NeutralGray => "\x1b[90m",
            ColorToken::Amber => "\x1b[33m",
            ColorToken::Red => "\x1b[31m",
        }
    }

    /// Wrap text in this color
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}\x1b[0m", self.ansi(), text)
    }
}

/// Severity tier for a composite unusualness score.
///
/// Ordered: a larger score never maps to a lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Normal,
    SomewhatUnusual,
    HighlyUnusual,
}

impl Severity {
    pub fn color(&self) -> ColorToken {
        match self {
            Severity::Normal => ColorToken::NeutralGray,
            Severity::SomewhatUnusual => ColorToken::Amber,
            Severity::HighlyUnusual => ColorToken::Red,
        }
    }

    /// Headline shown above the interpretation list
    pub fn headline(&self) -> &'static str {
        match self {
            Severity::Normal => "Normal Options Activity",
            Severity::SomewhatUnusual => "Somewhat Unusual Activity",
            Severity::HighlyUnusual => "Highly Unusual Activity!",
        }
    }
}

/// Map a composite score to its severity tier.
///
/// The score is not range-checked: anything above the somewhat-unusual
/// bound lands in the highest tier, negative values read as normal, and
/// the raw value is displayed unchanged either way.
pub fn classify(score: f64) -> Severity {
    if score <= SCORE_NORMAL_MAX {
        Severity::Normal
    } else if score <= SCORE_SOMEWHAT_MAX {
        Severity::SomewhatUnusual
    } else {
        Severity::HighlyUnusual
    }
}
