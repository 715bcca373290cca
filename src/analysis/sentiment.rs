/// Call/put share of total volume, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeSplit {
    pub calls_pct: f64,
    pub puts_pct: f64,
}

impl VolumeSplit {
    /// True only for the degenerate no-volume split
    pub fn is_empty(&self) -> bool {
        self.calls_pct == 0.0 && self.puts_pct == 0.0
    }
}

/// Split raw call and put volume into percentage shares.
///
/// The shares sum to 100 whenever there is any volume. With no volume on
/// either side the split is defined as 0/0 and [`VolumeSplit::is_empty`]
/// reports it, leaving the caller to render a placeholder instead of a
/// bar.
pub fn split_volumes(calls: u64, puts: u64) -> VolumeSplit {
    let total = calls + puts;
    if total == 0 {
        return VolumeSplit {
            calls_pct: 0.0,
            puts_pct: 0.0,
        };
    }

    let calls_pct = calls as f64 / total as f64 * 100.0;
    VolumeSplit {
        calls_pct,
        puts_pct: 100.0 - calls_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let split = split_volumes(50, 50);
        assert_eq!(split.calls_pct, 50.0);
        assert_eq!(split.puts_pct, 50.0);
    }

    #[test]
    fn test_call_heavy_split() {
        let split = split_volumes(80, 20);
        assert_eq!(split.calls_pct, 80.0);
        assert_eq!(split.puts_pct, 20.0);
    }

    #[test]
    fn test_shares_sum_to_one_hundred() {
        for (calls, puts) in [(1, 2), (3, 7), (123, 4567), (999_999, 1), (17, 0)] {
            let split = split_volumes(calls, puts);
            assert!(
                (split.calls_pct + split.puts_pct - 100.0).abs() < 1e-9,
                "shares for ({}, {}) sum to {}",
                calls,
                puts,
                split.calls_pct + split.puts_pct
            );
        }
    }

    #[test]
    fn test_one_sided_volume() {
        let split = split_volumes(0, 500);
        assert_eq!(split.calls_pct, 0.0);
        assert_eq!(split.puts_pct, 100.0);
        assert!(!split.is_empty());
    }

    #[test]
    fn test_no_volume_is_degenerate_not_a_crash() {
        let split = split_volumes(0, 0);
        assert_eq!(split.calls_pct, 0.0);
        assert_eq!(split.puts_pct, 0.0);
        assert!(split.is_empty());
    }
}
