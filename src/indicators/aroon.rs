// =============================================================================
// Aroon Up / Down / Oscillator
// =============================================================================
//
// Over the trailing `period + 1` bars, with `i` the extreme's position
// counted from the oldest bar of the window:
//   up   = (period - i_highest_high) / period * 100
//   down = (period - i_lowest_low)   / period * 100
//   osc  = up - down
//
// An extreme printed on the oldest bar scores 100, one on the newest bar
// scores 0.  When the extreme repeats the oldest occurrence counts.

use crate::market_data::Bar;

use super::series::Series;

#[derive(Debug, Clone, PartialEq)]
pub struct AroonResult {
    pub up: Series,
    pub down: Series,
    pub oscillator: Series,
}

pub fn calculate_aroon(bars: &[Bar], period: usize) -> AroonResult {
    let n = bars.len();
    let mut up = vec![None; n];
    let mut down = vec![None; n];
    let mut oscillator = vec![None; n];
    if period == 0 {
        return AroonResult { up, down, oscillator };
    }

    let scale = |index: usize| (period - index) as f64 / period as f64 * 100.0;

    for end in period..n {
        let window = &bars[end - period..=end];
        if window.iter().any(|b| !b.high.is_finite() || !b.low.is_finite()) {
            continue;
        }
        let high_at = first_extreme(window, |a, b| a.high > b.high);
        let low_at = first_extreme(window, |a, b| a.low < b.low);
        let (u, d) = (scale(high_at), scale(low_at));
        up[end] = Some(u);
        down[end] = Some(d);
        oscillator[end] = Some(u - d);
    }

    AroonResult { up, down, oscillator }
}

/// Position of the extreme bar; on ties the earliest one.
fn first_extreme<F>(window: &[Bar], better: F) -> usize
where
    F: Fn(&Bar, &Bar) -> bool,
{
    let mut best = 0;
    for (i, bar) in window.iter().enumerate().skip(1) {
        if better(bar, &window[best]) {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::fixtures::{bars_from_closes, falling, rising};

    #[test]
    fn warm_up_needs_period_plus_one_bars() {
        let r = calculate_aroon(&bars_from_closes(&rising(30)), 25);
        assert!(r.up[24].is_none());
        assert!(r.up[25].is_some());
    }

    #[test]
    fn rising_market_reads_low_on_up_line() {
        // Highest high is the newest bar, lowest low the oldest.
        let r = calculate_aroon(&bars_from_closes(&rising(30)), 25);
        assert!(r.up[29].unwrap().abs() < 1e-10);
        assert!((r.down[29].unwrap() - 100.0).abs() < 1e-10);
        assert!((r.oscillator[29].unwrap() + 100.0).abs() < 1e-10);
    }

    #[test]
    fn falling_market_gives_positive_oscillator() {
        let r = calculate_aroon(&bars_from_closes(&falling(30)), 25);
        assert!((r.oscillator[29].unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn high_in_middle_of_window() {
        let mut closes = vec![10.0; 6];
        closes[3] = 20.0;
        let r = calculate_aroon(&bars_from_closes(&closes), 5);
        // High at position 3 of the window: (5 - 3) / 5 * 100
        assert!((r.up[5].unwrap() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn repeated_extreme_uses_oldest() {
        let closes = [10.0, 20.0, 15.0, 20.0, 12.0, 11.0];
        let r = calculate_aroon(&bars_from_closes(&closes), 5);
        // Highs tie at positions 1 and 3: (5 - 1) / 5 * 100
        assert!((r.up[5].unwrap() - 80.0).abs() < 1e-10);
        // Flat lows: the oldest bar wins, (5 - 0) / 5 * 100
        let flat = calculate_aroon(&bars_from_closes(&[10.0; 6]), 5);
        assert!((flat.down[5].unwrap() - 100.0).abs() < 1e-10);
    }
}
