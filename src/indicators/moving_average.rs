// =============================================================================
// Simple & Exponential Moving Averages
// =============================================================================
//
// SMA_t = mean(close_{t-n+1} ..= close_t)
//
// EMA uses the span convention:
//   multiplier = 2 / (period + 1)
//   EMA_t      = close_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The EMA recursion is seeded with the very first close, but values before
// position `period - 1` are reported as undefined so every moving average
// shares the same warm-up.
// =============================================================================

use super::series::{defined, ewm_span, mask_before, rolling_mean, Series};

/// Simple moving average of `closes` over `period` bars.
pub fn sma(closes: &[f64], period: usize) -> Series {
    rolling_mean(&defined(closes), period)
}

/// Exponential moving average of `closes` with span `period`.
///
/// # Edge cases
/// - `period == 0` => all undefined
/// - `closes.len() < period` => all undefined
pub fn ema(closes: &[f64], period: usize) -> Series {
    if period == 0 {
        return vec![None; closes.len()];
    }
    mask_before(ema_full(closes, period), period - 1)
}

/// EMA without the warm-up mask.  Composite indicators (MACD) smooth on top of
/// this so their values do not depend on where the mask sits.
pub(crate) fn ema_full(closes: &[f64], period: usize) -> Series {
    ewm_span(&defined(closes), period)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(n: usize) -> Vec<f64> {
        (1..=n).map(|i| i as f64).collect()
    }

    // ---- sma -------------------------------------------------------------

    #[test]
    fn sma_warm_up() {
        let s = sma(&ascending(10), 5);
        assert!(s[..4].iter().all(Option::is_none));
        assert!((s[4].unwrap() - 3.0).abs() < 1e-10);
        assert!((s[9].unwrap() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn sma_shorter_than_period() {
        assert!(sma(&[1.0, 2.0], 5).iter().all(Option::is_none));
    }

    // ---- ema -------------------------------------------------------------

    #[test]
    fn ema_period_zero() {
        assert!(ema(&[1.0, 2.0, 3.0], 0).iter().all(Option::is_none));
    }

    #[test]
    fn ema_known_values() {
        // multiplier = 2/6 = 1/3, seeded with the first close.
        let closes = ascending(10);
        let s = ema(&closes, 5);
        assert!(s[..4].iter().all(Option::is_none));

        let mult = 1.0 / 3.0;
        let mut expected = closes[0];
        for (i, &c) in closes.iter().enumerate().skip(1) {
            expected = c * mult + expected * (1.0 - mult);
            if i >= 4 {
                let got = s[i].unwrap();
                assert!((got - expected).abs() < 1e-10, "got {got}, expected {expected}");
            }
        }
    }

    #[test]
    fn ema_flat_series_is_flat() {
        let s = ema(&[100.0; 30], 10);
        assert!(s[9..].iter().all(|v| (v.unwrap() - 100.0).abs() < 1e-10));
    }

    #[test]
    fn ema_lags_rising_prices() {
        let closes = ascending(60);
        let s = ema(&closes, 20);
        assert!(s[59].unwrap() < 60.0);
        assert!(s[59].unwrap() > sma(&closes, 60)[59].unwrap());
    }
}
