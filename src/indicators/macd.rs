// =============================================================================
// MACD — Moving Average Convergence / Divergence
// =============================================================================
//
//   MACD      = EMA(fast) - EMA(slow)
//   signal    = EMA(signal) of MACD
//   histogram = MACD - signal
//
// Smoothing runs on the unmasked EMAs.  MACD becomes defined once the slow
// EMA window is filled; the signal line and histogram need a further
// `signal - 1` bars on top of that.
// =============================================================================

use super::moving_average::ema_full;
use super::series::{ewm_span, mask_before, zip_with, Series};

/// The three aligned MACD series.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdResult {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
}

pub fn calculate_macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdResult {
    let n = closes.len();
    if fast == 0 || slow == 0 || signal == 0 {
        return MacdResult {
            macd: vec![None; n],
            signal: vec![None; n],
            histogram: vec![None; n],
        };
    }

    let fast_ema = ema_full(closes, fast);
    let slow_ema = ema_full(closes, slow);
    let macd_full = zip_with(&fast_ema, &slow_ema, |f, s| Some(f - s));
    let signal_full = ewm_span(&macd_full, signal);
    let hist_full = zip_with(&macd_full, &signal_full, |m, s| Some(m - s));

    let macd_start = fast.max(slow) - 1;
    let signal_start = macd_start + signal - 1;

    MacdResult {
        macd: mask_before(macd_full, macd_start),
        signal: mask_before(signal_full, signal_start),
        histogram: mask_before(hist_full, signal_start),
    }
}
