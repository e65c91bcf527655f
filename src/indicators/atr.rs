// =============================================================================
// Average True Range (ATR) — simple trailing mean
// =============================================================================
//
// ATR measures market volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
// The first bar has no previous close, so its TR is just H - L.
//
// ATR is the trailing mean of TR over `period` bars.  ATR_RATIO expresses it
// as a percentage of the close.
//
// Default period: 14
// =============================================================================

use crate::market_data::Bar;

use super::series::{finite, ratio, rolling_mean, Series};

/// True Range per bar.
pub fn true_range(bars: &[Bar]) -> Series {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let prev_close = i.checked_sub(1).map(|p| bars[p].close);
            // f64::max swallows NaN, so reject non-finite inputs up front.
            let (high, low) = (finite(bar.high)?, finite(bar.low)?);
            let hl = high - low;
            let tr = match prev_close {
                Some(pc) => {
                    let pc = finite(pc)?;
                    hl.max((high - pc).abs()).max((low - pc).abs())
                }
                None => hl,
            };
            finite(tr)
        })
        .collect()
}

/// ATR series: trailing mean of True Range, defined from index `period - 1`.
///
/// # Edge cases
/// - `period == 0` => all undefined
/// - a non-finite price undefines every window that touches it
pub fn calculate_atr(bars: &[Bar], period: usize) -> Series {
    rolling_mean(&true_range(bars), period)
}

/// ATR as a percentage of the bar's close.
///
/// Useful for comparing volatility across instruments with different price
/// scales.  Undefined wherever ATR is undefined or the close is zero.
pub fn atr_ratio(bars: &[Bar], atr: &[Option<f64>]) -> Series {
    bars.iter()
        .zip(atr)
        .map(|(bar, a)| ratio((*a)? * 100.0, bar.close))
        .collect()
}
