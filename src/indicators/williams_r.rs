// =============================================================================
// Williams %R
// =============================================================================
//
//   %R = (highest_high_n - close) / (highest_high_n - lowest_low_n) * -100
//
// Ranges from -100 (close at the low) to 0 (close at the high) for well-formed
// bars; malformed bars are not clamped.

use crate::market_data::Bar;

use super::series::{ratio, rolling_max, rolling_min, Series};

pub fn calculate_williams_r(bars: &[Bar], period: usize) -> Series {
    let highs: Series = bars.iter().map(|b| Some(b.high)).collect();
    let lows: Series = bars.iter().map(|b| Some(b.low)).collect();
    let hh = rolling_max(&highs, period);
    let ll = rolling_min(&lows, period);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let (h, l) = (hh[i]?, ll[i]?);
            ratio(h - bar.close, h - l).map(|r| r * -100.0)
        })
        .collect()
}
