// =============================================================================
// KDJ Stochastic Oscillator
// =============================================================================
//
//   RSV = (close - lowest_low_n) / (highest_high_n - lowest_low_n) * 100
//   K   = EWM(RSV, alpha = 1/m1)
//   D   = EWM(K,   alpha = 1/m2)
//   J   = 3K - 2D
//
// A zero-range window (highest high == lowest low) has no RSV; K, D and J are
// undefined on that bar and the smoothing picks up again on the next one.
// =============================================================================

use crate::market_data::Bar;

use super::series::{ewm, ratio, rolling_max, rolling_min, zip_with, Series};

#[derive(Debug, Clone, PartialEq)]
pub struct KdjResult {
    pub k: Series,
    pub d: Series,
    pub j: Series,
}

pub fn calculate_kdj(bars: &[Bar], n: usize, m1: usize, m2: usize) -> KdjResult {
    let len = bars.len();
    if n == 0 || m1 == 0 || m2 == 0 {
        return KdjResult {
            k: vec![None; len],
            d: vec![None; len],
            j: vec![None; len],
        };
    }

    let highs: Series = bars.iter().map(|b| Some(b.high)).collect();
    let lows: Series = bars.iter().map(|b| Some(b.low)).collect();
    let highest = rolling_max(&highs, n);
    let lowest = rolling_min(&lows, n);

    let rsv: Series = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let (hh, ll) = (highest[i]?, lowest[i]?);
            ratio(b.close - ll, hh - ll).map(|r| r * 100.0)
        })
        .collect();

    let k = ewm(&rsv, 1.0 / m1 as f64);
    let d = ewm(&k, 1.0 / m2 as f64);
    let j = zip_with(&k, &d, |k, d| Some(3.0 * k - 2.0 * d));

    KdjResult { k, d, j }
}
