// =============================================================================
// Commodity Channel Index (CCI)
// =============================================================================
//
//   TP  = (high + low + close) / 3
//   CCI = (TP - SMA(TP, n)) / (0.015 * MAD(TP, n))
//
// MAD is the mean absolute deviation of TP around its window mean.  CCI is
// unbounded.

use crate::market_data::Bar;

use super::series::{ratio, rolling_mad, rolling_mean, Series};

const LAMBERT: f64 = 0.015;

/// CCI series, defined from index `period - 1` (`period >= 2`).  A window with
/// zero deviation is undefined.
pub fn calculate_cci(bars: &[Bar], period: usize) -> Series {
    let tp: Series = bars.iter().map(|b| Some(b.typical_price())).collect();
    let sma = rolling_mean(&tp, period);
    let mad = rolling_mad(&tp, period);

    tp.iter()
        .zip(sma.iter().zip(&mad))
        .map(|(t, (m, d))| ratio((*t)? - (*m)?, LAMBERT * (*d)?))
        .collect()
}
