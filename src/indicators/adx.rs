// =============================================================================
// Average Directional Index (ADX) and Directional Indicators (+DI / -DI)
// =============================================================================
//
// ADX quantifies trend **strength** regardless of direction.
//
// Calculation pipeline:
//   1. +DM = max(high_t - high_{t-1}, 0)
//      -DM = max(low_{t-1} - low_t, 0)
//   2. ATR = trailing mean of True Range over `period`.
//   3. +DI = 100 * mean(+DM, period) / ATR
//      -DI = 100 * mean(-DM, period) / ATR
//   4. DX  = 100 * |+DI - -DI| / (+DI + -DI)
//   5. ADX = trailing mean of DX over `period`.
//
// The two movements are taken independently, without the usual "larger move
// wins" filter.
//
// Interpretation:
//   ADX > 25  => trending market
// =============================================================================

use crate::market_data::Bar;

use super::atr::calculate_atr;
use super::series::{ratio, rolling_mean, Series};

/// Aligned ADX / DI series.
#[derive(Debug, Clone, PartialEq)]
pub struct AdxResult {
    pub adx: Series,
    pub plus_di: Series,
    pub minus_di: Series,
}

/// Compute ADX, +DI and -DI for every bar.
///
/// +DI / -DI are defined from index `period` (the first bar has no movement),
/// ADX from index `2 * period - 1`.  Any zero denominator (ATR == 0 or
/// +DI + -DI == 0) leaves the slot undefined.
pub fn calculate_adx(bars: &[Bar], period: usize) -> AdxResult {
    let mut plus_dm: Series = Vec::with_capacity(bars.len());
    let mut minus_dm: Series = Vec::with_capacity(bars.len());
    for (i, bar) in bars.iter().enumerate() {
        match i.checked_sub(1).map(|p| &bars[p]) {
            Some(prev) => {
                plus_dm.push(Some((bar.high - prev.high).max(0.0)));
                minus_dm.push(Some((prev.low - bar.low).max(0.0)));
            }
            None => {
                plus_dm.push(None);
                minus_dm.push(None);
            }
        }
    }

    let atr = calculate_atr(bars, period);
    let plus_avg = rolling_mean(&plus_dm, period);
    let minus_avg = rolling_mean(&minus_dm, period);

    let di = |avg: &Series| -> Series {
        avg.iter()
            .zip(&atr)
            .map(|(dm, tr)| ratio(100.0 * (*dm)?, (*tr)?))
            .collect()
    };
    let plus_di = di(&plus_avg);
    let minus_di = di(&minus_avg);

    let dx: Series = plus_di
        .iter()
        .zip(&minus_di)
        .map(|(p, m)| {
            let (p, m) = ((*p)?, (*m)?);
            ratio(100.0 * (p - m).abs(), p + m)
        })
        .collect();

    AdxResult {
        adx: rolling_mean(&dx, period),
        plus_di,
        minus_di,
    }
}
