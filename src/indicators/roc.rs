// =============================================================================
// Rate of Change (ROC) — Momentum Indicator
// =============================================================================
//
// ROC measures the percentage change in price over a look-back period:
//   ROC = ((close - close_n) / close_n) * 100
//
// Positive ROC indicates upward momentum; negative indicates downward.

use super::series::{ratio, Series};

/// Calculate the Rate of Change for every close.
///
/// The first `period` slots are undefined, as is any slot whose reference
/// close is zero.
pub fn calculate_roc(closes: &[f64], period: usize) -> Series {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            if period == 0 {
                return None;
            }
            let prev = closes[i.checked_sub(period)?];
            ratio((close - prev) * 100.0, prev)
        })
        .collect()
}
