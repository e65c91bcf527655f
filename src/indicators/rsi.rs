// =============================================================================
// Relative Strength Index (RSI) — simple rolling averages
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an instrument is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.  The first
//          bar has no delta.
// Step 2 — gain = max(delta, 0), loss = max(-delta, 0).
// Step 3 — avg_gain / avg_loss = trailing mean over `period` deltas.
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// The first RSI value therefore sits at index `period`.
//
// Thresholds:  RSI > 70 => OVERBOUGHT,  RSI < 30 => OVERSOLD.
// =============================================================================

use super::series::{rolling_mean, Series};

/// Compute the full RSI series for the given `closes` and `period`.
///
/// # Edge cases
/// - `period == 0` => all undefined
/// - fewer than `period` deltas => all undefined
/// - no gains and no losses in the window (0/0) => undefined, not 50
/// - gains but no losses => 100.0
pub fn calculate_rsi(closes: &[f64], period: usize) -> Series {
    let (gains, losses) = gains_and_losses(closes);
    let avg_gain = rolling_mean(&gains, period);
    let avg_loss = rolling_mean(&losses, period);

    avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(g, l)| strength_index((*g)?, (*l)?))
        .collect()
}

/// Split bar-to-bar changes into gain and loss series.  Position 0 is
/// undefined in both.
fn gains_and_losses(values: &[f64]) -> (Series, Series) {
    let mut gains = Vec::with_capacity(values.len());
    let mut losses = Vec::with_capacity(values.len());
    if !values.is_empty() {
        gains.push(None);
        losses.push(None);
    }
    for w in values.windows(2) {
        let delta = w[1] - w[0];
        gains.push(Some(if delta > 0.0 { delta } else { 0.0 }));
        losses.push(Some(if delta < 0.0 { -delta } else { 0.0 }));
    }
    (gains, losses)
}

/// 100 - 100 / (1 + up / down), shared with MFI.
///
/// - `up == down == 0` => undefined
/// - `down == 0`       => 100.0
pub(crate) fn strength_index(up: f64, down: f64) -> Option<f64> {
    if down == 0.0 {
        return if up == 0.0 { None } else { Some(100.0) };
    }
    let rs = up / down;
    let value = 100.0 - 100.0 / (1.0 + rs);
    value.is_finite().then_some(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_period_zero() {
        assert!(calculate_rsi(&[1.0, 2.0, 3.0], 0).iter().all(Option::is_none));
    }

    #[test]
    fn rsi_insufficient_data() {
        // 14 closes => 13 deltas < 14.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(calculate_rsi(&closes, 14).iter().all(Option::is_none));
    }

    #[test]
    fn rsi_first_value_at_period() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        let s = calculate_rsi(&closes, 14);
        assert!(s[13].is_none());
        assert!(s[14].is_some());
    }

    #[test]
    fn rsi_all_gains() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let s = calculate_rsi(&closes, 14);
        for v in s.iter().flatten() {
            assert!((v - 100.0).abs() < 1e-10, "expected 100.0, got {v}");
        }
    }

    #[test]
    fn rsi_all_losses() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let s = calculate_rsi(&closes, 14);
        assert!(s[14].is_some());
        for v in s.iter().flatten() {
            assert!(v.abs() < 1e-10, "expected 0.0, got {v}");
        }
    }

    #[test]
    fn rsi_flat_market_is_undefined() {
        // 0/0 — no movement is not the same as RSI 50.
        let s = calculate_rsi(&[100.0; 20], 14);
        assert!(s.iter().all(Option::is_none));
    }

    #[test]
    fn rsi_equal_gains_and_losses_is_fifty() {
        let closes: Vec<f64> = (0..30).map(|i| if i % 2 == 0 { 100.0 } else { 101.0 }).collect();
        let s = calculate_rsi(&closes, 14);
        assert!((s[29].unwrap() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn rsi_range_check() {
        let closes: Vec<f64> = (0..120)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 10.0 + (i as f64 * 0.13).cos() * 3.0)
            .collect();
        for &v in calculate_rsi(&closes, 14).iter().flatten() {
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
        }
    }
}
