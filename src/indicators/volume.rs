// =============================================================================
// Volume-Weighted Indicators — OBV, VWAP, MFI
// =============================================================================
//
// OBV   cumulative volume signed by close direction (up +, down -, flat 0),
//       starting at 0 on the first bar.  OBV_MA is its trailing mean.
// VWAP  cumulative(typical price * volume) / cumulative(volume) from the
//       first bar of the series.
// MFI   money flow = typical price * volume, split into positive / negative
//       flow by the direction of the typical price, summed over `period`
//       transitions and mapped through the RSI formula.
// =============================================================================

use crate::market_data::Bar;

use super::rsi::strength_index;
use super::series::{ratio, rolling_mean, rolling_sum, Series};

/// On-Balance Volume.  Always defined.
pub fn calculate_obv(bars: &[Bar]) -> Series {
    let mut total = 0.0;
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            if let Some(prev) = i.checked_sub(1).map(|p| &bars[p]) {
                if bar.close > prev.close {
                    total += bar.volume;
                } else if bar.close < prev.close {
                    total -= bar.volume;
                }
            }
            Some(total)
        })
        .collect()
}

/// Trailing mean of OBV.
pub fn calculate_obv_ma(obv: &[Option<f64>], period: usize) -> Series {
    rolling_mean(obv, period)
}

/// Cumulative VWAP.  Undefined while cumulative volume is zero.
pub fn calculate_vwap(bars: &[Bar]) -> Series {
    let mut pv = 0.0;
    let mut vol = 0.0;
    bars.iter()
        .map(|bar| {
            pv += bar.typical_price() * bar.volume;
            vol += bar.volume;
            ratio(pv, vol)
        })
        .collect()
}

/// Money Flow Index, defined from index `period - 1`.  Bar 0 carries no
/// flow in either direction.
///
/// # Edge cases
/// - no positive and no negative flow in the window => undefined
/// - positive flow only => 100.0
pub fn calculate_mfi(bars: &[Bar], period: usize) -> Series {
    let mut positive: Series = Vec::with_capacity(bars.len());
    let mut negative: Series = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        let Some(prev) = i.checked_sub(1).map(|p| &bars[p]) else {
            positive.push(Some(0.0));
            negative.push(Some(0.0));
            continue;
        };
        let (tp, prev_tp) = (bar.typical_price(), prev.typical_price());
        let flow = tp * bar.volume;
        positive.push(Some(if tp > prev_tp { flow } else { 0.0 }));
        negative.push(Some(if tp < prev_tp { flow } else { 0.0 }));
    }

    let pos_sum = rolling_sum(&positive, period);
    let neg_sum = rolling_sum(&negative, period);
    pos_sum
        .iter()
        .zip(&neg_sum)
        .map(|(p, n)| strength_index((*p)?, (*n)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::fixtures::{bar, bars_from_closes};

    // ---- obv -------------------------------------------------------------

    #[test]
    fn obv_signs_volume_by_direction() {
        let bars = vec![
            bar(0, 10.0, 11.0, 9.0, 10.0, 100.0),
            bar(1, 10.0, 12.0, 9.0, 11.0, 200.0),
            bar(2, 11.0, 12.0, 9.0, 10.0, 50.0),
            bar(3, 10.0, 12.0, 9.0, 10.0, 70.0),
        ];
        assert_eq!(
            calculate_obv(&bars),
            vec![Some(0.0), Some(200.0), Some(150.0), Some(150.0)]
        );
    }

    #[test]
    fn obv_ma_warm_up() {
        let bars = bars_from_closes(&(0..25).map(|i| i as f64).collect::<Vec<_>>());
        let ma = calculate_obv_ma(&calculate_obv(&bars), 20);
        assert!(ma[18].is_none());
        assert!(ma[19].is_some());
    }

    // ---- vwap ------------------------------------------------------------

    #[test]
    fn vwap_weights_by_volume() {
        let bars = vec![
            bar(0, 10.0, 10.0, 10.0, 10.0, 100.0),
            bar(1, 20.0, 20.0, 20.0, 20.0, 300.0),
        ];
        let v = calculate_vwap(&bars);
        assert!((v[0].unwrap() - 10.0).abs() < 1e-10);
        assert!((v[1].unwrap() - 17.5).abs() < 1e-10);
    }

    #[test]
    fn vwap_zero_volume_is_undefined() {
        let bars = vec![bar(0, 10.0, 11.0, 9.0, 10.0, 0.0)];
        assert_eq!(calculate_vwap(&bars), vec![None]);
    }

    // ---- mfi -------------------------------------------------------------

    #[test]
    fn mfi_defined_from_period_minus_one() {
        let closes: Vec<f64> = (0..20).map(|i| 10.0 + (i as f64).sin()).collect();
        let m = calculate_mfi(&bars_from_closes(&closes), 14);
        assert!(m[12].is_none());
        assert!(m[13].is_some());
    }

    #[test]
    fn mfi_flat_is_undefined() {
        let m = calculate_mfi(&bars_from_closes(&[50.0; 20]), 14);
        assert!(m.iter().all(Option::is_none));
    }

    #[test]
    fn mfi_rising_is_hundred() {
        let closes: Vec<f64> = (0..20).map(|i| 10.0 + i as f64).collect();
        let m = calculate_mfi(&bars_from_closes(&closes), 14);
        assert!((m[19].unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn mfi_bounded() {
        let closes: Vec<f64> = (0..100).map(|i| 40.0 + (i as f64 * 0.45).sin() * 6.0).collect();
        for &v in calculate_mfi(&bars_from_closes(&closes), 14).iter().flatten() {
            assert!((0.0..=100.0).contains(&v), "MFI {v} out of range");
        }
    }
}
