// =============================================================================
// Ichimoku Kinko Hyo
// =============================================================================
//
//   Tenkan  = (highest high_9  + lowest low_9)  / 2
//   Kijun   = (highest high_26 + lowest low_26) / 2
//   SenkouA = (Tenkan + Kijun) / 2, plotted 26 bars forward
//   SenkouB = (highest high_52 + lowest low_52) / 2, plotted 26 bars forward
//   Chikou  = close, plotted 26 bars back
//
// Chikou looks forward in the bar table, so the latest `displacement` slots
// are always undefined.
// =============================================================================

use crate::market_data::Bar;

use super::series::{rolling_max, rolling_min, shift, zip_with, Series};

#[derive(Debug, Clone, PartialEq)]
pub struct IchimokuResult {
    pub tenkan: Series,
    pub kijun: Series,
    pub senkou_a: Series,
    pub senkou_b: Series,
    pub chikou: Series,
}

pub fn calculate_ichimoku(
    bars: &[Bar],
    tenkan: usize,
    kijun: usize,
    senkou_b: usize,
    displacement: usize,
) -> IchimokuResult {
    let highs: Series = bars.iter().map(|b| Some(b.high)).collect();
    let lows: Series = bars.iter().map(|b| Some(b.low)).collect();
    let closes: Series = bars.iter().map(|b| Some(b.close)).collect();

    let midpoint = |period: usize| -> Series {
        zip_with(&rolling_max(&highs, period), &rolling_min(&lows, period), |h, l| {
            Some((h + l) / 2.0)
        })
    };

    let tenkan_line = midpoint(tenkan);
    let kijun_line = midpoint(kijun);
    let lead_a = zip_with(&tenkan_line, &kijun_line, |t, k| Some((t + k) / 2.0));
    let lead_b = midpoint(senkou_b);
    let offset = displacement as isize;

    IchimokuResult {
        senkou_a: shift(&lead_a, offset),
        senkou_b: shift(&lead_b, offset),
        chikou: shift(&closes, -offset),
        tenkan: tenkan_line,
        kijun: kijun_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::fixtures::{bars_from_closes, rising};

    fn default_lines(n: usize) -> IchimokuResult {
        calculate_ichimoku(&bars_from_closes(&rising(n)), 9, 26, 52, 26)
    }

    #[test]
    fn line_warm_ups() {
        let r = default_lines(100);
        assert!(r.tenkan[7].is_none() && r.tenkan[8].is_some());
        assert!(r.kijun[24].is_none() && r.kijun[25].is_some());
        assert!(r.senkou_a[50].is_none() && r.senkou_a[51].is_some());
        assert!(r.senkou_b[76].is_none() && r.senkou_b[77].is_some());
    }

    #[test]
    fn chikou_is_close_shifted_back() {
        let r = default_lines(60);
        assert_eq!(r.chikou[0], Some(36.0));
        assert!(r.chikou[33].is_some());
        assert!(r.chikou[34..].iter().all(Option::is_none));
    }

    #[test]
    fn tenkan_is_window_midpoint() {
        let r = default_lines(20);
        // closes 10..=18 in the first window, bars span close +/- 1
        assert!((r.tenkan[8].unwrap() - 14.0).abs() < 1e-10);
    }

    #[test]
    fn senkou_a_comes_from_displaced_bar() {
        let r = default_lines(80);
        let expected = (r.tenkan[40].unwrap() + r.kijun[40].unwrap()) / 2.0;
        assert!((r.senkou_a[66].unwrap() - expected).abs() < 1e-10);
    }
}
