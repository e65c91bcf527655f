// =============================================================================
// Indicator Summary — latest-bar snapshot grouped by indicator family
// =============================================================================
//
// Only allow-listed columns appear, and only when the table carries them.
// Undefined readings serialise as `null`, never as 0.  Every signal series
// contributes its latest code.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::indicators::series::ratio;
use crate::indicators::table::{Column, IndicatorTable};
use crate::market_data::BarSeries;
use crate::signals::{Signal, SignalKind};

const TREND: [Column; 4] = [Column::Ma(5), Column::Ma(10), Column::Ma(20), Column::Ma(60)];

const MOMENTUM: [Column; 11] = [
    Column::Macd,
    Column::MacdSignal,
    Column::MacdHistogram,
    Column::Rsi,
    Column::K,
    Column::D,
    Column::J,
    Column::Cci,
    Column::WilliamsR,
    Column::Mfi,
    Column::Roc,
];

const VOLATILITY: [Column; 5] = [
    Column::BbUpper,
    Column::BbLower,
    Column::BbWidth,
    Column::Atr,
    Column::Adx,
];

const VOLUME: [Column; 2] = [Column::Obv, Column::Vwap];

pub type Family = BTreeMap<Column, Option<f64>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorSummary {
    pub trend_indicators: Family,
    pub momentum_indicators: Family,
    pub volatility_indicators: Family,
    pub volume_indicators: Family,
    pub signals: BTreeMap<SignalKind, Signal>,
}

impl IndicatorSummary {
    pub fn from_table(table: &IndicatorTable) -> Self {
        let family = |columns: &[Column]| -> Family {
            columns
                .iter()
                .filter(|c| table.column(**c).is_some())
                .map(|c| (*c, table.latest(*c)))
                .collect()
        };
        Self {
            trend_indicators: family(&TREND),
            momentum_indicators: family(&MOMENTUM),
            volatility_indicators: family(&VOLATILITY),
            volume_indicators: family(&VOLUME),
            signals: table
                .signals()
                .map(|(kind, series)| (kind, series.last().copied().unwrap_or_default()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Historical statistics
// ---------------------------------------------------------------------------

/// Recent-history context handed to narrative consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoricalStats {
    /// Close-to-close change against the close 30 bars back (inclusive), %.
    pub change_30d_pct: Option<f64>,
    pub change_60d_pct: Option<f64>,
    pub high_30d: Option<f64>,
    pub low_30d: Option<f64>,
    pub avg_volume_20d: Option<f64>,
}

impl HistoricalStats {
    pub fn from_series(series: &BarSeries) -> Self {
        let Some(bars) = series.bars() else {
            return Self::default();
        };
        let n = bars.len();
        let window = |len: usize| (n >= len).then(|| &bars[n - len..]);
        let change = |len: usize| {
            let w = window(len)?;
            let (first, last) = (w.first()?.close, w.last()?.close);
            ratio((last - first) * 100.0, first)
        };

        Self {
            change_30d_pct: change(30),
            change_60d_pct: change(60),
            high_30d: window(30).map(|w| w.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max)),
            low_30d: window(30).map(|w| w.iter().map(|b| b.low).fold(f64::INFINITY, f64::min)),
            avg_volume_20d: window(20).map(|w| w.iter().map(|b| b.volume).sum::<f64>() / 20.0),
        }
    }
}
