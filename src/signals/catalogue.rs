// =============================================================================
// Signal Catalogue — one ternary series per indicator family
// =============================================================================
//
//   Signal            Rule        Inputs
//   ----------------  ----------  ------------------------------------------
//   SMA_SIGNAL        crossing    MA5 / MA20
//   MACD_SIGNAL_TYPE  crossing    MACD / MACD_SIGNAL
//   KDJ_SIGNAL        crossing    K / D
//   OBV_SIGNAL        crossing    OBV / OBV_MA
//   RSI_SIGNAL        contrarian  RSI 30 / 70
//   BB_SIGNAL         contrarian  close vs BB_LOWER / BB_UPPER
//   CCI_SIGNAL        contrarian  CCI -100 / +100
//   WR_SIGNAL         contrarian  Williams %R -80 / -20
//   MFI_SIGNAL        contrarian  MFI 20 / 80
//   ROC_SIGNAL        momentum    ROC sign
//   AROON_SIGNAL      momentum    Aroon oscillator -50 / +50
//   VWAP_SIGNAL       momentum    close vs VWAP
//   ICHIMOKU_SIGNAL   momentum    close vs both Senkou lines
//   ADX_SIGNAL        directional +DI vs -DI when ADX > 25
//
// The series are independent: no signal overrides another.
// =============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::indicators::table::{Column, IndicatorTable};

use super::rules::{against_bands, crossing, directional, threshold, Orientation, SignalSeries};

const MA_FAST: usize = 5;
const MA_SLOW: usize = 20;
const ADX_TRENDING: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignalKind {
    MaCross,
    MacdCross,
    RsiSignal,
    KdjCross,
    BollingerSignal,
    AdxSignal,
    ObvCross,
    VwapSignal,
    CciSignal,
    WilliamsSignal,
    MfiSignal,
    RocSignal,
    AroonSignal,
    IchimokuSignal,
}

impl SignalKind {
    pub const ALL: [SignalKind; 14] = [
        Self::MaCross,
        Self::MacdCross,
        Self::RsiSignal,
        Self::KdjCross,
        Self::BollingerSignal,
        Self::AdxSignal,
        Self::ObvCross,
        Self::VwapSignal,
        Self::CciSignal,
        Self::WilliamsSignal,
        Self::MfiSignal,
        Self::RocSignal,
        Self::AroonSignal,
        Self::IchimokuSignal,
    ];
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MaCross => "SMA_SIGNAL",
            Self::MacdCross => "MACD_SIGNAL_TYPE",
            Self::RsiSignal => "RSI_SIGNAL",
            Self::KdjCross => "KDJ_SIGNAL",
            Self::BollingerSignal => "BB_SIGNAL",
            Self::AdxSignal => "ADX_SIGNAL",
            Self::ObvCross => "OBV_SIGNAL",
            Self::VwapSignal => "VWAP_SIGNAL",
            Self::CciSignal => "CCI_SIGNAL",
            Self::WilliamsSignal => "WR_SIGNAL",
            Self::MfiSignal => "MFI_SIGNAL",
            Self::RocSignal => "ROC_SIGNAL",
            Self::AroonSignal => "AROON_SIGNAL",
            Self::IchimokuSignal => "ICHIMOKU_SIGNAL",
        })
    }
}

impl Serialize for SignalKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Derive every signal series from an enriched table.
///
/// A column the table lacks (e.g. MA5 when 5 is not a configured period)
/// reads as all-undefined, so its signals stay Neutral.
pub fn derive_all(table: &IndicatorTable) -> BTreeMap<SignalKind, SignalSeries> {
    let undefined = vec![None; table.len()];
    let col = |c: Column| table.column(c).unwrap_or(undefined.as_slice());
    let closes = table.closes();

    SignalKind::ALL
        .into_iter()
        .map(|kind| {
            let series = match kind {
                SignalKind::MaCross => crossing(col(Column::Ma(MA_FAST)), col(Column::Ma(MA_SLOW))),
                SignalKind::MacdCross => crossing(col(Column::Macd), col(Column::MacdSignal)),
                SignalKind::KdjCross => crossing(col(Column::K), col(Column::D)),
                SignalKind::ObvCross => crossing(col(Column::Obv), col(Column::ObvMa)),
                SignalKind::RsiSignal => {
                    threshold(col(Column::Rsi), 30.0, 70.0, Orientation::Contrarian)
                }
                SignalKind::BollingerSignal => against_bands(
                    &closes,
                    col(Column::BbLower),
                    col(Column::BbUpper),
                    Orientation::Contrarian,
                ),
                SignalKind::CciSignal => {
                    threshold(col(Column::Cci), -100.0, 100.0, Orientation::Contrarian)
                }
                SignalKind::WilliamsSignal => {
                    threshold(col(Column::WilliamsR), -80.0, -20.0, Orientation::Contrarian)
                }
                SignalKind::MfiSignal => {
                    threshold(col(Column::Mfi), 20.0, 80.0, Orientation::Contrarian)
                }
                SignalKind::RocSignal => threshold(col(Column::Roc), 0.0, 0.0, Orientation::Momentum),
                SignalKind::AroonSignal => {
                    threshold(col(Column::AroonOscillator), -50.0, 50.0, Orientation::Momentum)
                }
                SignalKind::VwapSignal => against_bands(
                    &closes,
                    col(Column::Vwap),
                    col(Column::Vwap),
                    Orientation::Momentum,
                ),
                SignalKind::IchimokuSignal => against_bands(
                    &closes,
                    col(Column::IchimokuSenkouA),
                    col(Column::IchimokuSenkouB),
                    Orientation::Momentum,
                ),
                SignalKind::AdxSignal => directional(
                    col(Column::PlusDi),
                    col(Column::MinusDi),
                    col(Column::Adx),
                    ADX_TRENDING,
                ),
            };
            (kind, series)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::params::IndicatorParams;
    use crate::market_data::fixtures::{falling, rising, series_from_closes};
    use crate::signals::Signal;

    fn table(closes: &[f64]) -> IndicatorTable {
        IndicatorTable::compute(&series_from_closes(closes), &IndicatorParams::default())
    }

    #[test]
    fn every_kind_is_derived() {
        let t = table(&rising(60));
        for kind in SignalKind::ALL {
            assert!(t.signal(kind).is_some(), "{kind} missing");
        }
    }

    #[test]
    fn rising_series_latest_signals() {
        let t = table(&rising(60));
        assert_eq!(t.latest_signal(SignalKind::RocSignal), Some(Signal::Bullish));
        assert_eq!(t.latest_signal(SignalKind::VwapSignal), Some(Signal::Bullish));
        assert_eq!(t.latest_signal(SignalKind::AdxSignal), Some(Signal::Bullish));
        // Overbought on the contrarian side.
        assert_eq!(t.latest_signal(SignalKind::RsiSignal), Some(Signal::Bearish));
        // Highest high on the newest bar scores the up line at 0.
        assert_eq!(t.latest_signal(SignalKind::AroonSignal), Some(Signal::Bearish));
    }

    #[test]
    fn falling_series_latest_signals() {
        let t = table(&falling(60));
        assert_eq!(t.latest_signal(SignalKind::RocSignal), Some(Signal::Bearish));
        assert_eq!(t.latest_signal(SignalKind::VwapSignal), Some(Signal::Bearish));
        assert_eq!(t.latest_signal(SignalKind::RsiSignal), Some(Signal::Bullish));
        assert_eq!(t.latest_signal(SignalKind::AroonSignal), Some(Signal::Bullish));
    }

    #[test]
    fn unconfigured_ma_reads_neutral() {
        let params = IndicatorParams {
            ma_periods: vec![10],
            ..IndicatorParams::default()
        };
        let t = IndicatorTable::compute(&series_from_closes(&rising(40)), &params);
        let ma = t.signal(SignalKind::MaCross).unwrap();
        assert_eq!(ma.len(), 40);
        assert!(ma.iter().all(|s| *s == Signal::Neutral));
    }

    #[test]
    fn single_bar_is_all_neutral() {
        let t = table(&rising(1));
        for (_, series) in t.signals() {
            assert!(series.iter().all(|s| *s == Signal::Neutral));
        }
    }

    #[test]
    fn names_follow_column_convention() {
        assert_eq!(SignalKind::MaCross.to_string(), "SMA_SIGNAL");
        assert_eq!(SignalKind::WilliamsSignal.to_string(), "WR_SIGNAL");
    }
}
