// =============================================================================
// Trend Classifier
// =============================================================================
//
// Places the latest close against the MA5 / MA10 / MA20 stack.
//
// Classification (evaluated top-to-bottom; first match wins):
//
//   1. STRONG UPTREND    — close > MA5 > MA10 > MA20
//   2. UPTREND           — close > MA20 AND MA5 > MA10
//   3. STRONG DOWNTREND  — close < MA5 < MA10 < MA20
//   4. DOWNTREND         — close < MA20 AND MA5 < MA10
//   5. RANGE-BOUND       — anything else
//
// Fewer than 20 bars, or any undefined input, is INSUFFICIENT DATA and no
// rule is evaluated.

use serde::{Deserialize, Serialize};

use crate::indicators::table::{Column, IndicatorTable};

/// Bars required before the MA stack is trusted.
pub const MIN_BARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendState {
    #[serde(rename = "strong uptrend")]
    StrongUptrend,
    #[serde(rename = "uptrend")]
    Uptrend,
    #[serde(rename = "strong downtrend")]
    StrongDowntrend,
    #[serde(rename = "downtrend")]
    Downtrend,
    #[serde(rename = "range-bound")]
    RangeBound,
    #[serde(rename = "insufficient data")]
    InsufficientData,
}

impl std::fmt::Display for TrendState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrongUptrend => write!(f, "strong uptrend"),
            Self::Uptrend => write!(f, "uptrend"),
            Self::StrongDowntrend => write!(f, "strong downtrend"),
            Self::Downtrend => write!(f, "downtrend"),
            Self::RangeBound => write!(f, "range-bound"),
            Self::InsufficientData => write!(f, "insufficient data"),
        }
    }
}

impl TrendState {
    pub fn is_up(self) -> bool {
        matches!(self, Self::StrongUptrend | Self::Uptrend)
    }

    pub fn is_down(self) -> bool {
        matches!(self, Self::StrongDowntrend | Self::Downtrend)
    }
}

/// Classify a single close against its moving averages.
pub fn classify(close: f64, ma5: f64, ma10: f64, ma20: f64) -> TrendState {
    if close > ma5 && ma5 > ma10 && ma10 > ma20 {
        TrendState::StrongUptrend
    } else if close > ma20 && ma5 > ma10 {
        TrendState::Uptrend
    } else if close < ma5 && ma5 < ma10 && ma10 < ma20 {
        TrendState::StrongDowntrend
    } else if close < ma20 && ma5 < ma10 {
        TrendState::Downtrend
    } else {
        TrendState::RangeBound
    }
}

/// Classify the most recent bar of `table`.
pub fn classify_latest(table: &IndicatorTable) -> TrendState {
    if table.len() < MIN_BARS {
        return TrendState::InsufficientData;
    }
    let close = table.closes().last().copied().flatten();
    let stack = (
        close,
        table.latest(Column::Ma(5)),
        table.latest(Column::Ma(10)),
        table.latest(Column::Ma(20)),
    );
    match stack {
        (Some(close), Some(ma5), Some(ma10), Some(ma20)) => classify(close, ma5, ma10, ma20),
        _ => TrendState::InsufficientData,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::params::IndicatorParams;
    use crate::market_data::fixtures::{falling, rising, series_from_closes};

    fn latest(closes: &[f64]) -> TrendState {
        classify_latest(&IndicatorTable::compute(
            &series_from_closes(closes),
            &IndicatorParams::default(),
        ))
    }

    #[test]
    fn first_match_wins() {
        // Satisfies both rule 1 and rule 2.
        assert_eq!(classify(12.0, 11.0, 10.0, 9.0), TrendState::StrongUptrend);
        assert_eq!(classify(12.0, 10.0, 9.0, 11.0), TrendState::Uptrend);
        assert_eq!(classify(8.0, 9.0, 10.0, 11.0), TrendState::StrongDowntrend);
        assert_eq!(classify(8.0, 10.0, 11.0, 9.0), TrendState::Downtrend);
        assert_eq!(classify(10.0, 10.0, 10.0, 10.0), TrendState::RangeBound);
    }

    #[test]
    fn rising_closes_are_strong_uptrend() {
        assert_eq!(latest(&rising(60)), TrendState::StrongUptrend);
    }

    #[test]
    fn falling_closes_are_strong_downtrend() {
        assert_eq!(latest(&falling(60)), TrendState::StrongDowntrend);
    }

    #[test]
    fn short_series_is_insufficient() {
        assert_eq!(latest(&rising(19)), TrendState::InsufficientData);
        assert_eq!(latest(&rising(20)), TrendState::StrongUptrend);
    }

    #[test]
    fn missing_ma_column_is_insufficient() {
        let params = IndicatorParams {
            ma_periods: vec![5, 20],
            ..IndicatorParams::default()
        };
        let table = IndicatorTable::compute(&series_from_closes(&rising(40)), &params);
        assert_eq!(classify_latest(&table), TrendState::InsufficientData);
    }

    #[test]
    fn labels() {
        assert_eq!(TrendState::RangeBound.to_string(), "range-bound");
        assert_eq!(
            serde_json::to_string(&TrendState::StrongUptrend).unwrap(),
            "\"strong uptrend\""
        );
        assert!(TrendState::Uptrend.is_up());
        assert!(TrendState::StrongDowntrend.is_down());
        assert!(!TrendState::InsufficientData.is_up());
    }
}
