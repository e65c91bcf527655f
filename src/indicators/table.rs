// =============================================================================
// Indicator Table — the merged, date-aligned output of the full catalogue
// =============================================================================
//
// Every indicator in the catalogue is computed independently from the same
// bar series and stored under its column name.  Every ternary signal series
// is derived from those columns and stored alongside them.
//
// Malformed input (a required field absent on any bar) skips the whole batch:
// the table carries the original bars and no columns.
// =============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::warn;

use crate::market_data::BarSeries;
use crate::signals::{self, Signal, SignalKind, SignalSeries};

use super::adx::calculate_adx;
use super::aroon::calculate_aroon;
use super::atr::{atr_ratio, calculate_atr};
use super::bollinger::calculate_bollinger;
use super::cci::calculate_cci;
use super::ichimoku::calculate_ichimoku;
use super::kdj::calculate_kdj;
use super::macd::calculate_macd;
use super::moving_average::{ema, sma};
use super::params::IndicatorParams;
use super::roc::calculate_roc;
use super::rsi::calculate_rsi;
use super::series::Series;
use super::volume::{calculate_mfi, calculate_obv, calculate_obv_ma, calculate_vwap};
use super::williams_r::calculate_williams_r;

/// Column names of the indicator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Ma(usize),
    Ema(usize),
    Macd,
    MacdSignal,
    MacdHistogram,
    Rsi,
    K,
    D,
    J,
    BbUpper,
    BbMiddle,
    BbLower,
    BbWidth,
    BbPercent,
    Atr,
    AtrRatio,
    Adx,
    PlusDi,
    MinusDi,
    Obv,
    ObvMa,
    Vwap,
    Cci,
    WilliamsR,
    Mfi,
    Roc,
    AroonUp,
    AroonDown,
    AroonOscillator,
    IchimokuTenkan,
    IchimokuKijun,
    IchimokuSenkouA,
    IchimokuSenkouB,
    IchimokuChikou,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ma(n) => return write!(f, "MA{n}"),
            Self::Ema(n) => return write!(f, "EMA{n}"),
            Self::Macd => "MACD",
            Self::MacdSignal => "MACD_SIGNAL",
            Self::MacdHistogram => "MACD_HISTOGRAM",
            Self::Rsi => "RSI",
            Self::K => "K",
            Self::D => "D",
            Self::J => "J",
            Self::BbUpper => "BB_UPPER",
            Self::BbMiddle => "BB_MIDDLE",
            Self::BbLower => "BB_LOWER",
            Self::BbWidth => "BB_WIDTH",
            Self::BbPercent => "BB_PERCENT",
            Self::Atr => "ATR",
            Self::AtrRatio => "ATR_RATIO",
            Self::Adx => "ADX",
            Self::PlusDi => "PLUS_DI",
            Self::MinusDi => "MINUS_DI",
            Self::Obv => "OBV",
            Self::ObvMa => "OBV_MA",
            Self::Vwap => "VWAP",
            Self::Cci => "CCI",
            Self::WilliamsR => "WILLIAMS_R",
            Self::Mfi => "MFI",
            Self::Roc => "ROC",
            Self::AroonUp => "AROON_UP",
            Self::AroonDown => "AROON_DOWN",
            Self::AroonOscillator => "AROON_OSCILLATOR",
            Self::IchimokuTenkan => "ICHIMOKU_TENKAN",
            Self::IchimokuKijun => "ICHIMOKU_KIJUN",
            Self::IchimokuSenkouA => "ICHIMOKU_SENKOU_A",
            Self::IchimokuSenkouB => "ICHIMOKU_SENKOU_B",
            Self::IchimokuChikou => "ICHIMOKU_CHIKOU",
        };
        f.write_str(name)
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The bars plus every derived column and signal series, aligned by position.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    series: BarSeries,
    columns: BTreeMap<Column, Series>,
    signals: BTreeMap<SignalKind, SignalSeries>,
}

impl IndicatorTable {
    /// Run the full catalogue over `series`.
    ///
    /// Never fails: missing required fields leave the table without columns
    /// or signals, and undefined slots are `None`.
    pub fn compute(series: &BarSeries, params: &IndicatorParams) -> Self {
        let Some(bars) = series.bars() else {
            warn!(
                missing = ?series.missing_fields(),
                bars = series.len(),
                "bar series is missing required fields, skipping indicator batch"
            );
            return Self {
                series: series.clone(),
                columns: BTreeMap::new(),
                signals: BTreeMap::new(),
            };
        };

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let mut columns = BTreeMap::new();

        for &period in &params.ma_periods {
            columns.insert(Column::Ma(period), sma(&closes, period));
            columns.insert(Column::Ema(period), ema(&closes, period));
        }

        let macd = calculate_macd(&closes, params.macd_fast, params.macd_slow, params.macd_signal);
        columns.insert(Column::Macd, macd.macd);
        columns.insert(Column::MacdSignal, macd.signal);
        columns.insert(Column::MacdHistogram, macd.histogram);

        columns.insert(Column::Rsi, calculate_rsi(&closes, params.rsi_period));

        let kdj = calculate_kdj(&bars, params.kdj_n, params.kdj_m1, params.kdj_m2);
        columns.insert(Column::K, kdj.k);
        columns.insert(Column::D, kdj.d);
        columns.insert(Column::J, kdj.j);

        let bb = calculate_bollinger(&closes, params.bollinger_period, params.bollinger_k);
        columns.insert(Column::BbUpper, bb.upper);
        columns.insert(Column::BbMiddle, bb.middle);
        columns.insert(Column::BbLower, bb.lower);
        columns.insert(Column::BbWidth, bb.width);
        columns.insert(Column::BbPercent, bb.percent);

        let atr = calculate_atr(&bars, params.atr_period);
        columns.insert(Column::AtrRatio, atr_ratio(&bars, &atr));
        columns.insert(Column::Atr, atr);

        let adx = calculate_adx(&bars, params.adx_period);
        columns.insert(Column::Adx, adx.adx);
        columns.insert(Column::PlusDi, adx.plus_di);
        columns.insert(Column::MinusDi, adx.minus_di);

        let obv = calculate_obv(&bars);
        columns.insert(Column::ObvMa, calculate_obv_ma(&obv, params.obv_ma_period));
        columns.insert(Column::Obv, obv);
        columns.insert(Column::Vwap, calculate_vwap(&bars));
        columns.insert(Column::Mfi, calculate_mfi(&bars, params.mfi_period));

        columns.insert(Column::Cci, calculate_cci(&bars, params.cci_period));
        columns.insert(Column::WilliamsR, calculate_williams_r(&bars, params.williams_period));
        columns.insert(Column::Roc, calculate_roc(&closes, params.roc_period));

        let aroon = calculate_aroon(&bars, params.aroon_period);
        columns.insert(Column::AroonUp, aroon.up);
        columns.insert(Column::AroonDown, aroon.down);
        columns.insert(Column::AroonOscillator, aroon.oscillator);

        let ichimoku = calculate_ichimoku(
            &bars,
            params.ichimoku_tenkan,
            params.ichimoku_kijun,
            params.ichimoku_senkou_b,
            params.ichimoku_displacement,
        );
        columns.insert(Column::IchimokuTenkan, ichimoku.tenkan);
        columns.insert(Column::IchimokuKijun, ichimoku.kijun);
        columns.insert(Column::IchimokuSenkouA, ichimoku.senkou_a);
        columns.insert(Column::IchimokuSenkouB, ichimoku.senkou_b);
        columns.insert(Column::IchimokuChikou, ichimoku.chikou);

        let mut table = Self {
            series: series.clone(),
            columns,
            signals: BTreeMap::new(),
        };
        table.signals = signals::derive_all(&table);
        table
    }

    /// The input bars, unchanged.
    pub fn series(&self) -> &BarSeries {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// `false` when the batch was skipped for missing fields.
    pub fn is_enriched(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn column(&self, column: Column) -> Option<&[Option<f64>]> {
        self.columns.get(&column).map(Vec::as_slice)
    }

    pub fn columns(&self) -> impl Iterator<Item = (Column, &[Option<f64>])> {
        self.columns.iter().map(|(c, s)| (*c, s.as_slice()))
    }

    /// Value of `column` at bar `index`.
    pub fn value(&self, column: Column, index: usize) -> Option<f64> {
        self.columns.get(&column)?.get(index).copied().flatten()
    }

    /// Value of `column` at the most recent bar.
    pub fn latest(&self, column: Column) -> Option<f64> {
        self.value(column, self.len().checked_sub(1)?)
    }

    /// Closing prices as received (undefined where a record lacks one).
    pub fn closes(&self) -> Series {
        self.series.records().iter().map(|r| r.close).collect()
    }

    pub fn signal(&self, kind: SignalKind) -> Option<&[Signal]> {
        self.signals.get(&kind).map(Vec::as_slice)
    }

    pub fn signals(&self) -> impl Iterator<Item = (SignalKind, &[Signal])> {
        self.signals.iter().map(|(k, s)| (*k, s.as_slice()))
    }

    pub fn latest_signal(&self, kind: SignalKind) -> Option<Signal> {
        self.signals.get(&kind)?.last().copied()
    }
}
