use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// One trading-day record exactly as the market-data collaborator delivered
/// it.  Price/volume fields may be absent; the indicator batch checks for that
/// before computing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

/// A complete OHLCV bar.  `low <= open, close <= high` is assumed, not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

impl From<Bar> for BarRecord {
    fn from(bar: Bar) -> Self {
        Self {
            date: bar.date,
            open: Some(bar.open),
            high: Some(bar.high),
            low: Some(bar.low),
            close: Some(bar.close),
            volume: Some(bar.volume),
        }
    }
}

impl BarRecord {
    /// Names of the required fields this record lacks.
    fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            ("open", self.open.is_none()),
            ("high", self.high.is_none()),
            ("low", self.low.is_none()),
            ("close", self.close.is_none()),
            ("volume", self.volume.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
    }

    fn complete(&self) -> Option<Bar> {
        Some(Bar {
            date: self.date,
            open: self.open?,
            high: self.high?,
            low: self.low?,
            close: self.close?,
            volume: self.volume?,
        })
    }
}

// ---------------------------------------------------------------------------
// BarSeries -- validated, immutable, ascending by date
// ---------------------------------------------------------------------------

/// An ordered sequence of daily records with strictly increasing dates.
///
/// Construction is the only place a series can fail: empty input or
/// non-monotonic dates are rejected.  Missing price fields are *not* an error
/// here; [`BarSeries::bars`] simply reports them.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    records: Vec<BarRecord>,
}

impl BarSeries {
    pub fn new(records: Vec<BarRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (index, pair) in records.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.date == prev.date {
                return Err(SeriesError::DuplicateDate {
                    date: next.date,
                    prev: index,
                    index: index + 1,
                });
            }
            if next.date < prev.date {
                return Err(SeriesError::OutOfOrder {
                    prev_date: prev.date,
                    date: next.date,
                    prev: index,
                    index: index + 1,
                });
            }
        }

        Ok(Self { records })
    }

    /// Build a series from complete bars.
    pub fn from_bars(bars: Vec<Bar>) -> Result<Self> {
        Self::new(bars.into_iter().map(BarRecord::from).collect())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[BarRecord] {
        &self.records
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// Required fields absent on at least one record, in column order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = Vec::new();
        for name in self.records.iter().flat_map(BarRecord::missing) {
            if !missing.contains(&name) {
                missing.push(name);
            }
        }
        const ORDER: [&str; 5] = ["open", "high", "low", "close", "volume"];
        missing.sort_by_key(|name| ORDER.iter().position(|o| o == name));
        missing
    }

    /// All records as complete bars, or `None` if any required field is absent.
    pub fn bars(&self) -> Option<Vec<Bar>> {
        self.records.iter().map(BarRecord::complete).collect()
    }

    /// The most recent `count` records (the whole series when shorter).
    pub fn tail(&self, count: usize) -> Self {
        let start = self.records.len().saturating_sub(count.max(1));
        Self {
            records: self.records[start..].to_vec(),
        }
    }
}
