// Synthetic bar builders shared by unit tests.

use chrono::{Days, NaiveDate};

use super::{Bar, BarSeries};

/// Calendar day `offset` days after 2024-01-01.
pub fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.checked_add_days(Days::new(offset)))
        .unwrap()
}

pub fn bar(offset: u64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
    Bar {
        date: day(offset),
        open,
        high,
        low,
        close,
        volume,
    }
}

/// One bar per close with a +/-1 range around it and constant volume.
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| bar(i as u64, c, c + 1.0, c - 1.0, c, 1000.0))
        .collect()
}

pub fn series_from_closes(closes: &[f64]) -> BarSeries {
    BarSeries::from_bars(bars_from_closes(closes)).unwrap()
}

/// `n` strictly increasing closes starting at 10.
pub fn rising(n: usize) -> Vec<f64> {
    (0..n).map(|i| 10.0 + i as f64).collect()
}

/// `n` strictly decreasing closes ending at 10.
pub fn falling(n: usize) -> Vec<f64> {
    (0..n).rev().map(|i| 10.0 + i as f64).collect()
}

/// Oscillating closes around 100.
pub fn wave(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.4).sin() * 8.0 + (i as f64 * 0.05))
        .collect()
}
