// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), with σ the sample standard deviation of the
// same window.
//
//   width = (upper - lower) / middle * 100
//   %B    = (close - lower) / (upper - lower)

use super::series::{defined, ratio, rolling_mean, rolling_std, Series};

/// Aligned Bollinger series.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
    pub width: Series,
    pub percent: Series,
}

/// Calculate Bollinger Bands for the given closing prices.
///
/// Slots are undefined when:
/// - fewer than `period` closes precede them (bands need `period >= 2`).
/// - the middle band is zero (`width`).
/// - the bands collapse onto each other (`percent`).
pub fn calculate_bollinger(closes: &[f64], period: usize, num_std: f64) -> BollingerBands {
    let values = defined(closes);
    let middle = rolling_mean(&values, period);
    let std = rolling_std(&values, period);

    let mut upper = Vec::with_capacity(closes.len());
    let mut lower = Vec::with_capacity(closes.len());
    let mut width = Vec::with_capacity(closes.len());
    let mut percent = Vec::with_capacity(closes.len());

    for (i, &close) in closes.iter().enumerate() {
        let bands = middle[i].zip(std[i]).map(|(m, s)| (m + num_std * s, m - num_std * s));
        upper.push(bands.map(|(u, _)| u));
        lower.push(bands.map(|(_, l)| l));
        width.push(bands.zip(middle[i]).and_then(|((u, l), m)| ratio((u - l) * 100.0, m)));
        percent.push(bands.and_then(|(u, l)| ratio(close - l, u - l)));
    }

    BollingerBands {
        upper,
        middle,
        lower,
        width,
        percent,
    }
}
