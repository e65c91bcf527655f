// =============================================================================
// Signal Rules — crossing & threshold classification
// =============================================================================
//
// Two patterns reduce indicator series to a per-bar ternary signal:
//
//   Crossing   A crosses above B  => Bullish   (A_t > B_t and A_{t-1} <= B_{t-1})
//              A crosses below B  => Bearish   (A_t < B_t and A_{t-1} >= B_{t-1})
//
//   Threshold  the value (or price) is compared against a lower and an upper
//              bound.  Contrarian rules read "below lower" as oversold
//              (Bullish); momentum rules read "above upper" as strength
//              (Bullish).
//
// Any undefined input on a bar yields Neutral for that bar.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Ternary per-bar signal.  Serialises as -1 / 0 / +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Signal {
    Bearish,
    #[default]
    Neutral,
    Bullish,
}

impl Signal {
    pub fn code(self) -> i8 {
        match self {
            Self::Bearish => -1,
            Self::Neutral => 0,
            Self::Bullish => 1,
        }
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> Self {
        signal.code()
    }
}

impl TryFrom<i8> for Signal {
    type Error = String;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::Bearish),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Bullish),
            other => Err(format!("invalid signal code {other}")),
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearish => write!(f, "BEARISH"),
            Self::Neutral => write!(f, "NEUTRAL"),
            Self::Bullish => write!(f, "BULLISH"),
        }
    }
}

/// A bar-aligned signal series.
pub type SignalSeries = Vec<Signal>;

/// How a threshold rule reads a breach of its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Below lower => Bullish, above upper => Bearish.
    Contrarian,
    /// Above upper => Bullish, below lower => Bearish.
    Momentum,
}

/// Crossing rule between two aligned series.  Bar 0 is always Neutral.
pub fn crossing(a: &[Option<f64>], b: &[Option<f64>]) -> SignalSeries {
    let n = a.len().min(b.len());
    (0..n)
        .map(|i| {
            if i == 0 {
                return Signal::Neutral;
            }
            match (a[i], b[i], a[i - 1], b[i - 1]) {
                (Some(a0), Some(b0), Some(a1), Some(b1)) => {
                    if a0 > b0 && a1 <= b1 {
                        Signal::Bullish
                    } else if a0 < b0 && a1 >= b1 {
                        Signal::Bearish
                    } else {
                        Signal::Neutral
                    }
                }
                _ => Signal::Neutral,
            }
        })
        .collect()
}

/// Threshold rule against fixed bounds.
pub fn threshold(
    values: &[Option<f64>],
    lower: f64,
    upper: f64,
    orientation: Orientation,
) -> SignalSeries {
    values
        .iter()
        .map(|v| v.map_or(Signal::Neutral, |v| classify(v, lower, upper, orientation)))
        .collect()
}

/// Threshold rule against per-bar bounds (bands, cloud edges, a reference
/// line).  The two bound series may come in either order.
pub fn against_bands(
    price: &[Option<f64>],
    band_a: &[Option<f64>],
    band_b: &[Option<f64>],
    orientation: Orientation,
) -> SignalSeries {
    price
        .iter()
        .zip(band_a.iter().zip(band_b))
        .map(|(p, (a, b))| match (p, a, b) {
            (Some(p), Some(a), Some(b)) => classify(*p, a.min(*b), a.max(*b), orientation),
            _ => Signal::Neutral,
        })
        .collect()
}

/// +DI / -DI direction, filtered by ADX strength (strictly above `min_adx`).
pub fn directional(
    plus_di: &[Option<f64>],
    minus_di: &[Option<f64>],
    adx: &[Option<f64>],
    min_adx: f64,
) -> SignalSeries {
    plus_di
        .iter()
        .zip(minus_di.iter().zip(adx))
        .map(|(p, (m, a))| match (p, m, a) {
            (Some(p), Some(m), Some(a)) if *a > min_adx => {
                if p > m {
                    Signal::Bullish
                } else if p < m {
                    Signal::Bearish
                } else {
                    Signal::Neutral
                }
            }
            _ => Signal::Neutral,
        })
        .collect()
}

fn classify(value: f64, lower: f64, upper: f64, orientation: Orientation) -> Signal {
    let (below, above) = match orientation {
        Orientation::Contrarian => (Signal::Bullish, Signal::Bearish),
        Orientation::Momentum => (Signal::Bearish, Signal::Bullish),
    };
    if value < lower {
        below
    } else if value > upper {
        above
    } else {
        Signal::Neutral
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn s(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().map(|&v| Some(v)).collect()
    }

    // ---- crossing --------------------------------------------------------

    #[test]
    fn crossing_up_and_down() {
        let a = s(&[1.0, 2.0, 3.0, 2.0, 1.0]);
        let b = s(&[2.0, 2.0, 2.0, 2.0, 2.0]);
        assert_eq!(
            crossing(&a, &b),
            vec![
                Signal::Neutral,
                Signal::Neutral, // touching is not crossing
                Signal::Bullish, // from <= to >
                Signal::Neutral,
                Signal::Bearish, // from >= to <
            ]
        );
    }

    #[test]
    fn crossing_bar_zero_always_neutral() {
        let a = s(&[5.0]);
        let b = s(&[1.0]);
        assert_eq!(crossing(&a, &b), vec![Signal::Neutral]);
    }

    #[test]
    fn crossing_with_undefined_is_neutral() {
        let a = vec![None, Some(3.0)];
        let b = s(&[2.0, 2.0]);
        assert_eq!(crossing(&a, &b), vec![Signal::Neutral, Signal::Neutral]);
    }

    // ---- threshold -------------------------------------------------------

    #[test]
    fn contrarian_threshold() {
        let v = vec![Some(25.0), Some(50.0), Some(75.0), None, Some(30.0)];
        assert_eq!(
            threshold(&v, 30.0, 70.0, Orientation::Contrarian),
            vec![
                Signal::Bullish,
                Signal::Neutral,
                Signal::Bearish,
                Signal::Neutral,
                Signal::Neutral,
            ]
        );
    }

    #[test]
    fn momentum_sign_rule() {
        let v = s(&[1.5, -0.5, 0.0]);
        assert_eq!(
            threshold(&v, 0.0, 0.0, Orientation::Momentum),
            vec![Signal::Bullish, Signal::Bearish, Signal::Neutral]
        );
    }

    #[test]
    fn cloud_requires_price_outside_both_edges() {
        let price = s(&[12.0, 10.5, 8.0]);
        let a = s(&[10.0, 10.0, 11.0]);
        let b = s(&[11.0, 11.0, 10.0]);
        assert_eq!(
            against_bands(&price, &a, &b, Orientation::Momentum),
            vec![Signal::Bullish, Signal::Neutral, Signal::Bearish]
        );
    }

    #[test]
    fn directional_needs_strong_adx() {
        let plus = s(&[30.0, 30.0, 10.0]);
        let minus = s(&[10.0, 10.0, 30.0]);
        let adx = s(&[20.0, 26.0, 40.0]);
        assert_eq!(
            directional(&plus, &minus, &adx, 25.0),
            vec![Signal::Neutral, Signal::Bullish, Signal::Bearish]
        );
    }

    #[test]
    fn signal_serialises_as_code() {
        assert_eq!(serde_json::to_string(&Signal::Bearish).unwrap(), "-1");
        let back: Signal = serde_json::from_str("1").unwrap();
        assert_eq!(back, Signal::Bullish);
        assert!(serde_json::from_str::<Signal>("2").is_err());
    }
}
