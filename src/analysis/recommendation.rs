// =============================================================================
// Recommendation Scorer — additive rule scoring over trend, signals, sentiment
// =============================================================================
//
// Each rule adds a signed integer to the score and, except MACD, appends a
// reason:
//
//   Rule                                   Contribution
//   -------------------------------------  ------------
//   trend up / strong up                   +30
//   trend down / strong down               -20
//   narrative phrase, bullish keyword      +15 each
//   narrative phrase, bearish keyword      -15 each
//   sentiment positive                     +20
//   sentiment negative                     -15
//   RSI < 30                               +10
//   RSI > 70                               -10
//   MACD > 0                               +5  (no reason)
//
// Mapping:
//   score >= 30   => BUY,  risk medium-low
//   score <= -20  => SELL, risk high
//   otherwise     => HOLD, risk medium
//
// confidence = clamp((score + 50) / 100, 0.30, 0.95); at most five reasons.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::sentiment::{NewsSentiment, SentimentLabel};
use super::technical::TechnicalAnalysis;

pub const BUY_AT: i32 = 30;
pub const SELL_AT: i32 = -20;
pub const MIN_CONFIDENCE: f64 = 0.30;
pub const MAX_CONFIDENCE: f64 = 0.95;
pub const MAX_REASONS: usize = 5;
pub const DEFAULT_REASON: &str = "insufficient signal, recommend watching";

const BULLISH_KEYWORDS: [&str; 3] = ["golden cross", "buy", "oversold"];
const BEARISH_KEYWORDS: [&str; 3] = ["death cross", "sell", "overbought"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    MediumLow,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    /// Always within [0.30, 0.95].
    pub confidence: f64,
    pub risk: RiskLevel,
    pub score: i32,
    /// Insertion order, at most five entries, never empty.
    pub reasons: Vec<String>,
}

impl Recommendation {
    /// Map an accumulated score and its reasons onto the output record.
    pub fn from_score(score: i32, mut reasons: Vec<String>) -> Self {
        let (action, risk) = if score >= BUY_AT {
            (Action::Buy, RiskLevel::MediumLow)
        } else if score <= SELL_AT {
            (Action::Sell, RiskLevel::High)
        } else {
            (Action::Hold, RiskLevel::Medium)
        };

        let confidence = ((f64::from(score) + 50.0) / 100.0).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

        if reasons.is_empty() {
            reasons.push(DEFAULT_REASON.to_string());
        }
        reasons.truncate(MAX_REASONS);

        Self {
            action,
            confidence,
            risk,
            score,
            reasons,
        }
    }
}

/// Score one instrument.  Pure: same inputs, same output.
pub fn recommend(analysis: &TechnicalAnalysis, sentiment: &NewsSentiment) -> Recommendation {
    let mut score = 0;
    let mut reasons = Vec::new();

    if analysis.trend.is_up() {
        score += 30;
        reasons.push(format!("Technical: {}", analysis.trend));
    } else if analysis.trend.is_down() {
        score -= 20;
        reasons.push(format!("Technical: {}", analysis.trend));
    }

    for phrase in &analysis.signals {
        let lower = phrase.to_lowercase();
        if BULLISH_KEYWORDS.iter().any(|k| lower.contains(k)) {
            score += 15;
            reasons.push(phrase.clone());
        } else if BEARISH_KEYWORDS.iter().any(|k| lower.contains(k)) {
            score -= 15;
            reasons.push(phrase.clone());
        }
    }

    match sentiment.label {
        SentimentLabel::Positive => {
            score += 20;
            reasons.push(format!("News sentiment: positive ({:.2})", sentiment.score));
        }
        SentimentLabel::Negative => {
            score -= 15;
            reasons.push(format!("News sentiment: negative ({:.2})", sentiment.score));
        }
        SentimentLabel::Neutral => {}
    }

    // Any defined reading is scored, 0.0 included (a strictly falling
    // window), so it lands in the oversold branch.
    if let Some(rsi) = analysis.indicators.rsi {
        if rsi < 30.0 {
            score += 10;
            reasons.push(format!("RSI in oversold zone ({rsi:.1}), rebound potential"));
        } else if rsi > 70.0 {
            score -= 10;
            reasons.push(format!("RSI in overbought zone ({rsi:.1}), pullback risk"));
        }
    }

    if analysis.indicators.macd.is_some_and(|m| m > 0.0) {
        score += 5;
    }

    Recommendation::from_score(score, reasons)
}
