// =============================================================================
// News Sentiment — the externally supplied sentiment tuple
// =============================================================================
//
// The scorer never fetches news.  Callers resolve sentiment beforehand and
// fall back to the neutral default (score 0.5, no articles) on any failure.
//
// Label thresholds when aggregating per-headline scores:
//   mean > 0.6  => positive
//   mean < 0.4  => negative
//   otherwise   => neutral

use serde::{Deserialize, Serialize};

const POSITIVE_ABOVE: f64 = 0.6;
const NEGATIVE_BELOW: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Neutral => write!(f, "neutral"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

fn default_score() -> f64 {
    0.5
}

/// Aggregate news sentiment for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSentiment {
    #[serde(default)]
    pub label: SentimentLabel,
    /// Mean headline score in [0, 1].
    #[serde(default = "default_score")]
    pub score: f64,
    /// Number of articles behind the score.
    #[serde(default)]
    pub count: u32,
}

impl Default for NewsSentiment {
    fn default() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: default_score(),
            count: 0,
        }
    }
}

impl NewsSentiment {
    /// Aggregate per-headline scores.  No scores gives the neutral default.
    pub fn from_scores(scores: &[f64]) -> Self {
        let valid: Vec<f64> = scores
            .iter()
            .copied()
            .filter(|s| s.is_finite())
            .map(|s| s.clamp(0.0, 1.0))
            .collect();
        if valid.is_empty() {
            return Self::default();
        }

        let score = valid.iter().sum::<f64>() / valid.len() as f64;
        let label = if score > POSITIVE_ABOVE {
            SentimentLabel::Positive
        } else if score < NEGATIVE_BELOW {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        Self {
            label,
            score,
            count: valid.len() as u32,
        }
    }
}
