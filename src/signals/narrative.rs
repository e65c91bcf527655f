// =============================================================================
// Narrative Signals — free-text phrases read from the latest two bars
// =============================================================================
//
// A looser layer than the ternary catalogue: a handful of phrases describing
// what happened on the most recent bar.  The recommendation scorer matches
// keywords in these phrases, not the ternary codes.
// =============================================================================

use crate::indicators::table::{Column, IndicatorTable};

use super::rules::{crossing, Signal};

/// Bars required before any phrase is generated.
pub const MIN_BARS: usize = 20;

pub const INSUFFICIENT_DATA: &str = "insufficient data, cannot generate signals";
pub const NO_SIGNAL: &str = "no clear technical signal";

/// Phrases for the most recent bar, in a fixed order: MA cross, RSI, MACD.
/// Never empty.
pub fn narrate(table: &IndicatorTable) -> Vec<String> {
    let n = table.len();
    if n < MIN_BARS {
        return vec![INSUFFICIENT_DATA.to_string()];
    }

    let mut phrases = Vec::new();

    match latest_cross(table, Column::Ma(5), Column::Ma(20)) {
        Signal::Bullish => phrases.push("golden cross: MA5 crossed above MA20, buy signal".to_string()),
        Signal::Bearish => phrases.push("death cross: MA5 crossed below MA20, sell signal".to_string()),
        Signal::Neutral => {}
    }

    if let Some(rsi) = table.latest(Column::Rsi) {
        if rsi < 30.0 {
            phrases.push(format!("RSI oversold ({rsi:.1}), possible rebound"));
        } else if rsi > 70.0 {
            phrases.push(format!("RSI overbought ({rsi:.1}), watch for pullback risk"));
        }
    }

    match latest_cross(table, Column::Macd, Column::MacdSignal) {
        Signal::Bullish => phrases.push("MACD golden cross, bullish signal".to_string()),
        Signal::Bearish => phrases.push("MACD death cross, bearish signal".to_string()),
        Signal::Neutral => {}
    }

    if phrases.is_empty() {
        phrases.push(NO_SIGNAL.to_string());
    }
    phrases
}

fn latest_cross(table: &IndicatorTable, a: Column, b: Column) -> Signal {
    let last = table.len() - 1;
    let pair = |c: Column| [table.value(c, last - 1), table.value(c, last)];
    crossing(&pair(a), &pair(b))[1]
}
