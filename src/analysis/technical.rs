// =============================================================================
// Technical Analysis — trend, narrative signals and key indicator readings
// =============================================================================

use serde::Serialize;

use crate::indicators::series::ratio;
use crate::indicators::table::{Column, IndicatorTable};
use crate::regime::trend::{classify_latest, TrendState};
use crate::signals::narrate;

/// Number of narrative phrases quoted in the summary line.
const SUMMARY_SIGNALS: usize = 2;

/// Latest-bar readings the scorer and the summary line draw on.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeyIndicators {
    pub ma5: Option<f64>,
    pub ma10: Option<f64>,
    pub ma20: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
}

impl KeyIndicators {
    pub fn from_table(table: &IndicatorTable) -> Self {
        Self {
            ma5: table.latest(Column::Ma(5)),
            ma10: table.latest(Column::Ma(10)),
            ma20: table.latest(Column::Ma(20)),
            rsi: table.latest(Column::Rsi),
            macd: table.latest(Column::Macd),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalAnalysis {
    pub trend: TrendState,
    /// Narrative phrases for the latest bar; never empty.
    pub signals: Vec<String>,
    pub indicators: KeyIndicators,
    pub summary: String,
}

impl TechnicalAnalysis {
    pub fn from_table(table: &IndicatorTable) -> Self {
        let trend = classify_latest(table);
        let signals = narrate(table);
        let summary = summary_line(table, trend, &signals);
        Self {
            trend,
            signals,
            indicators: KeyIndicators::from_table(table),
            summary,
        }
    }
}

/// One-line description of the latest bar.
///
/// "Current trend: <trend>. Latest close <c>, up|down <p>%. Technical signals: <a>; <b>"
fn summary_line(table: &IndicatorTable, trend: TrendState, signals: &[String]) -> String {
    let closes = table.closes();
    let (prev, last) = match closes.as_slice() {
        [.., prev, last] => (*prev, *last),
        _ => return "insufficient data".to_string(),
    };
    let Some(last) = last else {
        return "insufficient data".to_string();
    };

    let mut line = format!("Current trend: {trend}. Latest close {last:.2}");
    match prev.and_then(|p| ratio((last - p) * 100.0, p)) {
        Some(pct) if pct > 0.0 => line.push_str(&format!(", up {pct:.2}%.")),
        Some(pct) => line.push_str(&format!(", down {:.2}%.", pct.abs())),
        None => line.push('.'),
    }

    if !signals.is_empty() {
        let quoted: Vec<&str> = signals.iter().take(SUMMARY_SIGNALS).map(String::as_str).collect();
        line.push_str(" Technical signals: ");
        line.push_str(&quoted.join("; "));
    }
    line
}
