// =============================================================================
// Analysis Report — one auditable record per instrument analysis
// =============================================================================
//
// Runs the whole pipeline for one instrument:
//
//   BarSeries -> IndicatorTable -> { TechnicalAnalysis, IndicatorSummary }
//             -> Recommendation (with caller-supplied sentiment)
//
// and stamps the result with a UUID v4 and an RFC 3339 creation time.
// =============================================================================

use std::borrow::Borrow;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::indicators::params::IndicatorParams;
use crate::indicators::table::IndicatorTable;
use crate::market_data::BarSeries;

use super::recommendation::{recommend, Recommendation};
use super::sentiment::NewsSentiment;
use super::summary::{HistoricalStats, IndicatorSummary};
use super::technical::TechnicalAnalysis;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Unique identifier for this report (UUID v4).
    pub id: String,

    pub instrument: String,

    /// ISO 8601 timestamp of when this report was created.
    pub created_at: String,

    /// Number of bars analysed.
    pub bars: usize,

    /// Date of the latest bar.
    pub as_of: Option<NaiveDate>,

    pub sentiment: NewsSentiment,
    pub technical: TechnicalAnalysis,
    pub recommendation: Recommendation,
    pub indicators: IndicatorSummary,
    pub history: HistoricalStats,
}

/// Analyse one instrument.  Never fails; data-quality problems surface as
/// undefined readings and an `insufficient data` trend.
pub fn analyze(
    instrument: impl Into<String>,
    series: &BarSeries,
    params: &IndicatorParams,
    sentiment: &NewsSentiment,
) -> AnalysisReport {
    let instrument = instrument.into();
    let table = IndicatorTable::compute(series, params);
    let technical = TechnicalAnalysis::from_table(&table);
    let recommendation = recommend(&technical, sentiment);

    debug!(
        instrument = %instrument,
        bars = series.len(),
        trend = %technical.trend,
        score = recommendation.score,
        action = %recommendation.action,
        confidence = recommendation.confidence,
        "analysis complete"
    );

    AnalysisReport {
        id: uuid::Uuid::new_v4().to_string(),
        instrument,
        created_at: chrono::Utc::now().to_rfc3339(),
        bars: series.len(),
        as_of: series.records().last().map(|r| r.date),
        sentiment: sentiment.clone(),
        indicators: IndicatorSummary::from_table(&table),
        history: HistoricalStats::from_series(series),
        technical,
        recommendation,
    }
}

/// Sort by recommendation confidence, highest first.  Ties keep their order.
pub fn rank_by_confidence<R: Borrow<AnalysisReport>>(reports: &mut [R]) {
    reports.sort_by(|a, b| {
        let (a, b) = (a.borrow(), b.borrow());
        b.recommendation
            .confidence
            .total_cmp(&a.recommendation.confidence)
    });
}
