// =============================================================================
// Analysis Module
// =============================================================================
//
// Everything downstream of the indicator table:
// - Technical analysis record (trend, narrative signals, key readings)
// - Recommendation scorer
// - Indicator summary projection and historical statistics
// - Caller-supplied news sentiment
// - Report envelope and multi-instrument ranking

pub mod recommendation;
pub mod report;
pub mod sentiment;
pub mod summary;
pub mod technical;

pub use recommendation::{recommend, Action, Recommendation, RiskLevel};
pub use report::{analyze, rank_by_confidence, AnalysisReport};
pub use sentiment::{NewsSentiment, SentimentLabel};
pub use summary::{HistoricalStats, IndicatorSummary};
pub use technical::{KeyIndicators, TechnicalAnalysis};
