// =============================================================================
// Aurora TA — technical indicator pipeline and recommendation engine
// =============================================================================
//
// Data flows strictly forward:
//
//   BarSeries -> IndicatorTable -> { signals, trend } -> Recommendation
//                              \-> IndicatorSummary
//
// The library never installs a tracing subscriber and never touches the
// network; the binary owns configuration, input files and the cache.

pub mod analysis;
pub mod cache;
pub mod error;
pub mod indicators;
pub mod market_data;
pub mod regime;
pub mod runner;
pub mod runtime_config;
pub mod signals;

pub use analysis::{analyze, rank_by_confidence, AnalysisReport, NewsSentiment, Recommendation};
pub use error::SeriesError;
pub use indicators::{IndicatorParams, IndicatorTable};
pub use market_data::{Bar, BarRecord, BarSeries};
