// =============================================================================
// Regime Detection Module
// =============================================================================
//
// Trend classification of the latest bar from the close / moving-average
// stack.

pub mod trend;

pub use trend::{classify_latest, TrendState};
