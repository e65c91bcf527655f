// =============================================================================
// Signals Module
// =============================================================================
//
// Reduction of indicator series to discrete trading signals:
// - Crossing and threshold rules producing per-bar ternary signals
// - The signal catalogue (one ternary series per indicator family)
// - Narrative phrases for the latest bar, read by the recommendation scorer

pub mod catalogue;
pub mod narrative;
pub mod rules;

pub use catalogue::{derive_all, SignalKind};
pub use narrative::narrate;
pub use rules::{Signal, SignalSeries};
