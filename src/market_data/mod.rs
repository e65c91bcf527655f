pub mod bar;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export the bar types for convenient access (e.g. `use crate::market_data::Bar`).
pub use bar::{Bar, BarRecord, BarSeries};
