// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicator catalogue.  Every
// function returns a series aligned 1:1 with its input, with `None` wherever
// the value is not yet computable or the arithmetic is undefined.

pub mod series;
pub mod params;

pub mod moving_average;
pub mod macd;
pub mod rsi;
pub mod kdj;
pub mod bollinger;
pub mod atr;
pub mod adx;
pub mod volume;
pub mod cci;
pub mod williams_r;
pub mod roc;
pub mod aroon;
pub mod ichimoku;

pub mod table;

pub use params::IndicatorParams;
pub use series::Series;
pub use table::{Column, IndicatorTable};
