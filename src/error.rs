// =============================================================================
// Error types
// =============================================================================
//
// Only structural problems with the input are errors.  Data-quality problems
// (short history, zero denominators, missing fields) degrade into undefined
// values instead.

use chrono::NaiveDate;
use thiserror::Error;

/// A bar series that cannot be analysed at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("bar series is empty")]
    Empty,

    #[error("duplicate date {date} at positions {prev} and {index}")]
    DuplicateDate {
        date: NaiveDate,
        prev: usize,
        index: usize,
    },

    #[error("dates out of order: {prev_date} at position {prev} is after {date} at position {index}")]
    OutOfOrder {
        prev_date: NaiveDate,
        date: NaiveDate,
        prev: usize,
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, SeriesError>;
