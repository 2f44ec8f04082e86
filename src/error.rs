//! Error types.
//!
//! The engine itself never fails: every lookup falls back to a default. Errors
//! only come from building dates at the edges and from bounded or cancelled
//! searches.

use thiserror::Error;

/// Failure to construct a [`Date`](crate::Date) or a [`DateRange`](crate::date::DateRange).
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DateError {
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    Invalid { year: i32, month: i32, day: i32 },
    #[error("cannot parse {0:?} as YYYY-MM-DD")]
    Parse(String),
    #[error("date is outside the supported range")]
    OutOfRange,
    #[error("range ends ({end}) before it starts ({start})")]
    Reversed { start: String, end: String },
}

/// Failure of an auspicious-day search.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum SearchError {
    #[error("search cancelled after {scanned} days")]
    Cancelled { scanned: u32 },
    #[error("range of {days} days exceeds the configured limit of {limit}")]
    RangeTooLong { days: u32, limit: u32 },
}
