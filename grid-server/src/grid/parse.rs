//! Naive local timestamp parsing
//!
//! The store writes restaurant wall-clock time but annotates it with a UTC
//! marker or an offset. The annotation is discarded, never applied: the
//! remaining digits are the local time.

use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

const FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Length of `YYYY-MM-DD`; a `-` past this point starts a negative offset
const DATE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("empty timestamp")]
    Empty,

    #[error("malformed timestamp: {0:?}")]
    Malformed(String),
}

/// Cut the zone annotation: everything from the first `+` or `Z`, or from a
/// `-` that follows the date part.
pub fn strip_zone(raw: &str) -> &str {
    let cut = raw
        .char_indices()
        .find(|&(i, c)| c == '+' || c == 'Z' || c == 'z' || (c == '-' && i > DATE_LEN))
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    &raw[..cut]
}

/// Parse `YYYY-MM-DDTHH:MM:SS[.fff][Z|±HH:MM]` as naive local time
pub fn parse_naive_local(raw: &str) -> Result<NaiveDateTime, TimeParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let local = strip_zone(trimmed).trim_end();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(local, fmt).ok())
        .ok_or_else(|| TimeParseError::Malformed(raw.to_string()))
}

/// Minute-of-day, seconds ignored
pub fn minute_of_day(dt: &NaiveDateTime) -> u32 {
    dt.hour() * 60 + dt.minute()
}
