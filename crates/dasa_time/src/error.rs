//! Error types for civil-time parsing and Julian Day conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date/time parsing or calendar conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not `YYYY-MM-DD` or names a non-existent day.
    InvalidDate(String),
    /// Time string is not `HH:MM` (24h).
    InvalidTime(String),
    /// UTC offset (hours) cannot be expressed as a fixed offset.
    InvalidOffset(f64),
    /// Julian Date cannot be represented as a calendar date-time.
    Unrepresentable(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date '{s}', expected YYYY-MM-DD"),
            Self::InvalidTime(s) => write!(f, "invalid time '{s}', expected HH:MM"),
            Self::InvalidOffset(h) => write!(f, "invalid UTC offset {h} hours"),
            Self::Unrepresentable(jd) => write!(f, "JD {jd} is not a representable date"),
        }
    }
}

impl Error for TimeError {}
