//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use dasa_time::TimeError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from date rendering / time conversion.
    Time(TimeError),
    /// Input outside the domain of the operation (longitude, latitude, depth...).
    InvalidInput(String),
    /// An internal invariant failed; the result would have been wrong.
    Computation(String),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Computation(msg) => write!(f, "computation error: {msg}"),
        }
    }
}

impl Error for VedicError {}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
