//! Error type for the orchestration layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use dasa_core::EngineError;
use dasa_time::TimeError;
use dasa_vedic_base::VedicError;

/// Errors from birth validation, ephemeris queries and timeline generation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Caller-supplied data failed validation.
    InvalidInput(String),
    /// The ephemeris could not answer for the requested epoch.
    Ephemeris(EngineError),
    /// A generated result failed its own consistency checks.
    Computation(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "{msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Computation(msg) => write!(f, "computation error: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for SearchError {
    fn from(e: EngineError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::InvalidInput(msg) => Self::InvalidInput(msg),
            VedicError::Computation(msg) => Self::Computation(msg),
            // Time errors inside the base crate come from rendering generated JDs.
            other => Self::Computation(other.to_string()),
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vedic_errors_keep_their_category() {
        let e: SearchError = VedicError::InvalidInput("bad".into()).into();
        assert_eq!(e, SearchError::InvalidInput("bad".into()));
        let e: SearchError = VedicError::Computation("drift".into()).into();
        assert!(matches!(e, SearchError::Computation(_)));
    }

    #[test]
    fn engine_error_is_source() {
        let e: SearchError = EngineError::EpochOutOfRange { epoch_tt_jd: 0.0 }.into();
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("ephemeris error"));
    }
}
