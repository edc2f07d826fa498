//! Ephemeris seam for the dasa engine.
//!
//! The timeline only needs one physical quantity from astronomy: the
//! Moon's geocentric ecliptic longitude at the birth instant. This crate
//! defines the [`Ephemeris`] trait that supplies it and a built-in
//! [`AnalyticEphemeris`] backed by the Meeus lunar series, so no kernel
//! files are needed. Other backends plug in by implementing the trait.

pub mod moon;

use std::error::Error;
use std::fmt::{Display, Formatter};

use dasa_time::calendar_to_jd;

/// Engine configuration used at startup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// First supported calendar year (inclusive).
    pub min_year: i32,
    /// Last supported calendar year (inclusive).
    pub max_year: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_year: 1600,
            max_year: 2400,
        }
    }
}

impl EngineConfig {
    /// Widest span the truncated lunar series is trusted for.
    pub const LIMIT_YEARS: (i32, i32) = (-1000, 3000);

    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.min_year > self.max_year {
            return Err(EngineError::InvalidConfig(
                "min_year must not be after max_year",
            ));
        }
        if self.min_year < Self::LIMIT_YEARS.0 || self.max_year > Self::LIMIT_YEARS.1 {
            return Err(EngineError::InvalidConfig(
                "year range must lie within -1000..=3000",
            ));
        }
        Ok(())
    }

    /// Supported span as half-open JD bounds `[start, end)`.
    pub fn jd_range(&self) -> (f64, f64) {
        (
            calendar_to_jd(self.min_year, 1, 1.0),
            calendar_to_jd(self.max_year + 1, 1, 1.0),
        )
    }
}

/// Core engine errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidConfig(&'static str),
    InvalidQuery(&'static str),
    EpochOutOfRange { epoch_tt_jd: f64 },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidQuery(msg) => write!(f, "invalid query: {msg}"),
            Self::EpochOutOfRange { epoch_tt_jd } => {
                write!(f, "epoch out of range: JD {epoch_tt_jd} (TT)")
            }
        }
    }
}

impl Error for EngineError {}

/// Source of lunar positions.
///
/// Implementations must be [`Send`] + [`Sync`] so one ephemeris can be
/// shared by concurrent callers.
pub trait Ephemeris: Send + Sync {
    /// Geocentric ecliptic longitude of the Moon in degrees, [0, 360),
    /// referred to the mean equinox of date, at a TT Julian Date.
    fn moon_longitude_deg(&self, jd_tt: f64) -> Result<f64, EngineError>;

    /// Half-open TT Julian Date span `[start, end)` this source answers for.
    fn supported_range(&self) -> (f64, f64);
}

/// Built-in analytic ephemeris (Meeus ch. 47).
#[derive(Debug, Clone)]
pub struct AnalyticEphemeris {
    config: EngineConfig,
    range: (f64, f64),
}

impl AnalyticEphemeris {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            range: config.jd_range(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn moon_longitude_deg(&self, jd_tt: f64) -> Result<f64, EngineError> {
        if !jd_tt.is_finite() {
            return Err(EngineError::InvalidQuery("epoch must be finite"));
        }
        let (start, end) = self.range;
        if jd_tt < start || jd_tt >= end {
            return Err(EngineError::EpochOutOfRange { epoch_tt_jd: jd_tt });
        }
        Ok(moon::moon_longitude_deg(jd_tt))
    }

    fn supported_range(&self) -> (f64, f64) {
        self.range
    }
}
