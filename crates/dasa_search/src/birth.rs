//! Validated birth data.
//!
//! Checks run in a fixed order (date, time, coordinates, timezone) and the
//! first failure is reported with the message the HTTP service used, so
//! callers can show it unchanged.

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use dasa_time::{CivilTime, offset_from_hours, parse_date, parse_time};

use crate::error::SearchError;

/// Offset applied when the caller gives none (IST).
pub const DEFAULT_TZ_OFFSET_HOURS: f64 = 5.5;

pub const INVALID_DATE: &str = "Invalid date format. Use YYYY-MM-DD";
pub const INVALID_TIME: &str = "Invalid time format. Use HH:MM";
pub const INVALID_COORDINATES: &str =
    "Invalid coordinates. Latitude must be between -90 and 90, longitude between -180 and 180";
pub const INVALID_TZ_OFFSET: &str = "Invalid timezone offset. Must be between -12 and 14";

/// A birth instant and place. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    civil: CivilTime,
    tz_offset_hours: f64,
    latitude: f64,
    longitude: f64,
}

impl BirthMoment {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        tz_offset_hours: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, SearchError> {
        if !valid_coordinates(latitude, longitude) {
            return Err(SearchError::InvalidInput(INVALID_COORDINATES.to_string()));
        }
        if !(-12.0..=14.0).contains(&tz_offset_hours) {
            return Err(SearchError::InvalidInput(INVALID_TZ_OFFSET.to_string()));
        }
        let offset = offset_from_hours(tz_offset_hours)
            .map_err(|_| SearchError::InvalidInput(INVALID_TZ_OFFSET.to_string()))?;
        Ok(Self {
            civil: CivilTime::new(date, time, offset),
            tz_offset_hours,
            latitude,
            longitude,
        })
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` strings and validate everything.
    pub fn parse(
        dob: &str,
        tob: &str,
        latitude: f64,
        longitude: f64,
        tz_offset_hours: f64,
    ) -> Result<Self, SearchError> {
        let date =
            parse_date(dob).map_err(|_| SearchError::InvalidInput(INVALID_DATE.to_string()))?;
        let time =
            parse_time(tob).map_err(|_| SearchError::InvalidInput(INVALID_TIME.to_string()))?;
        Self::new(date, time, tz_offset_hours, latitude, longitude)
    }

    pub fn date(&self) -> NaiveDate {
        self.civil.local.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.civil.local.time()
    }

    pub fn tz_offset_hours(&self) -> f64 {
        self.tz_offset_hours
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// East-positive geographic longitude.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn civil(&self) -> CivilTime {
        self.civil
    }

    pub fn offset(&self) -> FixedOffset {
        self.civil.offset
    }

    /// UTC Julian Date of the birth instant.
    pub fn jd_utc(&self) -> f64 {
        self.civil.jd_utc()
    }
}

fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(r: Result<BirthMoment, SearchError>) -> String {
        match r {
            Err(SearchError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn parses_valid_birth() {
        let b = BirthMoment::parse("1990-01-15", "12:00", 28.6139, 77.2090, 5.5).unwrap();
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(1990, 1, 15).unwrap());
        assert_eq!(b.offset().local_minus_utc(), 19_800);
        // 12:00 IST = 06:30 UTC
        assert!((b.jd_utc() - 2_447_906.770_833_333).abs() < 1e-6);
    }

    #[test]
    fn messages_follow_check_order() {
        assert_eq!(
            message(BirthMoment::parse("15-01-1990", "25:00", 95.0, 0.0, 20.0)),
            INVALID_DATE
        );
        assert_eq!(
            message(BirthMoment::parse("1990-01-15", "25:00", 95.0, 0.0, 20.0)),
            INVALID_TIME
        );
        assert_eq!(
            message(BirthMoment::parse("1990-01-15", "12:00", 95.0, 0.0, 20.0)),
            INVALID_COORDINATES
        );
        assert_eq!(
            message(BirthMoment::parse("1990-01-15", "12:00", 10.0, 0.0, 20.0)),
            INVALID_TZ_OFFSET
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(BirthMoment::parse("2000-01-01", "00:00", 90.0, -180.0, -12.0).is_ok());
        assert!(BirthMoment::parse("2000-01-01", "00:00", -90.0, 180.0, 14.0).is_ok());
        assert!(BirthMoment::parse("2000-01-01", "00:00", 0.0, 180.01, 0.0).is_err());
        assert!(BirthMoment::parse("2000-01-01", "00:00", f64::NAN, 0.0, 0.0).is_err());
        assert!(BirthMoment::parse("2000-01-01", "00:00", 0.0, 0.0, f64::NAN).is_err());
    }
}
