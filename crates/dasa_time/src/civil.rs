//! Civil (wall-clock) time handling on top of `chrono`.
//!
//! A birth is recorded as a local date and time plus a fixed UTC offset in
//! hours. This module turns that into a UTC Julian Date and renders Julian
//! Dates back into offset-aware timestamps for output.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike,
};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` (24h) time. Seconds are accepted when present.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}

/// Fixed offset from fractional hours (e.g. 5.5 → +05:30), rounded to the second.
pub fn offset_from_hours(hours: f64) -> Result<FixedOffset, TimeError> {
    if !hours.is_finite() {
        return Err(TimeError::InvalidOffset(hours));
    }
    let secs = (hours * 3600.0).round();
    if secs.abs() >= SECONDS_PER_DAY {
        return Err(TimeError::InvalidOffset(hours));
    }
    FixedOffset::east_opt(secs as i32).ok_or(TimeError::InvalidOffset(hours))
}

/// Julian Date of a naive UTC date-time.
pub fn naive_utc_to_jd(dt: &NaiveDateTime) -> f64 {
    let t = dt.time();
    let secs_of_day = t.num_seconds_from_midnight() as f64 + t.nanosecond() as f64 * 1e-9;
    calendar_to_jd(dt.year(), dt.month(), dt.day() as f64 + secs_of_day / SECONDS_PER_DAY)
}

/// Naive UTC date-time of a Julian Date, rounded to the millisecond.
pub fn jd_to_naive_utc(jd: f64) -> Result<NaiveDateTime, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::Unrepresentable(jd));
    }
    let (year, month, day) = jd_to_calendar(jd);
    let whole_day = day.floor();
    let millis = ((day - whole_day) * MILLIS_PER_DAY).round() as i64;

    let midnight = NaiveDate::from_ymd_opt(year, month, whole_day as u32)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(TimeError::Unrepresentable(jd))?;
    // A fraction that rounds up to a full day rolls over here.
    midnight
        .checked_add_signed(TimeDelta::milliseconds(millis))
        .ok_or(TimeError::Unrepresentable(jd))
}

/// Julian Date rendered in the given fixed offset.
pub fn jd_to_datetime(jd: f64, offset: FixedOffset) -> Result<DateTime<FixedOffset>, TimeError> {
    let utc = jd_to_naive_utc(jd)?;
    Ok(DateTime::<FixedOffset>::from_naive_utc_and_offset(utc, offset))
}

/// A local wall-clock instant with its fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub local: NaiveDateTime,
    pub offset: FixedOffset,
}

impl CivilTime {
    pub fn new(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> Self {
        Self {
            local: date.and_time(time),
            offset,
        }
    }

    /// Parse `YYYY-MM-DD`, `HH:MM` and an offset in hours.
    pub fn parse(date: &str, time: &str, tz_offset_hours: f64) -> Result<Self, TimeError> {
        Ok(Self::new(
            parse_date(date)?,
            parse_time(time)?,
            offset_from_hours(tz_offset_hours)?,
        ))
    }

    /// The same instant in UTC.
    pub fn to_utc(&self) -> NaiveDateTime {
        self.local - TimeDelta::seconds(self.offset.local_minus_utc() as i64)
    }

    /// UTC Julian Date of this instant.
    pub fn jd_utc(&self) -> f64 {
        naive_utc_to_jd(&self.to_utc())
    }

    pub fn to_datetime(&self) -> DateTime<FixedOffset> {
        DateTime::<FixedOffset>::from_naive_utc_and_offset(self.to_utc(), self.offset)
    }
}
