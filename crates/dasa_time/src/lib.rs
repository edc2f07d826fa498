//! Time handling for the dasa engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - ΔT (TT − UT) from the Espenak–Meeus polynomials
//! - Greenwich / local mean sidereal time
//! - Civil time parsing and offset handling (via `chrono`)

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    CivilTime, jd_to_datetime, jd_to_naive_utc, naive_utc_to_jd, offset_from_hours, parse_date,
    parse_time,
};
pub use delta_t::{decimal_year, delta_t_seconds, utc_jd_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};
pub use sidereal::{earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg};
