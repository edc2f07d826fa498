//! Greenwich and local mean sidereal time.
//!
//! Inputs are UT1 Julian Dates. The dasa engine does not carry Earth
//! orientation data, so callers pass JD UTC as an approximation of UT1
//! (|UT1 − UTC| < 0.9 s, well under a second of ascendant motion).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Earth Rotation Angle in degrees, [0, 360).
pub fn earth_rotation_angle_deg(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    // Split the integer day out so the fractional turn keeps its precision.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_6 * du + du.fract();
    (turns.rem_euclid(1.0)) * 360.0
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
pub fn gmst_deg(jd_ut1: f64) -> f64 {
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let poly_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (earth_rotation_angle_deg(jd_ut1) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local mean sidereal time in degrees for an observer at `longitude_east_deg`.
pub fn local_sidereal_time_deg(jd_ut1: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd_ut1) + longitude_east_deg).rem_euclid(360.0)
}
