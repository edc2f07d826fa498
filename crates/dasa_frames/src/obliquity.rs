//! Mean obliquity of the ecliptic (IAU 2006).
//!
//! Source: IERS Conventions 2010, Eq. 5.40.

/// Mean obliquity at J2000.0: 84381.406″.
pub const OBLIQUITY_J2000_DEG: f64 = 84381.406 / 3600.0;

/// Mean obliquity of date in degrees, `t` in Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84381.406
        + t * (-46.836769
            + t * (-0.0001831 + t * (0.00200340 + t * (-0.000000576 - t * 0.0000000434))));
    arcsec / 3600.0
}
