//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A is the accumulated westward drift of the vernal equinox along the
//! ecliptic since J2000.0. Every mean ayanamsha is its J2000 value plus p_A.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567-586, Table 1.

/// General precession in longitude, arcseconds.
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    t * (5028.796195 + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 - t * 0.0000000383))))
}

/// General precession in longitude, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn about_fifty_arcsec_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.01, "p_A(0.01) = {p}");
    }

    #[test]
    fn one_century() {
        let p = general_precession_longitude_deg(1.0);
        assert!((p - 5029.9016 / 3600.0).abs() < 1e-6, "p_A(1.0) = {p}°");
    }

    #[test]
    fn sign_follows_time() {
        assert!(general_precession_longitude_arcsec(-0.5) < 0.0);
        assert!(general_precession_longitude_arcsec(0.5) > 0.0);
    }
}
