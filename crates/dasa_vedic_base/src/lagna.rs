//! Lagna (ascendant) from local sidereal time.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed), Chapter 14:
//! `λ = atan2(cos θ, −(sin θ cos ε + tan φ sin ε))`
//! where θ is local sidereal time, ε the obliquity and φ the latitude.
//!
//! Inside the polar circles the formula can return the setting point of
//! the ecliptic. The rising point always lies 0°..180° ahead of the MC, so
//! a result behind the MC is turned by 180° (the Swiss Ephemeris rule).

use crate::error::VedicError;
use crate::util::normalize_360;

/// At the poles every ecliptic point lies on the horizon.
pub const MAX_LAGNA_LATITUDE_DEG: f64 = 90.0;

/// Tropical ecliptic longitude of the ascendant, degrees in [0, 360).
pub fn lagna_longitude_deg(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> Result<f64, VedicError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() >= MAX_LAGNA_LATITUDE_DEG {
        return Err(VedicError::InvalidInput(format!(
            "latitude {latitude_deg} must lie strictly inside ±{MAX_LAGNA_LATITUDE_DEG}°"
        )));
    }
    if !lst_deg.is_finite() || !obliquity_deg.is_finite() {
        return Err(VedicError::InvalidInput(
            "sidereal time and obliquity must be finite".to_string(),
        ));
    }
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    let asc = normalize_360(asc.to_degrees());
    let mc = normalize_360(f64::atan2(theta.sin(), theta.cos() * eps.cos()).to_degrees());
    if (asc - mc).rem_euclid(360.0) > 180.0 {
        return Ok(normalize_360(asc + 180.0));
    }
    Ok(asc)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.4393;

    #[test]
    fn equator_equinox_on_meridian() {
        // Aries 0° culminating at the equator: Cancer 0° rises.
        let asc = lagna_longitude_deg(0.0, 0.0, EPS).unwrap();
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn equator_cancer_on_meridian() {
        let asc = lagna_longitude_deg(90.0, 0.0, EPS).unwrap();
        assert!((asc - 180.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn ascendant_leads_mc_by_a_quadrant_or_so() {
        // At moderate latitude the ascendant lies 60°..120° ahead of the RAMC.
        for lst in [10.0, 100.0, 200.0, 300.0] {
            let asc = lagna_longitude_deg(lst, 28.6, EPS).unwrap();
            let lead = (asc - lst).rem_euclid(360.0);
            assert!((50.0..130.0).contains(&lead), "lst {lst}: asc {asc}");
        }
    }

    /// Altitude sine and hour-angle sine of an ecliptic point (β = 0).
    fn horizon_check(lon: f64, lst: f64, lat: f64) -> (f64, f64) {
        let (l, t, p, e) = (
            lon.to_radians(),
            lst.to_radians(),
            lat.to_radians(),
            EPS.to_radians(),
        );
        let ra = f64::atan2(l.sin() * e.cos(), l.cos());
        let dec = (l.sin() * e.sin()).asin();
        let h = t - ra;
        let sin_alt = p.sin() * dec.sin() + p.cos() * dec.cos() * h.cos();
        (sin_alt, h.sin())
    }

    #[test]
    fn ascendant_rises_in_the_east_at_all_latitudes() {
        for lat in [-89.0, -70.0, -66.5, 0.0, 28.6, 66.6, 69.65, 70.0, 80.0] {
            for i in 0..72 {
                let lst = i as f64 * 5.0 + 0.5;
                let asc = lagna_longitude_deg(lst, lat, EPS).unwrap();
                let (sin_alt, sin_h) = horizon_check(asc, lst, lat);
                assert!(sin_alt.abs() < 1e-9, "lat {lat} lst {lst}: altitude {sin_alt}");
                assert!(sin_h < 0.0, "lat {lat} lst {lst}: {asc} is setting");
            }
        }
    }

    #[test]
    fn tromso_takes_the_rising_intersection() {
        // 69.65°N, RAMC 260°: the raw formula lands on the setting point 225.79°.
        let asc = lagna_longitude_deg(260.0, 69.65, EPS).unwrap();
        assert!((asc - 45.792).abs() < 1e-3, "asc = {asc}");
    }

    #[test]
    fn poles_rejected() {
        for lat in [90.0, -90.0, f64::NAN] {
            assert!(matches!(
                lagna_longitude_deg(0.0, lat, EPS),
                Err(VedicError::InvalidInput(_))
            ));
        }
        assert!(lagna_longitude_deg(0.0, 89.999, EPS).is_ok());
    }
}
