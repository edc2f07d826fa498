//! Sidereal positions at a birth instant.
//!
//! Civil time → JD UTC → JD TT (ΔT) → ephemeris → minus mean ayanamsha.
//! The Lagna uses JD UTC as UT1 for sidereal time and JD TT for the
//! obliquity and ayanamsha.

use dasa_core::Ephemeris;
use dasa_frames::mean_obliquity_deg;
use dasa_time::{jd_to_centuries, local_sidereal_time_deg, utc_jd_to_tt};
use dasa_vedic_base::{AyanamshaSystem, ayanamsha_mean_deg, lagna_longitude_deg, normalize_360};
use tracing::debug;

use crate::birth::BirthMoment;
use crate::error::SearchError;

/// Moon longitude at birth, tropical and sidereal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    pub jd_utc: f64,
    pub jd_tt: f64,
    /// Geocentric ecliptic longitude, mean equinox of date.
    pub tropical: f64,
    pub ayanamsha: f64,
    /// `tropical - ayanamsha`, in [0, 360).
    pub sidereal: f64,
}

pub fn moon_position<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: &BirthMoment,
    system: AyanamshaSystem,
) -> Result<MoonPosition, SearchError> {
    let jd_utc = birth.jd_utc();
    let jd_tt = utc_jd_to_tt(jd_utc);
    let tropical = ephemeris.moon_longitude_deg(jd_tt)?;
    let ayanamsha = ayanamsha_mean_deg(system, jd_to_centuries(jd_tt));
    let sidereal = normalize_360(tropical - ayanamsha);
    debug!(jd_tt, tropical, ayanamsha, sidereal, system = system.key(), "moon position");
    Ok(MoonPosition {
        jd_utc,
        jd_tt,
        tropical,
        ayanamsha,
        sidereal,
    })
}

/// Sidereal Moon longitude at birth, degrees in [0, 360).
pub fn resolve_moon_longitude<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: &BirthMoment,
    system: AyanamshaSystem,
) -> Result<f64, SearchError> {
    Ok(moon_position(ephemeris, birth, system)?.sidereal)
}

/// Sidereal Lagna (ascendant) at birth, degrees in [0, 360).
pub fn sidereal_lagna(birth: &BirthMoment, system: AyanamshaSystem) -> Result<f64, SearchError> {
    let jd_utc = birth.jd_utc();
    let t = jd_to_centuries(utc_jd_to_tt(jd_utc));
    let lst = local_sidereal_time_deg(jd_utc, birth.longitude());
    let tropical = lagna_longitude_deg(lst, birth.latitude(), mean_obliquity_deg(t))?;
    let sidereal = normalize_360(tropical - ayanamsha_mean_deg(system, t));
    debug!(lst, tropical, sidereal, "lagna");
    Ok(sidereal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dasa_core::{AnalyticEphemeris, EngineConfig, EngineError};

    fn engine() -> AnalyticEphemeris {
        AnalyticEphemeris::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn j2000_moon() {
        let birth = BirthMoment::parse("2000-01-01", "12:00", 0.0, 0.0, 0.0).unwrap();
        let pos = moon_position(&engine(), &birth, AyanamshaSystem::Lahiri).unwrap();
        assert!((pos.tropical - 223.33).abs() < 0.05, "λ = {}", pos.tropical);
        assert!((pos.ayanamsha - 23.853).abs() < 1e-4);
        assert!((pos.sidereal - (pos.tropical - pos.ayanamsha)).abs() < 1e-12);
        assert!((pos.jd_tt - pos.jd_utc) * 86_400.0 > 60.0);
    }

    #[test]
    fn ayanamsha_choice_shifts_longitude() {
        let birth = BirthMoment::parse("2000-01-01", "12:00", 0.0, 0.0, 0.0).unwrap();
        let lahiri = resolve_moon_longitude(&engine(), &birth, AyanamshaSystem::Lahiri).unwrap();
        let raman = resolve_moon_longitude(&engine(), &birth, AyanamshaSystem::Raman).unwrap();
        assert!((raman - lahiri - (23.853 - 22.370)).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_epoch_is_ephemeris_error() {
        let birth = BirthMoment::parse("1500-06-01", "12:00", 0.0, 0.0, 0.0).unwrap();
        let err = resolve_moon_longitude(&engine(), &birth, AyanamshaSystem::Lahiri).unwrap_err();
        assert!(matches!(
            err,
            SearchError::Ephemeris(EngineError::EpochOutOfRange { .. })
        ));
    }

    #[test]
    fn lagna_above_polar_circle() {
        let birth = BirthMoment::parse("2000-01-01", "12:00", 69.65, 18.96, 1.0).unwrap();
        let lagna = sidereal_lagna(&birth, AyanamshaSystem::Lahiri).unwrap();
        assert!((0.0..360.0).contains(&lagna), "lagna = {lagna}");
    }

    #[test]
    fn lagna_rejects_pole() {
        let birth = BirthMoment::parse("2000-01-01", "12:00", 90.0, 0.0, 0.0).unwrap();
        assert!(matches!(
            sidereal_lagna(&birth, AyanamshaSystem::Lahiri),
            Err(SearchError::InvalidInput(_))
        ));
    }

    #[test]
    fn lagna_delhi() {
        let birth = BirthMoment::parse("1990-01-15", "12:00", 28.6139, 77.2090, 5.5).unwrap();
        let lagna = sidereal_lagna(&birth, AyanamshaSystem::Lahiri).unwrap();
        assert!((lagna - 3.088).abs() < 0.05, "lagna = {lagna}");
    }
}
