//! Dasha orchestration: bridges the ephemeris with the pure-math timeline
//! generator in `dasa_vedic_base`.
//!
//! - `moon_dasha`: timeline seeded by the sidereal Moon
//! - `indu_dasha`: timeline seeded by the Indu Lagna
//! - `dasha_report`: serializable report in the birth's offset

use dasa_core::Ephemeris;
use dasa_vedic_base::dasha::{
    DashaChart, DashaLevel, PartialPeriodPolicy, SeedKind, TimelineReport, serialize_timeline,
    vimshottari_chart,
};
use dasa_vedic_base::{AyanamshaSystem, InduLagna, indu_lagna_from_longitudes};
use tracing::{debug, instrument};

use crate::birth::BirthMoment;
use crate::error::SearchError;
use crate::position::{resolve_moon_longitude, sidereal_lagna};

/// How a timeline is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashaRequest {
    pub ayanamsha: AyanamshaSystem,
    pub depth: DashaLevel,
    pub policy: PartialPeriodPolicy,
}

/// Moon-seeded Vimshottari timeline.
#[instrument(
    level = "debug",
    skip_all,
    fields(jd_utc = birth.jd_utc(), depth = request.depth.name())
)]
pub fn moon_dasha<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: &BirthMoment,
    request: &DashaRequest,
) -> Result<DashaChart, SearchError> {
    let moon = resolve_moon_longitude(ephemeris, birth, request.ayanamsha)?;
    chart_for_seed(birth, SeedKind::Moon, moon, request)
}

/// Indu Lagna of a birth, with the lords and kaksha sum behind it.
pub fn indu_lagna_for_birth<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: &BirthMoment,
    system: AyanamshaSystem,
) -> Result<InduLagna, SearchError> {
    let moon = resolve_moon_longitude(ephemeris, birth, system)?;
    let lagna = sidereal_lagna(birth, system)?;
    let indu = indu_lagna_from_longitudes(moon, lagna)?;
    debug!(
        lagna,
        moon,
        lagna_ninth_lord = %indu.lagna_ninth_lord,
        moon_ninth_lord = %indu.moon_ninth_lord,
        kaksha_sum = indu.kaksha_sum,
        indu = indu.longitude,
        "indu lagna"
    );
    Ok(indu)
}

/// Indu-Lagna-seeded chart with the derivation of its seed.
#[derive(Debug, Clone, PartialEq)]
pub struct InduDashaChart {
    pub indu: InduLagna,
    pub chart: DashaChart,
}

/// Indu-Lagna-seeded Vimshottari timeline.
#[instrument(
    level = "debug",
    skip_all,
    fields(jd_utc = birth.jd_utc(), depth = request.depth.name())
)]
pub fn indu_dasha<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    birth: &BirthMoment,
    request: &DashaRequest,
) -> Result<InduDashaChart, SearchError> {
    let indu = indu_lagna_for_birth(ephemeris, birth, request.ayanamsha)?;
    let chart = chart_for_seed(birth, SeedKind::InduLagna, indu.longitude, request)?;
    Ok(InduDashaChart { indu, chart })
}

fn chart_for_seed(
    birth: &BirthMoment,
    seed: SeedKind,
    longitude: f64,
    request: &DashaRequest,
) -> Result<DashaChart, SearchError> {
    let chart = vimshottari_chart(birth.jd_utc(), seed, longitude, request.depth, request.policy)?;
    debug!(
        seed = seed.key(),
        longitude,
        nakshatra = chart.position.nakshatra.name(),
        pada = chart.position.pada,
        balance_years = chart.timeline.balance_years,
        periods = chart.timeline.period_count(),
        "timeline generated"
    );
    Ok(chart)
}

/// Report with timestamps in the birth's UTC offset.
pub fn dasha_report(
    chart: &DashaChart,
    birth: &BirthMoment,
) -> Result<TimelineReport, SearchError> {
    Ok(serialize_timeline(chart, birth.offset())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dasa_core::{AnalyticEphemeris, EngineConfig};
    use dasa_vedic_base::Graha;

    fn engine() -> AnalyticEphemeris {
        AnalyticEphemeris::new(EngineConfig::default()).unwrap()
    }

    fn delhi_1990() -> BirthMoment {
        BirthMoment::parse("1990-01-15", "12:00", 28.6139, 77.2090, 5.5).unwrap()
    }

    #[test]
    fn default_request() {
        let r = DashaRequest::default();
        assert_eq!(r.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(r.depth, DashaLevel::Antardasha);
        assert_eq!(r.policy, PartialPeriodPolicy::Proportional);
    }

    #[test]
    fn moon_chart_starts_at_birth() {
        let birth = delhi_1990();
        let chart = moon_dasha(&engine(), &birth, &DashaRequest::default()).unwrap();
        assert_eq!(chart.seed, SeedKind::Moon);
        assert_eq!(chart.timeline.birth_jd, birth.jd_utc());
        assert_eq!(chart.timeline.periods[0].start_jd, birth.jd_utc());
        assert_eq!(chart.timeline.periods[0].ruler, Graha::Shukra);
    }

    #[test]
    fn indu_chart_uses_indu_longitude() {
        let birth = delhi_1990();
        let indu = indu_lagna_for_birth(&engine(), &birth, AyanamshaSystem::Lahiri).unwrap();
        let result = indu_dasha(&engine(), &birth, &DashaRequest::default()).unwrap();
        assert_eq!(result.indu, indu);
        assert_eq!(result.chart.seed, SeedKind::InduLagna);
        assert_eq!(result.chart.longitude, indu.longitude);
    }

    #[test]
    fn report_uses_birth_offset() {
        let birth = delhi_1990();
        let chart = moon_dasha(&engine(), &birth, &DashaRequest::default()).unwrap();
        let report = dasha_report(&chart, &birth).unwrap();
        assert_eq!(report.birth, "1990-01-15T12:00:00.000+05:30");
        assert_eq!(report.seed, "moon");
    }
}
