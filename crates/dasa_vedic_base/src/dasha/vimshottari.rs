//! Vimshottari dasha: the 120-year nakshatra-seeded cycle.
//!
//! Ruler order and years (BPHS): Ketu 7, Shukra 20, Surya 6, Chandra 10,
//! Mangal 7, Rahu 18, Guru 16, Shani 19, Buddh 17. Nakshatra n is ruled by
//! `VIMSHOTTARI_SEQUENCE[n mod 9]`.
//!
//! The timeline starts at birth with the unexpired balance of the birth
//! ruler's Mahadasha, then cycles through the full periods until 120 years
//! are covered; the last period is truncated at the cap. Every boundary is
//! a cumulative sum from birth rather than a chain of rounded additions.

use super::balance::birth_balance;
use super::subperiod::attach_children;
use super::types::{
    DURATION_TOLERANCE_YEARS, DashaChart, DashaLevel, DashaPeriod, PartialPeriodPolicy, SeedKind,
    Timeline,
};
use super::verify::verify_timeline;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN_ARCSEC, resolve_nakshatra};

/// Vimshottari ruler order.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha lengths in years, aligned with [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the whole cycle.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Periods shorter than this at a clip edge are floating-point residue.
pub(crate) const SLIVER_YEARS: f64 = 1e-12;

/// Shortest period that may close the timeline at 120 years.
///
/// Sub-periods of the closing period are bounded by offsets near 120, where
/// one ULP is about 1.4e-14 years; five levels deep the shortest descendant
/// is `(6/120)^4` of its Mahadasha. A seed whose elapsed part would leave a
/// shorter tail counts as sitting on the segment start.
pub const MIN_TAIL_YEARS: f64 = 1e-6;

/// Position of a graha in [`VIMSHOTTARI_SEQUENCE`].
pub const fn sequence_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full Mahadasha length of a graha in years.
pub const fn dasha_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[sequence_position(graha)]
}

/// The `k`-th ruler counted from `start` (k = 0 is `start` itself).
pub const fn ruler_after(start: Graha, k: usize) -> Graha {
    VIMSHOTTARI_SEQUENCE[(sequence_position(start) + k) % 9]
}

/// Ruler of a nakshatra by 0-based index.
pub const fn ruler_for_nakshatra(index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[index as usize % 9]
}

/// Generate a verified 120-year timeline.
///
/// `degree_into_segment` and `segment_width` give the seed's position in
/// its nakshatra (any common unit). `depth` is the deepest level emitted.
pub fn generate_timeline(
    birth_jd: f64,
    ruler: Graha,
    degree_into_segment: f64,
    segment_width: f64,
    depth: DashaLevel,
    policy: PartialPeriodPolicy,
) -> Result<Timeline, VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput(format!(
            "birth JD {birth_jd} must be finite"
        )));
    }
    let balance = birth_balance(ruler, degree_into_segment, segment_width)?;

    let mut periods = mahadashas(birth_jd, ruler, balance.balance_years, policy);
    close_at_cap(&mut periods, birth_jd)?;
    for period in &mut periods {
        attach_children(period, birth_jd, depth, policy)?;
    }

    let timeline = Timeline {
        birth_jd,
        ruler,
        elapsed_fraction: balance.elapsed_fraction,
        balance_years: balance.balance_years,
        depth,
        policy,
        periods,
    };
    verify_timeline(&timeline)?;
    Ok(timeline)
}

fn mahadashas(
    birth_jd: f64,
    ruler: Graha,
    balance_years: f64,
    policy: PartialPeriodPolicy,
) -> Vec<DashaPeriod> {
    let mut periods = Vec::with_capacity(10);
    let mut start = 0.0;
    // Whole years after the balance; integer sums stay exact.
    let mut full_after_balance = 0.0;
    let mut k = 0;

    while start < VIMSHOTTARI_TOTAL_YEARS - SLIVER_YEARS {
        let graha = ruler_after(ruler, k);
        let full = dasha_years(graha);
        let natural_end = if k == 0 {
            balance_years
        } else {
            full_after_balance += full;
            balance_years + full_after_balance
        };
        let end = natural_end.min(VIMSHOTTARI_TOTAL_YEARS);

        let mut period =
            DashaPeriod::new(graha, DashaLevel::Mahadasha, k as u16 + 1, start, end, birth_jd);
        if policy == PartialPeriodPolicy::Clipped {
            period = period.with_natural_span(natural_end - full, full);
        }
        periods.push(period);

        start = end;
        k += 1;
    }
    periods
}

/// Pin the last Mahadasha to exactly 120 years, refusing larger drift.
fn close_at_cap(periods: &mut [DashaPeriod], birth_jd: f64) -> Result<(), VedicError> {
    let last = periods
        .last_mut()
        .ok_or_else(|| VedicError::Computation("timeline has no periods".to_string()))?;
    let drift = (last.end_years - VIMSHOTTARI_TOTAL_YEARS).abs();
    if drift > DURATION_TOLERANCE_YEARS {
        return Err(VedicError::Computation(format!(
            "timeline ends at {} years, expected {VIMSHOTTARI_TOTAL_YEARS}",
            last.end_years
        )));
    }
    last.set_end(VIMSHOTTARI_TOTAL_YEARS, birth_jd);
    Ok(())
}

/// Resolve a sidereal longitude and generate its timeline.
pub fn timeline_from_longitude(
    birth_jd: f64,
    longitude: f64,
    depth: DashaLevel,
    policy: PartialPeriodPolicy,
) -> Result<Timeline, VedicError> {
    Ok(vimshottari_chart(birth_jd, SeedKind::Moon, longitude, depth, policy)?.timeline)
}

/// Resolve a seed longitude and generate the chart (seed + timeline).
pub fn vimshottari_chart(
    birth_jd: f64,
    seed: SeedKind,
    longitude: f64,
    depth: DashaLevel,
    policy: PartialPeriodPolicy,
) -> Result<DashaChart, VedicError> {
    let position = resolve_nakshatra(longitude)?;
    // Arcseconds keep the offset strictly below the span.
    let timeline = generate_timeline(
        birth_jd,
        position.ruler,
        position.arcsec_into_segment,
        NAKSHATRA_SPAN_ARCSEC,
        depth,
        policy,
    )?;
    Ok(DashaChart {
        seed,
        longitude,
        position,
        timeline,
    })
}
