//! Active-period lookup.

use super::types::{DashaPeriod, DashaSnapshot, Timeline};

/// Index of the period containing `jd` in a sorted, contiguous slice.
///
/// Intervals are half-open, so a boundary instant belongs to the later period.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.start_jd <= jd).map(|_| idx)
}

/// The chain of active periods at `query_jd`, one per generated level.
pub fn snapshot(timeline: &Timeline, query_jd: f64) -> DashaSnapshot<'_> {
    let mut periods = Vec::new();
    let mut level: &[DashaPeriod] = &timeline.periods;
    while let Some(idx) = find_active_period(level, query_jd) {
        let active = &level[idx];
        periods.push(active);
        level = &active.children;
    }
    DashaSnapshot { query_jd, periods }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::{DAYS_PER_YEAR, DashaLevel, PartialPeriodPolicy};
    use crate::dasha::vimshottari::generate_timeline;
    use crate::graha::Graha;

    const BIRTH: f64 = 2_451_545.0;

    fn timeline(depth: DashaLevel) -> Timeline {
        generate_timeline(
            BIRTH,
            Graha::Ketu,
            0.0,
            13.0,
            depth,
            PartialPeriodPolicy::Proportional,
        )
        .unwrap()
    }

    #[test]
    fn birth_instant_is_first_period() {
        let t = timeline(DashaLevel::Mahadasha);
        assert_eq!(find_active_period(&t.periods, BIRTH), Some(0));
    }

    #[test]
    fn boundary_belongs_to_next_period() {
        let t = timeline(DashaLevel::Mahadasha);
        let ketu_end = t.periods[0].end_jd;
        assert_eq!(find_active_period(&t.periods, ketu_end), Some(1));
    }

    #[test]
    fn outside_window_is_none() {
        let t = timeline(DashaLevel::Mahadasha);
        assert_eq!(find_active_period(&t.periods, BIRTH - 1.0), None);
        assert_eq!(find_active_period(&t.periods, BIRTH + 120.0 * DAYS_PER_YEAR), None);
    }

    #[test]
    fn snapshot_descends_every_level() {
        let t = timeline(DashaLevel::Pratyantardasha);
        // 10 years in: Venus Mahadasha (7..27), Venus-Venus Bhukti (7..10.33).
        let snap = snapshot(&t, BIRTH + 10.0 * DAYS_PER_YEAR);
        assert!(snap.is_active());
        assert_eq!(snap.periods.len(), 3);
        assert_eq!(snap.periods[0].ruler, Graha::Shukra);
        assert_eq!(snap.periods[1].ruler, Graha::Shukra);
        assert_eq!(snap.periods[2].level, DashaLevel::Pratyantardasha);
        for pair in snap.periods.windows(2) {
            assert!(pair[1].start_jd >= pair[0].start_jd && pair[1].end_jd <= pair[0].end_jd);
        }
    }

    #[test]
    fn snapshot_before_birth_is_empty() {
        let t = timeline(DashaLevel::Antardasha);
        assert!(!snapshot(&t, BIRTH - 0.5).is_active());
    }
}
