//! Property tests over the whole longitude circle.

use dasa_vedic_base::dasha::{
    DashaLevel, MIN_TAIL_YEARS, PartialPeriodPolicy, SeedKind, Timeline, VIMSHOTTARI_TOTAL_YEARS,
    snapshot, timeline_from_longitude, verify_timeline, vimshottari_chart,
};
use dasa_vedic_base::dasha::{DAYS_PER_YEAR, DashaPeriod};
use dasa_vedic_base::{NAKSHATRA_SPAN_27, resolve_nakshatra};
use proptest::prelude::*;

const BIRTH: f64 = 2_447_000.5;

fn policy() -> impl Strategy<Value = PartialPeriodPolicy> {
    prop_oneof![
        Just(PartialPeriodPolicy::Proportional),
        Just(PartialPeriodPolicy::Clipped)
    ]
}

/// Longitudes within 1e-14..1e-5 degrees of a segment boundary, either side.
fn near_boundary() -> impl Strategy<Value = f64> {
    (0u32..27, -14.0f64..-5.0, any::<bool>()).prop_map(|(k, exp, above)| {
        let eps = 10f64.powf(exp);
        if above {
            k as f64 * NAKSHATRA_SPAN_27 + eps
        } else {
            k.max(1) as f64 * NAKSHATRA_SPAN_27 - eps
        }
    })
}

fn any_longitude() -> impl Strategy<Value = f64> {
    prop_oneof![0.0f64..360.0, near_boundary()]
}

fn check_top_level(t: &Timeline) {
    assert!((t.total_years() - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-9);
    assert_eq!(t.periods.last().map(|p| p.end_years), Some(VIMSHOTTARI_TOTAL_YEARS));
    if t.elapsed_fraction > 0.0 {
        assert_eq!(t.periods.len(), 10);
        let tail = t.periods[9].duration_years();
        assert!(tail >= MIN_TAIL_YEARS * (1.0 - 1e-6), "tail {tail}");
    } else {
        assert_eq!(t.periods.len(), 9);
        assert_eq!(t.balance_years, t.periods[0].duration_years());
    }
}

fn check_children_sum(period: &DashaPeriod) {
    if period.children.is_empty() {
        return;
    }
    let sum: f64 = period.children.iter().map(DashaPeriod::duration_years).sum();
    assert!(
        (sum - period.duration_years()).abs() < 1e-9,
        "{} {}: {sum} vs {}",
        period.ruler,
        period.level.name(),
        period.duration_years()
    );
    period.children.iter().for_each(check_children_sum);
}

fn build(lon: f64, depth: DashaLevel, policy: PartialPeriodPolicy) -> Timeline {
    timeline_from_longitude(BIRTH, lon, depth, policy).unwrap()
}

proptest! {
    #[test]
    fn resolver_ranges(lon in 0.0f64..360.0) {
        let p = resolve_nakshatra(lon).unwrap();
        prop_assert!(p.index <= 26);
        prop_assert!((1..=4).contains(&p.pada));
        prop_assert!(p.degree_into_segment >= 0.0 && p.degree_into_segment < NAKSHATRA_SPAN_27);
        prop_assert!((0.0..1.0).contains(&p.elapsed_fraction));
    }

    #[test]
    fn top_level_covers_120_years(lon in any_longitude(), policy in policy()) {
        check_top_level(&build(lon, DashaLevel::Mahadasha, policy));
    }

    #[test]
    fn children_sum_to_parent(lon in 0.0f64..360.0, policy in policy()) {
        let t = build(lon, DashaLevel::Pratyantardasha, policy);
        t.periods.iter().for_each(check_children_sum);
        prop_assert!(verify_timeline(&t).is_ok());
    }

    #[test]
    fn same_input_same_tree(lon in 0.0f64..360.0) {
        let chart = || {
            vimshottari_chart(
                BIRTH,
                SeedKind::Moon,
                lon,
                DashaLevel::Antardasha,
                PartialPeriodPolicy::Proportional,
            )
            .unwrap()
        };
        prop_assert_eq!(chart(), chart());
    }

    #[test]
    fn snapshot_inside_window(lon in 0.0f64..360.0, years in 0.0f64..119.999, policy in policy()) {
        let t = build(lon, DashaLevel::Antardasha, policy);
        let jd = BIRTH + years * DAYS_PER_YEAR;
        let snap = snapshot(&t, jd);
        prop_assert_eq!(snap.periods.len(), 2);
        for p in snap.periods {
            prop_assert!(p.contains_jd(jd));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Seeds next to a boundary give the shortest partial periods; the whole
    /// tree down to Pranadasha must still verify.
    #[test]
    fn boundary_seeds_verify_to_pranadasha(lon in near_boundary(), policy in policy()) {
        let t = timeline_from_longitude(BIRTH, lon, DashaLevel::Pranadasha, policy)
            .unwrap_or_else(|e| panic!("{lon}: {e}"));
        check_top_level(&t);
        t.periods.iter().for_each(check_children_sum);
        prop_assert!(verify_timeline(&t).is_ok());
    }
}
