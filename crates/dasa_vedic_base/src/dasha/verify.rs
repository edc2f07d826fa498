//! Structural checks run on every generated timeline.
//!
//! A failure here means the generator produced something wrong; it is
//! reported as [`VedicError::Computation`] and never corrected in place.

use super::types::{
    DAYS_PER_YEAR, DURATION_TOLERANCE_YEARS, DashaLevel, DashaPeriod, PartialPeriodPolicy,
    Timeline,
};
use super::vimshottari::{VIMSHOTTARI_TOTAL_YEARS, ruler_after};
use crate::error::VedicError;

fn fail(msg: String) -> Result<(), VedicError> {
    Err(VedicError::Computation(msg))
}

/// Verify spans, sums, ruler order, levels and depth of a timeline.
pub fn verify_timeline(timeline: &Timeline) -> Result<(), VedicError> {
    let Some(first) = timeline.periods.first() else {
        return fail("timeline has no periods".to_string());
    };
    if first.ruler != timeline.ruler {
        return fail(format!(
            "first Mahadasha is {}, expected {}",
            first.ruler, timeline.ruler
        ));
    }
    check_siblings(
        &timeline.periods,
        DashaLevel::Mahadasha,
        0.0,
        VIMSHOTTARI_TOTAL_YEARS,
        timeline.birth_jd,
        "timeline",
    )?;
    for period in &timeline.periods {
        check_period(period, timeline)?;
    }
    Ok(())
}

fn check_period(period: &DashaPeriod, timeline: &Timeline) -> Result<(), VedicError> {
    let wants_children = period.level < timeline.depth;
    if wants_children != !period.children.is_empty() {
        return fail(format!(
            "{} {} has {} sub-periods at depth {}",
            period.ruler,
            period.level.name(),
            period.children.len(),
            timeline.depth.name()
        ));
    }
    if period.children.is_empty() {
        return Ok(());
    }

    let Some(child_level) = period.level.child_level() else {
        return fail(format!("{} has sub-periods below Pranadasha", period.ruler));
    };
    let context = format!("{} {}", period.ruler, period.level.name());
    check_siblings(
        &period.children,
        child_level,
        period.start_years,
        period.end_years,
        timeline.birth_jd,
        &context,
    )?;
    if timeline.policy == PartialPeriodPolicy::Proportional
        && (period.children.len() != 9 || period.children[0].ruler != period.ruler)
    {
        return fail(format!(
            "{context}: proportional sub-periods must be the nine rulers starting at {}",
            period.ruler
        ));
    }
    for child in &period.children {
        check_period(child, timeline)?;
    }
    Ok(())
}

fn check_siblings(
    siblings: &[DashaPeriod],
    level: DashaLevel,
    start_years: f64,
    end_years: f64,
    birth_jd: f64,
    context: &str,
) -> Result<(), VedicError> {
    let (Some(first), Some(last)) = (siblings.first(), siblings.last()) else {
        return fail(format!("{context}: no periods"));
    };
    if (first.start_years - start_years).abs() > DURATION_TOLERANCE_YEARS
        || (last.end_years - end_years).abs() > DURATION_TOLERANCE_YEARS
    {
        return fail(format!(
            "{context}: periods span {}..{}, expected {start_years}..{end_years}",
            first.start_years, last.end_years
        ));
    }

    let sum: f64 = siblings.iter().map(DashaPeriod::duration_years).sum();
    if (sum - (end_years - start_years)).abs() > DURATION_TOLERANCE_YEARS {
        return fail(format!(
            "{context}: durations sum to {sum} years, expected {}",
            end_years - start_years
        ));
    }

    let jd_tolerance = DURATION_TOLERANCE_YEARS * DAYS_PER_YEAR;
    for (i, p) in siblings.iter().enumerate() {
        if p.level != level || p.order as usize != i + 1 {
            return fail(format!(
                "{context}: period {} is {} #{}, expected {} #{}",
                i + 1,
                p.level.name(),
                p.order,
                level.name(),
                i + 1
            ));
        }
        if p.duration_years() <= 0.0 {
            return fail(format!("{context}: {} has non-positive duration", p.ruler));
        }
        if (p.start_jd - (birth_jd + p.start_years * DAYS_PER_YEAR)).abs() > jd_tolerance
            || (p.end_jd - (birth_jd + p.end_years * DAYS_PER_YEAR)).abs() > jd_tolerance
        {
            return fail(format!("{context}: {} JD bounds disagree with offsets", p.ruler));
        }
    }

    for pair in siblings.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if (b.start_years - a.end_years).abs() > DURATION_TOLERANCE_YEARS {
            return fail(format!(
                "{context}: gap or overlap between {} and {}",
                a.ruler, b.ruler
            ));
        }
        if b.ruler != ruler_after(a.ruler, 1) {
            return fail(format!(
                "{context}: {} follows {}, breaking the cycle",
                b.ruler, a.ruler
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::vimshottari::generate_timeline;
    use crate::graha::Graha;
    use crate::nakshatra::NAKSHATRA_SPAN_27;

    fn sample() -> Timeline {
        generate_timeline(
            2_451_545.0,
            Graha::Chandra,
            4.0,
            NAKSHATRA_SPAN_27,
            DashaLevel::Antardasha,
            PartialPeriodPolicy::Proportional,
        )
        .unwrap()
    }

    #[test]
    fn generated_timeline_passes() {
        assert!(verify_timeline(&sample()).is_ok());
    }

    #[test]
    fn detects_shortened_child() {
        let mut t = sample();
        t.periods[2].children[4].end_years -= 0.01;
        assert!(matches!(verify_timeline(&t), Err(VedicError::Computation(_))));
    }

    #[test]
    fn detects_broken_cycle() {
        let mut t = sample();
        t.periods.swap(3, 4);
        assert!(verify_timeline(&t).is_err());
    }

    #[test]
    fn detects_wrong_first_ruler() {
        let mut t = sample();
        t.ruler = Graha::Rahu;
        assert!(verify_timeline(&t).is_err());
    }

    #[test]
    fn detects_missing_depth() {
        let mut t = sample();
        t.periods[0].children.clear();
        assert!(verify_timeline(&t).is_err());
    }
}
