//! Sub-period (Bhukti and deeper) generation.
//!
//! A parent with ruler R and span D is divided into the nine rulers
//! starting at R, each taking `D * years(sub) / 120`. Boundaries come from
//! the running sum of whole years: `start + D * cumulative / 120`.

use super::types::{DURATION_TOLERANCE_YEARS, DashaLevel, DashaPeriod, PartialPeriodPolicy};
use super::vimshottari::{SLIVER_YEARS, VIMSHOTTARI_TOTAL_YEARS, dasha_years, ruler_after};
use crate::error::VedicError;

/// Recursively fill `parent.children` down to `depth`.
pub fn attach_children(
    parent: &mut DashaPeriod,
    birth_jd: f64,
    depth: DashaLevel,
    policy: PartialPeriodPolicy,
) -> Result<(), VedicError> {
    let Some(child_level) = parent.level.child_level().filter(|l| *l <= depth) else {
        return Ok(());
    };
    let mut children = child_periods(parent, birth_jd, child_level, policy)?;
    for child in &mut children {
        attach_children(child, birth_jd, depth, policy)?;
    }
    parent.children = children;
    Ok(())
}

/// One level of children for `parent`, snapped to its bounds.
pub fn child_periods(
    parent: &DashaPeriod,
    birth_jd: f64,
    child_level: DashaLevel,
    policy: PartialPeriodPolicy,
) -> Result<Vec<DashaPeriod>, VedicError> {
    let (span_start, span_years) = match policy {
        PartialPeriodPolicy::Proportional => (parent.start_years, parent.duration_years()),
        PartialPeriodPolicy::Clipped => (parent.natural_start_years, parent.natural_years),
    };

    let mut children = Vec::with_capacity(9);
    let mut cumulative = 0.0;
    for k in 0..9 {
        let ruler = ruler_after(parent.ruler, k);
        let natural_start = span_start + span_years * cumulative / VIMSHOTTARI_TOTAL_YEARS;
        cumulative += dasha_years(ruler);
        let natural_end = span_start + span_years * cumulative / VIMSHOTTARI_TOTAL_YEARS;

        let start = natural_start.max(parent.start_years);
        let end = natural_end.min(parent.end_years);
        if end <= start {
            if policy == PartialPeriodPolicy::Proportional {
                return Err(VedicError::Computation(format!(
                    "{} {}: {} sub-period collapses at {start} years",
                    parent.ruler.english_name(),
                    parent.level.name(),
                    ruler.english_name()
                )));
            }
            continue;
        }
        let child = DashaPeriod::new(ruler, child_level, 0, start, end, birth_jd)
            .with_natural_span(natural_start, natural_end - natural_start);
        children.push(child);
    }

    if policy == PartialPeriodPolicy::Clipped {
        trim_edge_slivers(&mut children);
    }
    for (i, child) in children.iter_mut().enumerate() {
        child.order = i as u16 + 1;
    }
    snap_to_parent(&mut children, parent, birth_jd)?;
    Ok(children)
}

/// Drop floating-point residue left where a clip edge meets a natural boundary.
fn trim_edge_slivers(children: &mut Vec<DashaPeriod>) {
    while children.len() > 1 && children[0].duration_years() <= SLIVER_YEARS {
        children.remove(0);
    }
    while children.len() > 1
        && children
            .last()
            .is_some_and(|c| c.duration_years() <= SLIVER_YEARS)
    {
        children.pop();
    }
}

/// Snap the outer children onto the parent bounds, refusing drift beyond tolerance.
pub fn snap_to_parent(
    children: &mut [DashaPeriod],
    parent: &DashaPeriod,
    birth_jd: f64,
) -> Result<(), VedicError> {
    let (Some(first_start), Some(last_end)) = (
        children.first().map(|c| c.start_years),
        children.last().map(|c| c.end_years),
    ) else {
        return Err(VedicError::Computation(format!(
            "{} {} produced no sub-periods",
            parent.ruler.english_name(),
            parent.level.name()
        )));
    };

    let drift = (first_start - parent.start_years)
        .abs()
        .max((last_end - parent.end_years).abs());
    if drift > DURATION_TOLERANCE_YEARS {
        return Err(VedicError::Computation(format!(
            "sub-periods of {} {} drift {drift} years from the parent bounds",
            parent.ruler.english_name(),
            parent.level.name()
        )));
    }

    if let Some(first) = children.first_mut() {
        first.set_start(parent.start_years, birth_jd);
    }
    if let Some(last) = children.last_mut() {
        last.set_end(parent.end_years, birth_jd);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    const BIRTH: f64 = 2_451_545.0;

    fn mahadasha(ruler: Graha, start: f64, end: f64) -> DashaPeriod {
        DashaPeriod::new(ruler, DashaLevel::Mahadasha, 1, start, end, BIRTH)
    }

    #[test]
    fn venus_bhuktis_start_with_venus() {
        let parent = mahadasha(Graha::Shukra, 7.0, 27.0);
        let kids =
            child_periods(&parent, BIRTH, DashaLevel::Antardasha, PartialPeriodPolicy::Proportional)
                .unwrap();
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].ruler, Graha::Shukra);
        assert_eq!(kids[1].ruler, Graha::Surya);
        assert_eq!(kids[8].ruler, Graha::Ketu);
        // Venus-Venus = 20 * 20 / 120 = 3y 4m
        assert!((kids[0].duration_years() - 20.0 * 20.0 / 120.0).abs() < 1e-12);
        assert_eq!(kids[0].start_years, 7.0);
        assert_eq!(kids[8].end_years, 27.0);
    }

    #[test]
    fn children_are_contiguous() {
        let parent = mahadasha(Graha::Rahu, 3.25, 21.25);
        let kids =
            child_periods(&parent, BIRTH, DashaLevel::Antardasha, PartialPeriodPolicy::Proportional)
                .unwrap();
        for pair in kids.windows(2) {
            assert_eq!(pair[0].end_years, pair[1].start_years);
            assert_eq!(pair[0].end_jd, pair[1].start_jd);
        }
        let sum: f64 = kids.iter().map(DashaPeriod::duration_years).sum();
        assert!((sum - 18.0).abs() < 1e-12);
    }

    #[test]
    fn clipped_partial_parent_drops_expired_bhuktis() {
        // Ketu Mahadasha with half elapsed: natural span [-3.5, 3.5).
        let parent = mahadasha(Graha::Ketu, 0.0, 3.5).with_natural_span(-3.5, 7.0);
        let kids =
            child_periods(&parent, BIRTH, DashaLevel::Antardasha, PartialPeriodPolicy::Clipped)
                .unwrap();
        // Cumulative units from Ketu: 7, 27, 33, 43, 50, 68, 84, 103, 120.
        // Birth at 60/120 falls inside Rahu (50..68).
        assert_eq!(kids[0].ruler, Graha::Rahu);
        assert_eq!(kids[0].order, 1);
        assert_eq!(kids[0].start_years, 0.0);
        assert!((kids[0].end_years - (-3.5 + 7.0 * 68.0 / 120.0)).abs() < 1e-12);
        assert_eq!(kids.last().map(|k| k.ruler), Some(Graha::Buddh));
        assert_eq!(kids.len(), 4);
        assert_eq!(kids.last().map(|k| k.end_years), Some(3.5));
    }

    #[test]
    fn attach_respects_depth() {
        let mut parent = mahadasha(Graha::Surya, 0.0, 6.0);
        attach_children(
            &mut parent,
            BIRTH,
            DashaLevel::Pratyantardasha,
            PartialPeriodPolicy::Proportional,
        )
        .unwrap();
        assert_eq!(parent.children.len(), 9);
        assert_eq!(parent.children[0].children.len(), 9);
        assert!(parent.children[0].children[0].children.is_empty());
        assert_eq!(parent.subtree_len(), 1 + 9 + 81);
    }

    #[test]
    fn proportional_collapse_is_an_error() {
        // Two ULPs wide at 120 years: the Rahu share (18/120) rounds to nothing.
        let start = 120.0 - 2.0 * f64::EPSILON * 64.0;
        let parent = mahadasha(Graha::Rahu, start, 120.0);
        let err =
            child_periods(&parent, BIRTH, DashaLevel::Antardasha, PartialPeriodPolicy::Proportional)
                .unwrap_err();
        assert!(matches!(err, VedicError::Computation(_)));
    }

    #[test]
    fn snap_rejects_large_drift() {
        let parent = mahadasha(Graha::Surya, 0.0, 6.0);
        let mut kids = vec![DashaPeriod::new(
            Graha::Surya,
            DashaLevel::Antardasha,
            1,
            0.0,
            5.0,
            BIRTH,
        )];
        let err = snap_to_parent(&mut kids, &parent, BIRTH).unwrap_err();
        assert!(matches!(err, VedicError::Computation(_)));
    }
}
