//! Serializable timeline report.
//!
//! Converts a [`DashaChart`] into plain `serde` structures. Nesting and
//! order are preserved and nothing is recomputed: JDs and durations carry
//! the generator's full `f64` values, and `start`/`end` render those JDs
//! as ISO-8601 timestamps in the birth's UTC offset.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use dasa_time::jd_to_datetime;

use super::types::{DashaChart, DashaPeriod};
use crate::error::VedicError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Top-level report for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineReport {
    pub seed: String,
    pub longitude: f64,
    pub nakshatra: String,
    pub nakshatra_index: u8,
    pub pada: u8,
    pub ruler: String,
    pub balance_years: f64,
    pub birth: String,
    pub birth_jd: f64,
    pub depth: String,
    pub policy: String,
    pub timeline: Vec<PeriodReport>,
}

/// One period and its nested sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub ruler: String,
    pub level: String,
    pub order: u16,
    pub start: String,
    pub end: String,
    pub start_jd: f64,
    pub end_jd: f64,
    pub duration_years: f64,
    pub children: Vec<PeriodReport>,
}

fn timestamp(jd: f64, offset: FixedOffset) -> Result<String, VedicError> {
    Ok(jd_to_datetime(jd, offset)?.format(TIMESTAMP_FORMAT).to_string())
}

fn period_report(period: &DashaPeriod, offset: FixedOffset) -> Result<PeriodReport, VedicError> {
    Ok(PeriodReport {
        ruler: period.ruler.english_name().to_string(),
        level: period.level.name().to_string(),
        order: period.order,
        start: timestamp(period.start_jd, offset)?,
        end: timestamp(period.end_jd, offset)?,
        start_jd: period.start_jd,
        end_jd: period.end_jd,
        duration_years: period.duration_years(),
        children: period
            .children
            .iter()
            .map(|c| period_report(c, offset))
            .collect::<Result<_, _>>()?,
    })
}

/// Build the report; `offset` is the birth's UTC offset used for timestamps.
pub fn serialize_timeline(
    chart: &DashaChart,
    offset: FixedOffset,
) -> Result<TimelineReport, VedicError> {
    let t = &chart.timeline;
    Ok(TimelineReport {
        seed: chart.seed.key().to_string(),
        longitude: chart.longitude,
        nakshatra: chart.position.nakshatra.name().to_string(),
        nakshatra_index: chart.position.index,
        pada: chart.position.pada,
        ruler: t.ruler.english_name().to_string(),
        balance_years: t.balance_years,
        birth: timestamp(t.birth_jd, offset)?,
        birth_jd: t.birth_jd,
        depth: t.depth.name().to_string(),
        policy: t.policy.name().to_string(),
        timeline: t
            .periods
            .iter()
            .map(|p| period_report(p, offset))
            .collect::<Result<_, _>>()?,
    })
}

/// Pretty-printed JSON.
pub fn to_json(report: &TimelineReport) -> Result<String, VedicError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| VedicError::Computation(format!("timeline serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::{DashaLevel, PartialPeriodPolicy, SeedKind};
    use crate::dasha::vimshottari::vimshottari_chart;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(19_800).unwrap()
    }

    fn chart() -> DashaChart {
        vimshottari_chart(
            2_451_545.0,
            SeedKind::Moon,
            0.0,
            DashaLevel::Antardasha,
            PartialPeriodPolicy::Proportional,
        )
        .unwrap()
    }

    #[test]
    fn header_fields() {
        let report = serialize_timeline(&chart(), ist()).unwrap();
        assert_eq!(report.seed, "moon");
        assert_eq!(report.nakshatra, "Ashwini");
        assert_eq!(report.pada, 1);
        assert_eq!(report.ruler, "Ketu");
        assert_eq!(report.balance_years, 7.0);
        assert_eq!(report.birth, "2000-01-01T17:30:00.000+05:30");
        assert_eq!(report.depth, "Antardasha");
    }

    #[test]
    fn nesting_and_order_preserved() {
        let c = chart();
        let report = serialize_timeline(&c, ist()).unwrap();
        assert_eq!(report.timeline.len(), c.timeline.periods.len());
        for (r, p) in report.timeline.iter().zip(&c.timeline.periods) {
            assert_eq!(r.ruler, p.ruler.english_name());
            assert_eq!(r.start_jd, p.start_jd);
            assert_eq!(r.children.len(), p.children.len());
            assert!(r.children.iter().all(|k| k.children.is_empty()));
        }
        assert_eq!(report.timeline[1].ruler, "Venus");
        assert_eq!(report.timeline[1].children[1].ruler, "Sun");
    }

    #[test]
    fn json_is_stable_and_parses_back() {
        let a = to_json(&serialize_timeline(&chart(), ist()).unwrap()).unwrap();
        let b = to_json(&serialize_timeline(&chart(), ist()).unwrap()).unwrap();
        assert_eq!(a, b);
        let parsed: TimelineReport = serde_json::from_str(&a).unwrap();
        assert_eq!(parsed.timeline[0].duration_years, 7.0);
        assert!(a.contains("\"children\""));
    }
}
