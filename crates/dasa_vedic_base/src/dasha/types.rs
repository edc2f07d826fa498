//! Core types for Vimshottari dasha timelines.

use std::str::FromStr;

use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::NakshatraPosition;

/// Year length used to turn period offsets into days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Maximum dasha depth. Levels 0-4 supported.
pub const MAX_DASHA_LEVEL: u8 = 4;

/// Default depth: Mahadasha plus Bhukti (Antardasha).
pub const DEFAULT_DASHA_LEVEL: DashaLevel = DashaLevel::Antardasha;

/// Allowed drift (years) between siblings' summed durations and their parent.
pub const DURATION_TOLERANCE_YEARS: f64 = 1e-9;

/// 5 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl Default for DashaLevel {
    fn default() -> Self {
        DEFAULT_DASHA_LEVEL
    }
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

impl FromStr for DashaLevel {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "mahadasha" | "dasa" | "dasha" => Ok(Self::Mahadasha),
            "1" | "antardasha" | "bhukti" => Ok(Self::Antardasha),
            "2" | "pratyantardasha" | "antara" => Ok(Self::Pratyantardasha),
            "3" | "sookshmadasha" | "sookshma" => Ok(Self::Sookshmadasha),
            "4" | "pranadasha" | "prana" => Ok(Self::Pranadasha),
            _ => Err(VedicError::InvalidInput(format!("unknown dasha level '{s}'"))),
        }
    }
}

/// How sub-periods of a partial period are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartialPeriodPolicy {
    /// Children divide the actual (possibly partial) parent span in the
    /// 120-year proportions, starting from the parent's ruler.
    #[default]
    Proportional,
    /// Children keep the sub-periods of the parent's full natural span and
    /// are clipped to the part inside the timeline.
    Clipped,
}

impl PartialPeriodPolicy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Proportional => "proportional",
            Self::Clipped => "clipped",
        }
    }
}

impl FromStr for PartialPeriodPolicy {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "proportional" => Ok(Self::Proportional),
            "clipped" | "traditional" => Ok(Self::Clipped),
            _ => Err(VedicError::InvalidInput(format!(
                "unknown partial-period policy '{s}'"
            ))),
        }
    }
}

/// Which point seeded the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedKind {
    Moon,
    InduLagna,
}

impl SeedKind {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Moon => "moon",
            Self::InduLagna => "indu_lagna",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Moon => "Moon",
            Self::InduLagna => "Indu Lagna",
        }
    }
}

/// A single dasha period and its sub-periods.
///
/// Offsets are fractional years from birth; JDs are derived from them as
/// `birth_jd + years * DAYS_PER_YEAR`.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaPeriod {
    pub ruler: Graha,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    pub start_years: f64,
    pub end_years: f64,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Start of the span this period would have without clipping at birth
    /// or at the 120-year cap. Equal to `start_years` when not clipped.
    pub natural_start_years: f64,
    /// Length of the unclipped span.
    pub natural_years: f64,
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    pub(crate) fn new(
        ruler: Graha,
        level: DashaLevel,
        order: u16,
        start_years: f64,
        end_years: f64,
        birth_jd: f64,
    ) -> Self {
        Self {
            ruler,
            level,
            order,
            start_years,
            end_years,
            start_jd: birth_jd + start_years * DAYS_PER_YEAR,
            end_jd: birth_jd + end_years * DAYS_PER_YEAR,
            natural_start_years: start_years,
            natural_years: end_years - start_years,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_natural_span(mut self, start_years: f64, years: f64) -> Self {
        self.natural_start_years = start_years;
        self.natural_years = years;
        self
    }

    pub(crate) fn set_start(&mut self, start_years: f64, birth_jd: f64) {
        self.start_years = start_years;
        self.start_jd = birth_jd + start_years * DAYS_PER_YEAR;
    }

    pub(crate) fn set_end(&mut self, end_years: f64, birth_jd: f64) {
        self.end_years = end_years;
        self.end_jd = birth_jd + end_years * DAYS_PER_YEAR;
    }

    pub fn duration_years(&self) -> f64 {
        self.end_years - self.start_years
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Half-open containment: `start_jd <= jd < end_jd`.
    pub fn contains_jd(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    /// Number of periods in this subtree, including itself.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(DashaPeriod::subtree_len).sum::<usize>()
    }
}

/// A full 120-year Vimshottari timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Birth JD UTC.
    pub birth_jd: f64,
    /// Ruler of the birth segment (first Mahadasha).
    pub ruler: Graha,
    /// Fraction of the birth segment already traversed.
    pub elapsed_fraction: f64,
    /// Length of the first (partial) Mahadasha in years.
    pub balance_years: f64,
    pub depth: DashaLevel,
    pub policy: PartialPeriodPolicy,
    pub periods: Vec<DashaPeriod>,
}

impl Timeline {
    pub fn total_years(&self) -> f64 {
        self.periods.iter().map(DashaPeriod::duration_years).sum()
    }

    pub fn period_count(&self) -> usize {
        self.periods.iter().map(DashaPeriod::subtree_len).sum()
    }
}

/// A timeline together with the longitude and nakshatra that seeded it.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaChart {
    pub seed: SeedKind,
    /// Sidereal longitude of the seed point, degrees.
    pub longitude: f64,
    pub position: NakshatraPosition,
    pub timeline: Timeline,
}

/// Active periods at a specific date, outermost first.
#[derive(Debug, Clone)]
pub struct DashaSnapshot<'a> {
    pub query_jd: f64,
    pub periods: Vec<&'a DashaPeriod>,
}

impl DashaSnapshot<'_> {
    /// False when the query date lies outside the 120-year window.
    pub fn is_active(&self) -> bool {
        !self.periods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_u8_roundtrip() {
        for v in 0..=MAX_DASHA_LEVEL {
            assert_eq!(DashaLevel::from_u8(v).map(|l| l as u8), Some(v));
        }
        assert_eq!(DashaLevel::from_u8(5), None);
    }

    #[test]
    fn level_parse_aliases() {
        assert_eq!("bhukti".parse::<DashaLevel>().unwrap(), DashaLevel::Antardasha);
        assert_eq!("Mahadasha".parse::<DashaLevel>().unwrap(), DashaLevel::Mahadasha);
        assert_eq!("4".parse::<DashaLevel>().unwrap(), DashaLevel::Pranadasha);
        assert!("yogini".parse::<DashaLevel>().is_err());
    }

    #[test]
    fn child_level_chain_ends_at_prana() {
        let mut level = DashaLevel::Mahadasha;
        let mut steps = 0;
        while let Some(next) = level.child_level() {
            level = next;
            steps += 1;
        }
        assert_eq!(level, DashaLevel::Pranadasha);
        assert_eq!(steps, MAX_DASHA_LEVEL);
    }

    #[test]
    fn policy_parse() {
        assert_eq!(
            "clipped".parse::<PartialPeriodPolicy>().unwrap(),
            PartialPeriodPolicy::Clipped
        );
        assert_eq!(PartialPeriodPolicy::default(), PartialPeriodPolicy::Proportional);
        assert!("equal".parse::<PartialPeriodPolicy>().is_err());
    }

    #[test]
    fn period_jd_derived_from_years() {
        let p = DashaPeriod::new(Graha::Ketu, DashaLevel::Mahadasha, 1, 0.0, 7.0, 2_451_545.0);
        assert_eq!(p.start_jd, 2_451_545.0);
        assert_eq!(p.duration_days(), 7.0 * DAYS_PER_YEAR);
        assert!(p.contains_jd(2_451_545.0));
        assert!(!p.contains_jd(p.end_jd));
    }
}
