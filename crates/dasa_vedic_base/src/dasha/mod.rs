//! Vimshottari dasha (planetary period) timelines.
//!
//! - [`vimshottari`]: ruler table and the 120-year generator
//! - [`balance`]: unexpired balance of the birth Mahadasha
//! - [`subperiod`]: Antardasha and deeper levels
//! - [`verify`]: invariant checks on generated trees
//! - [`query`]: active-period snapshots
//! - [`serialize`]: `serde` report for output

pub mod balance;
pub mod query;
pub mod serialize;
pub mod subperiod;
pub mod types;
pub mod verify;
pub mod vimshottari;

pub use balance::{BirthBalance, birth_balance};
pub use query::{find_active_period, snapshot};
pub use serialize::{PeriodReport, TimelineReport, serialize_timeline, to_json};
pub use subperiod::{attach_children, child_periods, snap_to_parent};
pub use types::{
    DAYS_PER_YEAR, DEFAULT_DASHA_LEVEL, DURATION_TOLERANCE_YEARS, DashaChart, DashaLevel,
    DashaPeriod, DashaSnapshot, MAX_DASHA_LEVEL, PartialPeriodPolicy, SeedKind, Timeline,
};
pub use verify::verify_timeline;
pub use vimshottari::{
    MIN_TAIL_YEARS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, dasha_years,
    generate_timeline, ruler_after, ruler_for_nakshatra, sequence_position,
    timeline_from_longitude, vimshottari_chart,
};
