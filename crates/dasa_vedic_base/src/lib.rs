//! Vedic building blocks for the dasa engine.
//!
//! - Graha, rashi and nakshatra tables
//! - Ayanamsha (mean, IAU 2006 precession)
//! - Lagna and Indu Lagna
//! - Vimshottari dasha timelines (see [`dasha`])
//!
//! Everything here is pure math on longitudes and Julian Dates; the
//! ephemeris lives behind `dasa_core::Ephemeris`.

pub mod ayanamsha;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod special_lagna;
pub mod util;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_mean_deg};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, nth_lord_from, nth_rashi_from, rashi_lord};
pub use lagna::{MAX_LAGNA_LATITUDE_DEG, lagna_longitude_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, NAKSHATRA_SPAN_ARCSEC, Nakshatra, NakshatraPosition,
    PADA_SPAN, PADA_SPAN_ARCSEC, resolve_nakshatra,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use special_lagna::{InduLagna, indu_lagna, indu_lagna_from_longitudes};
pub use util::normalize_360;
