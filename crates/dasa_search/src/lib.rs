//! Orchestration for the dasa engine: birth validation, sidereal positions
//! from an [`Ephemeris`](dasa_core::Ephemeris), and Moon- or
//! Indu-Lagna-seeded Vimshottari timelines.
//!
//! This crate provides:
//! - `BirthMoment`: validated birth date, time, offset and place
//! - Sidereal Moon and Lagna at birth
//! - `moon_dasha` / `indu_dasha` and their serializable report

pub mod birth;
pub mod dasha;
pub mod error;
pub mod position;

pub use birth::{
    BirthMoment, DEFAULT_TZ_OFFSET_HOURS, INVALID_COORDINATES, INVALID_DATE, INVALID_TIME,
    INVALID_TZ_OFFSET,
};
pub use dasha::{
    DashaRequest, InduDashaChart, dasha_report, indu_dasha, indu_lagna_for_birth, moon_dasha,
};
pub use error::SearchError;
pub use position::{MoonPosition, moon_position, resolve_moon_longitude, sidereal_lagna};
