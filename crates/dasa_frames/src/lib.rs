//! Reference-frame quantities used by the dasa engine.
//!
//! - IAU 2006 general precession in ecliptic longitude (ayanamsha drift)
//! - Delaunay fundamental arguments (lunar theory)
//! - Mean obliquity of the ecliptic (ascendant)

pub mod fundamental;
pub mod obliquity;
pub mod precession;

pub use fundamental::{DelaunayArguments, delaunay_arguments};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
