//! Indu Lagna, the kaksha-sum special ascendant.
//!
//! 1. Take the lord of the 9th sign from the Lagna and the lord of the 9th
//!    sign from the Moon.
//! 2. Sum their kaksha values; r = sum mod 12, with 0 read as 12.
//! 3. Indu Lagna is the r-th sign counted from the Moon's sign. The Moon's
//!    degree within its sign is carried over.

use crate::error::VedicError;
use crate::graha::{Graha, nth_lord_from};
use crate::rashi::rashi_from_longitude;
use crate::util::{check_longitude, normalize_360};

/// Indu Lagna longitude from the two ninth lords.
pub fn indu_lagna(moon_lon: f64, lagna_ninth_lord: Graha, moon_ninth_lord: Graha) -> f64 {
    let total = lagna_ninth_lord.kaksha_value() as u16 + moon_ninth_lord.kaksha_value() as u16;
    let signs = signs_from_moon(total);
    normalize_360(moon_lon + (signs as f64 - 1.0) * 30.0)
}

fn signs_from_moon(kaksha_sum: u16) -> u8 {
    match (kaksha_sum % 12) as u8 {
        0 => 12,
        r => r,
    }
}

/// Full Indu Lagna derivation, kept for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InduLagna {
    /// Sidereal longitude of the Indu Lagna, [0, 360).
    pub longitude: f64,
    /// Sidereal Moon and Lagna it was derived from.
    pub moon_longitude: f64,
    pub lagna_longitude: f64,
    pub lagna_ninth_lord: Graha,
    pub moon_ninth_lord: Graha,
    pub kaksha_sum: u16,
    /// Sign count from the Moon, 1..=12.
    pub signs_from_moon: u8,
}

/// Indu Lagna from sidereal Moon and Lagna longitudes.
pub fn indu_lagna_from_longitudes(moon_lon: f64, lagna_lon: f64) -> Result<InduLagna, VedicError> {
    let moon_lon = check_longitude(moon_lon)?;
    let lagna_lon = check_longitude(lagna_lon)?;

    let lagna_ninth_lord = nth_lord_from(rashi_from_longitude(lagna_lon).rashi_index, 9);
    let moon_ninth_lord = nth_lord_from(rashi_from_longitude(moon_lon).rashi_index, 9);
    let kaksha_sum = lagna_ninth_lord.kaksha_value() as u16 + moon_ninth_lord.kaksha_value() as u16;

    Ok(InduLagna {
        longitude: indu_lagna(moon_lon, lagna_ninth_lord, moon_ninth_lord),
        moon_longitude: moon_lon,
        lagna_longitude: lagna_lon,
        lagna_ninth_lord,
        moon_ninth_lord,
        kaksha_sum,
        signs_from_moon: signs_from_moon(kaksha_sum),
    })
}
