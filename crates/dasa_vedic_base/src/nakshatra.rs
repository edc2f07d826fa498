//! Nakshatra (lunar mansion) resolution.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13°20′, each split
//! into 4 padas of 3°20′. The split is done in arcseconds (48 000″ per
//! nakshatra, 12 000″ per pada) with exact remainders, so a longitude
//! lying on a boundary always belongs to the segment that starts there.

use crate::dasha::vimshottari::ruler_for_nakshatra;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::check_longitude;

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 360/108 degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Span of one nakshatra in arcseconds.
pub const NAKSHATRA_SPAN_ARCSEC: f64 = 48_000.0;

/// Span of one pada in arcseconds.
pub const PADA_SPAN_ARCSEC: f64 = 12_000.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling graha in the Vimshottari scheme.
    pub const fn ruler(self) -> Graha {
        ruler_for_nakshatra(self.index())
    }
}

/// Result of resolving a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// Segment index, 0..=26.
    pub index: u8,
    /// Pada, 1..=4.
    pub pada: u8,
    pub ruler: Graha,
    /// Offset into the segment, arcseconds in [0, 48 000).
    pub arcsec_into_segment: f64,
    /// Offset into the segment, degrees in [0, 13°20′).
    pub degree_into_segment: f64,
    /// Offset into the pada, degrees in [0, 3°20′).
    pub degrees_in_pada: f64,
    /// Fraction of the segment already traversed, [0, 1).
    pub elapsed_fraction: f64,
}

/// Resolve a sidereal longitude in [0, 360) to its nakshatra, pada and ruler.
pub fn resolve_nakshatra(longitude: f64) -> Result<NakshatraPosition, VedicError> {
    let lon = check_longitude(longitude)?;
    let arcsec = lon * 3600.0;

    // `%` is exact for floats, so `arcsec - into` is an exact multiple of the span.
    let into = arcsec % NAKSHATRA_SPAN_ARCSEC;
    let index = ((arcsec - into) / NAKSHATRA_SPAN_ARCSEC).round();
    if !(0.0..27.0).contains(&index) {
        return Err(VedicError::InvalidInput(format!(
            "longitude {longitude} resolves outside the 27 nakshatras"
        )));
    }
    let index = index as u8;

    let into_pada = into % PADA_SPAN_ARCSEC;
    let pada = ((into - into_pada) / PADA_SPAN_ARCSEC).round() as u8 + 1;

    Ok(NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS[index as usize],
        index,
        pada,
        ruler: ruler_for_nakshatra(index),
        arcsec_into_segment: into,
        degree_into_segment: into / 3600.0,
        degrees_in_pada: into_pada / 3600.0,
        elapsed_fraction: into / NAKSHATRA_SPAN_ARCSEC,
    })
}
