//! Birth balance: how much of the first Mahadasha remains at birth.

use super::vimshottari::{MIN_TAIL_YEARS, dasha_years};
use crate::error::VedicError;
use crate::graha::Graha;

/// Balance of the birth Mahadasha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    pub ruler: Graha,
    /// Full Vimshottari years of the ruler.
    pub full_years: f64,
    /// Fraction of the segment already traversed, [0, 1). Zero when the
    /// elapsed years fall below [`MIN_TAIL_YEARS`].
    pub elapsed_fraction: f64,
    /// `full_years * (1 - elapsed_fraction)`, in (0, full_years].
    pub balance_years: f64,
}

/// Balance from the position inside the birth segment.
///
/// `degree_into_segment` and `segment_width` only need to share a unit.
pub fn birth_balance(
    ruler: Graha,
    degree_into_segment: f64,
    segment_width: f64,
) -> Result<BirthBalance, VedicError> {
    if !segment_width.is_finite() || segment_width <= 0.0 {
        return Err(VedicError::InvalidInput(format!(
            "segment width {segment_width} must be positive"
        )));
    }
    if !degree_into_segment.is_finite()
        || degree_into_segment < 0.0
        || degree_into_segment >= segment_width
    {
        return Err(VedicError::InvalidInput(format!(
            "degree into segment {degree_into_segment} outside [0, {segment_width})"
        )));
    }

    let full_years = dasha_years(ruler);
    let mut elapsed_fraction = degree_into_segment / segment_width;
    if full_years * elapsed_fraction < MIN_TAIL_YEARS {
        elapsed_fraction = 0.0;
    }
    let balance_years = full_years * (1.0 - elapsed_fraction);
    if balance_years <= 0.0 {
        return Err(VedicError::InvalidInput(format!(
            "degree into segment {degree_into_segment} leaves no balance"
        )));
    }

    Ok(BirthBalance {
        ruler,
        full_years,
        elapsed_fraction,
        balance_years,
    })
}
