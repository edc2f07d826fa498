//! Shared angle helpers.

use crate::error::VedicError;

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose sum with 360 rounds up to 360 map to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Reject non-finite longitudes and those outside [0, 360).
pub fn check_longitude(deg: f64) -> Result<f64, VedicError> {
    if deg.is_finite() && (0.0..360.0).contains(&deg) {
        Ok(deg)
    } else {
        Err(VedicError::InvalidInput(format!(
            "longitude {deg} outside [0, 360)"
        )))
    }
}
