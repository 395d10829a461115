//! Conversions between chart angle units and radians.
//!
//! Right ascension is carried in decimal hours and declination in decimal
//! degrees everywhere outside the projection math. The RA mapping runs
//! *backwards*: 0h maps to 2π and 24h maps to 0, so hour angles increase
//! clockwise on the chart.
//!
//! None of these functions validate their input; values outside the nominal
//! ranges simply produce values outside the nominal output ranges.

use std::f64::consts::PI;

/// Right ascension (hours) to an angle in radians: `2π(1 − ra/24)`.
pub fn ra_to_angle(ra_hours: f64) -> f64 {
    2.0 * PI * (1.0 - ra_hours / 24.0)
}

/// Inverse of [`ra_to_angle`]: `24 − 12·angle/π`.
pub fn angle_to_ra(angle_rad: f64) -> f64 {
    24.0 - 12.0 * angle_rad / PI
}

/// Declination (degrees) to radians.
pub fn dec_to_angle(dec_deg: f64) -> f64 {
    dec_deg * PI / 180.0
}

/// Radians to declination (degrees).
pub fn angle_to_dec(angle_rad: f64) -> f64 {
    angle_rad * 180.0 / PI
}
