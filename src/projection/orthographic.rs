//! Closed-form orthographic inverse.
//!
//! The forward transform reads the plane coordinates off a sky unit vector `s`
//! as dot products with the center's local east and north directions:
//!
//! ```text
//! x = s · east,   y = s · north
//! ```
//!
//! With the center direction as third axis these form an orthonormal basis, so
//! the visible-hemisphere inverse is
//!
//! ```text
//! s = x · east + y · north + sqrt(1 − x² − y²) · center
//! ```
//!
//! Plane points with `x² + y² > 1` have no preimage and are projected onto the rim.

use crate::{Matrix3, Vector3};

/// Orthonormal basis of the tangent frame at the projection center.
///
/// Columns are `[east, north, center]` expressed in equatorial coordinates,
/// using the chart's RA angle convention (see [`crate::angles::ra_to_angle`]).
pub fn tangent_basis(center_ra: f64, center_dec: f64) -> Matrix3 {
    let (sin_ra, cos_ra) = center_ra.sin_cos();
    let (sin_dec, cos_dec) = center_dec.sin_cos();
    let east = Vector3::new(-sin_ra, cos_ra, 0.0);
    let north = Vector3::new(-sin_dec * cos_ra, -sin_dec * sin_ra, cos_dec);
    let center = Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec);
    Matrix3::from_columns(&[east, north, center])
}

/// Unit vector for an `(ra_angle, dec_angle)` pair in radians.
pub fn angles_to_uvec(ra: f64, dec: f64) -> Vector3 {
    let (sin_ra, cos_ra) = ra.sin_cos();
    let (sin_dec, cos_dec) = dec.sin_cos();
    Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec)
}

/// Recover `(ra_angle, dec_angle)` in radians from normalized plane coordinates.
///
/// The RA angle is returned in `(-π, π]`.
pub fn invert(x_norm: f64, y_norm: f64, center_ra: f64, center_dec: f64) -> (f64, f64) {
    let rho2 = x_norm * x_norm + y_norm * y_norm;
    let (x, y, z) = if rho2 > 1.0 {
        let rho = rho2.sqrt();
        (x_norm / rho, y_norm / rho, 0.0)
    } else {
        (x_norm, y_norm, (1.0 - rho2).sqrt())
    };

    let s = tangent_basis(center_ra, center_dec) * Vector3::new(x, y, z);
    let dec = s.z.clamp(-1.0, 1.0).asin();
    let ra = s.y.atan2(s.x);
    (ra, dec)
}
