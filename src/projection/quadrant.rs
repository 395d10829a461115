//! Quadrant inverse: the chart's original pixel → sky reconstruction.
//!
//! The hour wedge is found first by locating `(x, y)` in one of four
//! quadrants and taking `atan` of the coordinate ratio plus a quadrant offset,
//! which yields an angle in `[0, 2π)` measured clockwise from +Y. Declination
//! is then read off as `π − acos(x / sin(ra − ra_center))`.
//!
//! This is not the analytic inverse of the forward transform. For the
//! conventional pole center the declination comes back exactly
//! (`acos(ρ)` for plane radius `ρ`) but the recovered RA angle is `2π − a`
//! for an input angle `a`, i.e. RA is mirrored to `24 − ra`. Re-projecting an
//! inverse result therefore lands on the horizontally mirrored pixel; the
//! error grows linearly with horizontal distance from the center. Use
//! [`super::orthographic`] when an exact inverse is needed.

use std::f64::consts::{FRAC_PI_2, PI};

/// Below this, `sin(ra − ra_center)` on the center column is treated as zero.
const SIN_ZERO_TOLERANCE: f64 = 1e-12;

/// Recover `(ra_angle, dec_angle)` in radians from normalized plane coordinates.
///
/// `x_norm == 0` is nudged by `f64::EPSILON` so the quadrant ratios stay
/// finite. The nudge is below the resolution of `ra − ra_center`, so on the
/// center column the declination ratio is taken as its limit instead (see
/// `center_column_ratio`). Points outside the unit disk produce a NaN
/// declination.
pub fn invert(x_norm: f64, y_norm: f64, center_ra: f64) -> (f64, f64) {
    let mut x = x_norm;
    let y = y_norm;
    if x == 0.0 {
        x += f64::EPSILON;
    }

    let ra = if x > 0.0 && y > 0.0 {
        (x / y).atan()
    } else if x > 0.0 && y <= 0.0 {
        (y / x).abs().atan() + FRAC_PI_2
    } else if x <= 0.0 && y <= 0.0 {
        (x / y).atan() + PI
    } else {
        (y / x).abs().atan() + 3.0 * FRAC_PI_2
    };

    let ratio = if x_norm == 0.0 && y != 0.0 {
        center_column_ratio(y, center_ra)
    } else {
        x / (ra - center_ra).sin()
    };
    let dec = PI - ratio.acos();
    (ra, dec)
}

/// Limit of `x / sin(ra − ra_center)` as `x → 0` with `y ≠ 0`.
///
/// Along the column the wedge angle tends to `0` (y > 0) or `π` (y < 0) with
/// slope `1/y`. When the sine vanishes there the ratio tends to
/// `y / cos(ra₀ − ra_center)`, which is `−|y|` for the pole center;
/// otherwise it tends to zero.
fn center_column_ratio(y: f64, center_ra: f64) -> f64 {
    let ra0 = if y > 0.0 { 0.0 } else { PI };
    let delta = ra0 - center_ra;
    if delta.sin().abs() < SIN_ZERO_TOLERANCE {
        y / delta.cos()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_ranges() {
        let cases = [
            ((0.3, 0.4), 0.0, FRAC_PI_2),
            ((0.3, -0.4), FRAC_PI_2, PI),
            ((-0.3, -0.4), PI, 3.0 * FRAC_PI_2),
            ((-0.3, 0.4), 3.0 * FRAC_PI_2, 2.0 * PI),
        ];
        for ((x, y), lo, hi) in cases {
            let (ra, _) = invert(x, y, PI);
            assert!(
                ra >= lo && ra < hi,
                "({}, {}): angle {} not in [{}, {})",
                x,
                y,
                ra,
                lo,
                hi
            );
        }
    }

    #[test]
    fn test_zero_x_at_center_is_finite() {
        for x in [0.0, -0.0] {
            let (ra, dec) = invert(x, 0.0, PI);
            assert!(ra.is_finite() && dec.is_finite(), "x = {}: ({}, {})", x, ra, dec);
            assert!((dec - FRAC_PI_2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_x_column_matches_radius() {
        // Every row of the 500 px chart's center column except the center itself
        for row in 1..500 {
            if row == 250 {
                continue;
            }
            let y = (row as f64 - 250.0) / 250.0;
            for x in [0.0, -0.0] {
                let (ra, dec) = invert(x, y, PI);
                let expected = y.abs().acos();
                assert!(ra.is_finite(), "row {}: ra {}", row, ra);
                assert!(
                    (dec - expected).abs() < 1e-9,
                    "row {}: dec {} expected {}",
                    row,
                    dec,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_zero_x_column_off_pole_center() {
        // sin(ra₀ − ra_center) does not vanish, so the ratio tends to zero
        let (_, dec) = invert(0.0, 0.4, 2.0);
        assert!((dec - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_declination_is_acos_of_radius() {
        // For a pole center (ra_center = π) the declination depends only on radius
        for &(x, y) in &[(0.1, 0.2), (-0.5, 0.3), (0.6, -0.6), (-0.2, -0.1)] {
            let (_, dec) = invert(x, y, PI);
            let expected = f64::hypot(x, y).acos();
            assert!(
                (dec - expected).abs() < 1e-9,
                "({}, {}): dec {} expected {}",
                x,
                y,
                dec,
                expected
            );
        }
    }

    #[test]
    fn test_outside_disk_is_nan() {
        let (_, dec) = invert(0.9, 0.9, PI);
        assert!(dec.is_nan());
    }
}
