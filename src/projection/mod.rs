//! Projection between celestial coordinates and chart pixels.
//!
//! A [`Projection`] is centered on a reference direction (conventionally the
//! north celestial pole, RA = 12h, Dec = 90°) and scaled so the unit disk
//! fills a square chart of `2 · scale` pixels.
//!
//! # Coordinate conventions
//!
//! - **Sky coordinates** [`RaDec`]: right ascension in hours, declination in degrees.
//! - **Normalized plane** `(x, y)`: orthographic plane coordinates in `[-1, 1]`,
//!   centered on the projection center.
//! - **Pixel coordinates** [`Pixel`]: origin at the chart's top-left corner,
//!   `pixel = norm · scale + scale`.
//!
//! # Pipeline
//!
//! ```text
//! RA/Dec → radians → orthographic plane → scale and offset → pixel
//! pixel → recenter → inverse policy → hours/degrees → hemisphere sign → RA/Dec
//! ```
//!
//! The inverse step is pluggable, see [`InversePolicy`].

pub mod orthographic;
pub mod quadrant;

use tracing::debug;

use crate::angles::{angle_to_dec, angle_to_ra, dec_to_angle, ra_to_angle};

/// A direction on the sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaDec {
    /// Right ascension in decimal hours, nominally `[0, 24)`.
    pub ra: f64,
    /// Declination in decimal degrees, nominally `[-90, 90]`.
    pub dec: f64,
}

impl RaDec {
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// The north celestial pole as seen by the default chart (RA = 12h, Dec = 90°).
    pub fn north_pole() -> Self {
        Self::new(12.0, 90.0)
    }
}

/// A position on a chart, in pixels. +X right, +Y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another pixel.
    pub fn distance(&self, other: &Pixel) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Which of the two charts a point lives on.
///
/// Both charts share one projection; the south chart shows the mirrored
/// hemisphere, so its inverse results have their declination negated. The flag
/// is always explicit and never derived from pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

impl Hemisphere {
    /// Both hemispheres, north first.
    pub const ALL: [Hemisphere; 2] = [Hemisphere::North, Hemisphere::South];

    /// Position in [`Hemisphere::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Hemisphere::North => 0,
            Hemisphere::South => 1,
        }
    }

    /// One-letter label used in element ids.
    pub fn label(&self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
        }
    }

    pub fn is_south(&self) -> bool {
        matches!(self, Hemisphere::South)
    }

    /// Hemisphere of a declination; the equator counts as north.
    pub fn of_declination(dec_deg: f64) -> Self {
        if dec_deg < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }
}

/// How pixel coordinates are turned back into sky coordinates.
///
/// Both policies return north-hemisphere declinations for the conventional pole
/// center; [`Projection::pixel_to_sky`] applies the hemisphere sign afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InversePolicy {
    /// Quadrant-by-quadrant `atan` reconstruction with an `acos` declination.
    ///
    /// Total over its input, but only an approximate inverse of the forward
    /// transform: for a pole center it recovers declination while mirroring
    /// right ascension (`24 − ra`). See [`quadrant`].
    #[default]
    Quadrant,
    /// Closed-form orthographic inverse through the center's tangent basis.
    ///
    /// Exact round trip with [`Projection::sky_to_pixel`] inside the sky disk.
    /// See [`orthographic`].
    Orthographic,
}

impl InversePolicy {
    /// Recover `(ra_angle, dec_angle)` in radians from normalized plane coordinates.
    pub fn invert(&self, x_norm: f64, y_norm: f64, center_ra: f64, center_dec: f64) -> (f64, f64) {
        match self {
            InversePolicy::Quadrant => quadrant::invert(x_norm, y_norm, center_ra),
            InversePolicy::Orthographic => {
                orthographic::invert(x_norm, y_norm, center_ra, center_dec)
            }
        }
    }
}

/// Forward and inverse mapping for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: RaDec,
    scale: f64,
    inverse: InversePolicy,
}

impl Projection {
    /// Create a projection around `center` with `scale` pixels per unit plane distance.
    ///
    /// Uses the default [`InversePolicy::Quadrant`] inverse.
    pub fn new(center: RaDec, scale: f64) -> Self {
        Self {
            center,
            scale,
            inverse: InversePolicy::default(),
        }
    }

    /// Create a projection filling a square chart of `resolution` pixels.
    pub fn from_resolution(resolution: u32, center: RaDec) -> Self {
        Self::new(center, resolution as f64 / 2.0)
    }

    /// Replace the inverse policy.
    pub fn with_inverse_policy(mut self, inverse: InversePolicy) -> Self {
        self.inverse = inverse;
        self
    }

    pub fn center(&self) -> RaDec {
        self.center
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn inverse_policy(&self) -> InversePolicy {
        self.inverse
    }

    /// Pixel position of the projection center. Always `(scale, scale)`.
    pub fn center_pixel(&self) -> Pixel {
        self.sky_to_pixel(self.center)
    }

    /// Project sky coordinates onto the normalized orthographic plane.
    pub fn sky_to_plane(&self, sky: RaDec) -> (f64, f64) {
        let ra = ra_to_angle(sky.ra);
        let dec = dec_to_angle(sky.dec);
        let center_ra = ra_to_angle(self.center.ra);
        let center_dec = dec_to_angle(self.center.dec);

        // Orthographic projection, see projectpluto.com/project.htm
        let delta_ra = ra - center_ra;
        let x = dec.cos() * delta_ra.sin();
        let y = dec.sin() * center_dec.cos() - dec.cos() * delta_ra.cos() * center_dec.sin();
        (x, y)
    }

    /// Forward transform: sky coordinates to chart pixels.
    pub fn sky_to_pixel(&self, sky: RaDec) -> Pixel {
        let (x, y) = self.sky_to_plane(sky);
        Pixel::new(self.scale_and_offset(x), self.scale_and_offset(y))
    }

    /// Inverse transform: chart pixels to sky coordinates.
    ///
    /// Never fails. Results for pixels outside the sky disk depend on the
    /// policy: the quadrant policy yields NaN declinations there, the
    /// orthographic policy snaps to the rim.
    pub fn pixel_to_sky(&self, pixel: Pixel, hemisphere: Hemisphere) -> RaDec {
        let x = self.recenter(pixel.x);
        let y = self.recenter(pixel.y);
        let center_ra = ra_to_angle(self.center.ra);
        let center_dec = dec_to_angle(self.center.dec);

        let (ra_angle, dec_angle) = self.inverse.invert(x, y, center_ra, center_dec);

        let mut ra = angle_to_ra(ra_angle);
        if self.inverse == InversePolicy::Orthographic {
            ra = ra.rem_euclid(24.0);
        }
        let mut dec = angle_to_dec(dec_angle);
        if hemisphere.is_south() {
            dec = -dec;
        }
        debug!(
            x = pixel.x,
            y = pixel.y,
            ra,
            dec,
            policy = ?self.inverse,
            "inverse projection"
        );
        RaDec::new(ra, dec)
    }

    fn scale_and_offset(&self, norm: f64) -> f64 {
        norm * self.scale + self.scale
    }

    fn recenter(&self, pixel: f64) -> f64 {
        (pixel - self.scale) / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_scale() {
        for &scale in &[1.0, 100.0, 250.0, 333.3, 1024.0] {
            let proj = Projection::new(RaDec::north_pole(), scale);
            let px = proj.center_pixel();
            assert_eq!(px, Pixel::new(scale, scale), "scale {}", scale);
        }
    }

    #[test]
    fn test_center_maps_to_scale_off_pole() {
        let proj = Projection::new(RaDec::new(5.5, 20.0), 300.0);
        let px = proj.center_pixel();
        assert!(
            (px.x - 300.0).abs() < 1e-12 && (px.y - 300.0).abs() < 1e-12,
            "center pixel: got ({}, {})",
            px.x,
            px.y
        );
    }

    #[test]
    fn test_equator_lands_on_rim() {
        let proj = Projection::from_resolution(500, RaDec::north_pole());
        for h in 0..24 {
            let px = proj.sky_to_pixel(RaDec::new(h as f64, 0.0));
            let r = px.distance(&proj.center_pixel());
            assert!((r - 250.0).abs() < 1e-9, "RA {}h: radius {}", h, r);
        }
    }

    #[test]
    fn test_known_pixels() {
        let proj = Projection::from_resolution(500, RaDec::north_pole());
        // 12h points straight up, 0h straight down, 18h left, 6h right
        let up = proj.sky_to_pixel(RaDec::new(12.0, 0.0));
        let down = proj.sky_to_pixel(RaDec::new(0.0, 0.0));
        let left = proj.sky_to_pixel(RaDec::new(18.0, 0.0));
        let right = proj.sky_to_pixel(RaDec::new(6.0, 0.0));
        assert!((up.x - 250.0).abs() < 1e-9 && up.y.abs() < 1e-9);
        assert!((down.x - 250.0).abs() < 1e-9 && (down.y - 500.0).abs() < 1e-9);
        assert!(left.x.abs() < 1e-9 && (left.y - 250.0).abs() < 1e-9);
        assert!((right.x - 500.0).abs() < 1e-9 && (right.y - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_pole_click_resolves_to_pole() {
        let proj = Projection::from_resolution(500, RaDec::north_pole());
        for policy in [InversePolicy::Quadrant, InversePolicy::Orthographic] {
            let proj = proj.with_inverse_policy(policy);
            let north = proj.pixel_to_sky(Pixel::new(250.0, 250.0), Hemisphere::North);
            let south = proj.pixel_to_sky(Pixel::new(250.0, 250.0), Hemisphere::South);
            // RA is degenerate at the pole; only declination is meaningful.
            assert!((north.dec - 90.0).abs() < 1e-6, "{:?}: {}", policy, north.dec);
            assert!((south.dec + 90.0).abs() < 1e-6, "{:?}: {}", policy, south.dec);
        }
    }

    #[test]
    fn test_south_flag_negates_declination() {
        let proj = Projection::from_resolution(500, RaDec::north_pole());
        let px = Pixel::new(310.0, 190.0);
        let n = proj.pixel_to_sky(px, Hemisphere::North);
        let s = proj.pixel_to_sky(px, Hemisphere::South);
        assert_eq!(n.ra, s.ra);
        assert_eq!(n.dec, -s.dec);
    }

    #[test]
    fn test_hemisphere_of_declination() {
        assert_eq!(Hemisphere::of_declination(12.0), Hemisphere::North);
        assert_eq!(Hemisphere::of_declination(0.0), Hemisphere::North);
        assert_eq!(Hemisphere::of_declination(-0.5), Hemisphere::South);
        assert_eq!(Hemisphere::South.label(), "S");
        for (i, h) in Hemisphere::ALL.into_iter().enumerate() {
            assert_eq!(h.index(), i);
        }
    }
}
