//! Reference grid geometry for a hemisphere chart.
//!
//! The grid is derived entirely from the chart's [`Projection`]:
//!
//! - **Declination circles** every 15° from the equator up to (but excluding)
//!   the pole. The radius of each circle is the vertical pixel distance between
//!   the center and a point at the center's RA on that declination.
//! - **Right-ascension chords** for hours 0..12, each joining the equator
//!   points at `h` and `h + 12` across the chart.
//! - The filled **sky disk** behind both.

use crate::projection::{Pixel, Projection, RaDec};

/// Spacing between declination circles, degrees.
pub const DECLINATION_STEP_DEG: u32 = 15;
/// Declination circles are drawn strictly below this value, degrees.
pub const DECLINATION_LIMIT_DEG: u32 = 90;
/// Number of chords; each spans `h` and `h + 12`.
pub const RIGHT_ASCENSION_LINES: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclinationCircle {
    pub dec_deg: f64,
    pub center: Pixel,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightAscensionLine {
    /// Hour of the `start` endpoint; `end` is at `ra_hours + 12`.
    pub ra_hours: f64,
    pub start: Pixel,
    pub end: Pixel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayout {
    /// Center of the sky disk, `(resolution / 2, resolution / 2)`.
    pub sky_center: Pixel,
    pub sky_radius: f64,
    pub declination_circles: Vec<DeclinationCircle>,
    pub ra_lines: Vec<RightAscensionLine>,
}

impl BackgroundLayout {
    pub fn compute(resolution: u32, projection: &Projection) -> Self {
        let half = resolution as f64 / 2.0;
        let sky_center = Pixel::new(half, half);
        let center = projection.center();
        let center_px = projection.center_pixel();

        let declination_circles = (0..DECLINATION_LIMIT_DEG)
            .step_by(DECLINATION_STEP_DEG as usize)
            .map(|dec| {
                let dec = dec as f64;
                let p = projection.sky_to_pixel(RaDec::new(center.ra, dec));
                DeclinationCircle {
                    dec_deg: dec,
                    center: sky_center,
                    radius: (p.y - center_px.y).abs(),
                }
            })
            .collect();

        let ra_lines = (0..RIGHT_ASCENSION_LINES)
            .map(|h| {
                let h = h as f64;
                RightAscensionLine {
                    ra_hours: h,
                    start: projection.sky_to_pixel(RaDec::new(h, 0.0)),
                    end: projection.sky_to_pixel(RaDec::new(h + 12.0, 0.0)),
                }
            })
            .collect();

        Self {
            sky_center,
            sky_radius: half,
            declination_circles,
            ra_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_500() -> BackgroundLayout {
        let proj = Projection::from_resolution(500, RaDec::north_pole());
        BackgroundLayout::compute(500, &proj)
    }

    #[test]
    fn test_grid_counts() {
        let layout = layout_500();
        assert_eq!(layout.declination_circles.len(), 6);
        assert_eq!(layout.ra_lines.len(), 12);
        let decs: Vec<f64> = layout.declination_circles.iter().map(|c| c.dec_deg).collect();
        assert_eq!(decs, vec![0.0, 15.0, 30.0, 45.0, 60.0, 75.0]);
    }

    #[test]
    fn test_declination_radii_follow_cosine() {
        let layout = layout_500();
        for c in &layout.declination_circles {
            let expected = 250.0 * c.dec_deg.to_radians().cos();
            assert!(
                (c.radius - expected).abs() < 1e-9,
                "dec {}: radius {} expected {}",
                c.dec_deg,
                c.radius,
                expected
            );
        }
        // Radii shrink toward the pole
        for pair in layout.declination_circles.windows(2) {
            assert!(pair[1].radius < pair[0].radius);
        }
    }

    #[test]
    fn test_ra_chords_are_diameters() {
        let layout = layout_500();
        let center = Pixel::new(250.0, 250.0);
        for line in &layout.ra_lines {
            assert!((line.start.distance(&line.end) - 500.0).abs() < 1e-9);
            let mid = Pixel::new(
                (line.start.x + line.end.x) / 2.0,
                (line.start.y + line.end.y) / 2.0,
            );
            assert!(mid.distance(&center) < 1e-9, "chord {}h off center", line.ra_hours);
        }
    }

    #[test]
    fn test_sky_disk() {
        let layout = layout_500();
        assert_eq!(layout.sky_center, Pixel::new(250.0, 250.0));
        assert_eq!(layout.sky_radius, 250.0);
    }
}
