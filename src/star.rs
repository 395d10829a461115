use rand::RngExt;
use tracing::warn;

use crate::magnitude::MagnitudePolicy;
use crate::projection::{Hemisphere, Pixel, Projection, RaDec};

/// Which half of a [`StarPoint`] was the source of truth at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarOrigin {
    /// Built from RA/Dec; the pixel position was derived by the forward transform.
    Sky,
    /// Built from a click on the given chart; RA/Dec were derived by the inverse transform.
    Screen(Hemisphere),
}

/// A placed star: sky position, chart position and apparent magnitude.
///
/// Both coordinate representations are materialized when the point is built
/// and cannot be changed afterwards. The magnitude starts unset and can be
/// assigned exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPoint {
    sky: RaDec,
    pixel: Pixel,
    mag: Option<f64>,
    origin: StarOrigin,
    hemisphere: Hemisphere,
}

impl StarPoint {
    /// Build a star from sky coordinates, deriving its pixel position.
    ///
    /// The hemisphere follows the sign of the declination.
    pub fn from_sky(ra: f64, dec: f64, projection: &Projection) -> Self {
        let sky = RaDec::new(ra, dec);
        Self {
            sky,
            pixel: projection.sky_to_pixel(sky),
            mag: None,
            origin: StarOrigin::Sky,
            hemisphere: Hemisphere::of_declination(dec),
        }
    }

    /// Build a star from a click on a chart, deriving its sky position.
    pub fn from_screen(x: f64, y: f64, projection: &Projection, hemisphere: Hemisphere) -> Self {
        let pixel = Pixel::new(x, y);
        Self {
            sky: projection.pixel_to_sky(pixel, hemisphere),
            pixel,
            mag: None,
            origin: StarOrigin::Screen(hemisphere),
            hemisphere,
        }
    }

    /// The projection center as a point. Its pixel position is `(scale, scale)`.
    pub fn center_of(projection: &Projection) -> Self {
        let center = projection.center();
        Self::from_sky(center.ra, center.dec, projection)
    }

    /// Set the magnitude from the number of stars placed before this one.
    ///
    /// Only the first call assigns; later calls keep and return the existing value.
    pub fn assign_magnitude<R: RngExt>(
        &mut self,
        ordinal: usize,
        policy: &MagnitudePolicy,
        rng: &mut R,
    ) -> f64 {
        if let Some(mag) = self.mag {
            warn!(ordinal, mag, "magnitude already assigned; keeping it");
            return mag;
        }
        let mag = policy.magnitude_with(ordinal, rng);
        self.mag = Some(mag);
        mag
    }

    /// Right ascension in hours.
    pub fn ra(&self) -> f64 {
        self.sky.ra
    }

    /// Declination in degrees.
    pub fn dec(&self) -> f64 {
        self.sky.dec
    }

    pub fn x(&self) -> f64 {
        self.pixel.x
    }

    pub fn y(&self) -> f64 {
        self.pixel.y
    }

    pub fn sky(&self) -> RaDec {
        self.sky
    }

    pub fn pixel(&self) -> Pixel {
        self.pixel
    }

    /// Apparent magnitude, if assigned.
    pub fn mag(&self) -> Option<f64> {
        self.mag
    }

    pub fn origin(&self) -> StarOrigin {
        self.origin
    }

    /// The chart this star is drawn on.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
}
