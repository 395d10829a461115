//! # starchart
//!
//! Click-to-place star charts for the two celestial hemispheres.
//!
//! Two circular charts (north and south) are drawn around a projection center,
//! conventionally the north celestial pole at RA = 12h. Each click on a chart
//! becomes a star: the pixel position is turned into right ascension and
//! declination, the star gets an apparent magnitude based on how many stars
//! were placed before it, and it is stored in a catalog shared by both charts.
//! The catalog can be listed as table rows, exported as CSV, and both charts
//! can be exported as SVG.
//!
//! ## Example
//!
//! ```
//! use starchart::{ChartConfig, Hemisphere, StarMap};
//!
//! let mut map = StarMap::new(ChartConfig::default());
//!
//! // Clicks in pixel coordinates, origin at the chart's top-left corner
//! let polaris = map.click(Hemisphere::North, 250.0, 250.0);
//! let other = map.click(Hemisphere::South, 310.0, 180.0);
//!
//! let star = map.star(polaris).unwrap();
//! assert!((star.dec() - 90.0).abs() < 1e-6);
//!
//! map.delete(other);
//! let csv = map.csv().unwrap();
//! assert_eq!(csv.lines().count(), 1);
//! ```
//!
//! ## Projection
//!
//! The forward transform is an orthographic projection centered on the chart
//! center; declination circles come out concentric and hour lines radial. The
//! default inverse ([`InversePolicy::Quadrant`]) reconstructs the hour wedge
//! quadrant by quadrant and is deliberately kept approximate: it recovers
//! declination but mirrors right ascension. [`InversePolicy::Orthographic`] is
//! the exact closed-form alternative. See [`projection`] for details.
//!
//! ## Numbering
//!
//! [`StarId`]s are 0-based and stable: deleting a star leaves a hole rather than
//! renumbering later stars. The 1-based numbers shown to people come from
//! [`StarId::display_number`].

pub mod angles;
pub mod chart;
pub mod export;
pub mod magnitude;
pub mod projection;
pub mod star;
pub mod starcatalog;

pub use chart::{
    BackgroundLayout, Chart, ChartConfig, ChartStyle, RenderSurface, StarMap, SvgSurface,
};
#[cfg(feature = "image")]
pub use chart::RasterSurface;
pub use magnitude::{magnitude, MagnitudePolicy};
pub use projection::{Hemisphere, InversePolicy, Pixel, Projection, RaDec};
pub use star::*;
pub use starcatalog::*;

// Commonly used types
pub type Vector3 = nalgebra::Vector3<f64>;
pub type Matrix3 = nalgebra::Matrix3<f64>;
