//! Drawing charts onto a render surface.
//!
//! The chart code only produces coordinates and styling; a [`RenderSurface`]
//! turns them into pixels or markup. [`SvgSurface`] collects SVG elements whose
//! markup feeds the image export, and `RasterSurface` (feature `image`) paints
//! into an RGBA buffer.

use std::fmt::Write as _;

use crate::chart::background::BackgroundLayout;
use crate::chart::ChartStyle;
use crate::projection::{Hemisphere, Pixel};
use crate::{StarId, StarPoint};

/// Minimal 2D drawing interface needed to render a chart.
pub trait RenderSurface {
    /// Filled circle without outline.
    fn fill_circle(&mut self, id: &str, center: Pixel, radius: f64, color: &str)
        -> anyhow::Result<()>;

    /// Circle outline with no fill.
    fn stroke_circle(
        &mut self,
        id: &str,
        center: Pixel,
        radius: f64,
        color: &str,
        stroke_width: f64,
    ) -> anyhow::Result<()>;

    /// Straight line segment.
    fn line(&mut self, start: Pixel, end: Pixel, color: &str, stroke_width: f64)
        -> anyhow::Result<()>;
}

/// Drawn radius of a star: `(6 − mag)/7.5 + resolution · 0.01 / 2`.
///
/// Stars without a magnitude are drawn as if they had magnitude 6.
pub fn star_radius(mag: Option<f64>, resolution: u32) -> f64 {
    (6.0 - mag.unwrap_or(6.0)) / 7.5 + resolution as f64 * 0.01 / 2.0
}

/// Draw the sky disk, declination circles and right-ascension chords.
pub fn draw_background<S: RenderSurface + ?Sized>(
    surface: &mut S,
    layout: &BackgroundLayout,
    style: &ChartStyle,
    hemisphere: Hemisphere,
) -> anyhow::Result<()> {
    let tag = hemisphere.label();
    surface.fill_circle(
        &format!("sky{}", tag),
        layout.sky_center,
        layout.sky_radius,
        &style.sky_color,
    )?;

    for circle in &layout.declination_circles {
        surface.stroke_circle(
            &format!("{}{}", circle.dec_deg, tag),
            circle.center,
            circle.radius,
            &style.grid_color,
            style.grid_stroke_width,
        )?;
    }

    for line in &layout.ra_lines {
        surface.line(line.start, line.end, &style.grid_color, style.grid_stroke_width)?;
    }
    Ok(())
}

/// Draw one star, keyed by its display number.
pub fn draw_star<S: RenderSurface + ?Sized>(
    surface: &mut S,
    id: StarId,
    star: &StarPoint,
    resolution: u32,
    style: &ChartStyle,
    highlighted: bool,
) -> anyhow::Result<()> {
    let radius = star_radius(star.mag(), resolution);
    let key = id.to_string();
    surface.fill_circle(&key, star.pixel(), radius, &style.star_color)?;
    if highlighted {
        surface.stroke_circle(
            &format!("{}-highlight", key),
            star.pixel(),
            radius,
            &style.highlight_color,
            style.highlight_stroke_width,
        )?;
    }
    Ok(())
}

/// SVG element sink. Coordinates are written with Rust's shortest float formatting.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    resolution: u32,
    body: String,
}

impl SvgSurface {
    pub fn new(resolution: u32) -> Self {
        Self {
            resolution,
            body: String::new(),
        }
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Element markup drawn so far, without a root element.
    pub fn markup(&self) -> &str {
        &self.body
    }

    /// Standalone SVG document with explicit dimensions.
    pub fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{r}\" height=\"{r}\">{}</svg>",
            self.body,
            r = self.resolution
        )
    }
}

impl RenderSurface for SvgSurface {
    fn fill_circle(
        &mut self,
        id: &str,
        center: Pixel,
        radius: f64,
        color: &str,
    ) -> anyhow::Result<()> {
        write!(
            self.body,
            "<circle id=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"></circle>",
            id, center.x, center.y, radius, color
        )?;
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        id: &str,
        center: Pixel,
        radius: f64,
        color: &str,
        stroke_width: f64,
    ) -> anyhow::Result<()> {
        write!(
            self.body,
            "<circle id=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"></circle>",
            id, center.x, center.y, radius, color, stroke_width
        )?;
        Ok(())
    }

    fn line(
        &mut self,
        start: Pixel,
        end: Pixel,
        color: &str,
        stroke_width: f64,
    ) -> anyhow::Result<()> {
        write!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"></line>",
            start.x, start.y, end.x, end.y, color, stroke_width
        )?;
        Ok(())
    }
}
