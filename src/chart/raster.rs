//! Raster render surface backed by an `image::RgbaImage`.
//!
//! Shapes are rasterized without antialiasing: a pixel is painted when its
//! center falls inside the shape. Strokes thinner than one pixel are widened
//! to one pixel so the grid stays visible.

use anyhow::Context;
use image::{Rgba, RgbaImage};

use super::render::RenderSurface;
use crate::projection::Pixel;

#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Transparent square canvas of `resolution` pixels.
    pub fn new(resolution: u32) -> Self {
        Self {
            image: RgbaImage::new(resolution, resolution),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        self.image
            .save_with_format(path.as_ref(), image::ImageFormat::Png)
            .with_context(|| format!("writing {}", path.as_ref().display()))
    }

    /// Paint every pixel whose center satisfies `inside`, within a bounding box.
    fn paint_where<F>(&mut self, min: Pixel, max: Pixel, color: Rgba<u8>, inside: F)
    where
        F: Fn(f64, f64) -> bool,
    {
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return;
        }
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(w - 1);
        let y1 = (max.y.ceil().max(0.0) as u32).min(h - 1);
        for py in y0..=y1 {
            for px in x0..=x1 {
                if inside(px as f64 + 0.5, py as f64 + 0.5) {
                    self.image.put_pixel(px, py, color);
                }
            }
        }
    }
}

/// Parse `#rrggbb` into an opaque color.
pub fn parse_hex_color(color: &str) -> anyhow::Result<Rgba<u8>> {
    let hex = color
        .strip_prefix('#')
        .with_context(|| format!("color {:?} does not start with '#'", color))?;
    anyhow::ensure!(hex.len() == 6 && hex.is_ascii(), "color {:?} is not #rrggbb", color);
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .with_context(|| format!("invalid hex digits in color {:?}", color))
    };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}

impl RenderSurface for RasterSurface {
    fn fill_circle(
        &mut self,
        _id: &str,
        center: Pixel,
        radius: f64,
        color: &str,
    ) -> anyhow::Result<()> {
        let rgba = parse_hex_color(color)?;
        let r2 = radius * radius;
        self.paint_where(
            Pixel::new(center.x - radius, center.y - radius),
            Pixel::new(center.x + radius, center.y + radius),
            rgba,
            |x, y| (x - center.x).powi(2) + (y - center.y).powi(2) <= r2,
        );
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        _id: &str,
        center: Pixel,
        radius: f64,
        color: &str,
        stroke_width: f64,
    ) -> anyhow::Result<()> {
        let rgba = parse_hex_color(color)?;
        let half = (stroke_width / 2.0).max(0.5);
        let outer = radius + half;
        self.paint_where(
            Pixel::new(center.x - outer, center.y - outer),
            Pixel::new(center.x + outer, center.y + outer),
            rgba,
            |x, y| ((x - center.x).hypot(y - center.y) - radius).abs() <= half,
        );
        Ok(())
    }

    fn line(
        &mut self,
        start: Pixel,
        end: Pixel,
        color: &str,
        stroke_width: f64,
    ) -> anyhow::Result<()> {
        let rgba = parse_hex_color(color)?;
        let half = (stroke_width / 2.0).max(0.5);
        let (dx, dy) = (end.x - start.x, end.y - start.y);
        let len2 = dx * dx + dy * dy;
        self.paint_where(
            Pixel::new(start.x.min(end.x) - half, start.y.min(end.y) - half),
            Pixel::new(start.x.max(end.x) + half, start.y.max(end.y) + half),
            rgba,
            |x, y| {
                // Distance from the pixel center to the segment
                let t = if len2 > 0.0 {
                    (((x - start.x) * dx + (y - start.y) * dy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let (cx, cy) = (start.x + t * dx, start.y + t * dy);
                (x - cx).hypot(y - cy) <= half
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#0e0093").unwrap(), Rgba([0x0e, 0x00, 0x93, 255]));
        assert!(parse_hex_color("0e0093").is_err());
        assert!(parse_hex_color("#0e00").is_err());
        assert!(parse_hex_color("#zz0093").is_err());
    }

    #[test]
    fn test_fill_circle_paints_center_only() {
        let mut surface = RasterSurface::new(20);
        surface
            .fill_circle("c", Pixel::new(10.0, 10.0), 3.0, "#ffffff")
            .unwrap();
        let img = surface.image();
        assert_eq!(img.get_pixel(10, 10), &Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_line_and_stroke() {
        let mut surface = RasterSurface::new(20);
        surface
            .line(Pixel::new(0.0, 10.5), Pixel::new(20.0, 10.5), "#eeeeee", 0.25)
            .unwrap();
        surface
            .stroke_circle("s", Pixel::new(10.0, 10.0), 5.0, "#ff0000", 1.0)
            .unwrap();
        let img = surface.image();
        assert_eq!(img.get_pixel(3, 10), &Rgba([0xee, 0xee, 0xee, 255]));
        assert_eq!(img.get_pixel(10, 5), &Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(10, 2), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_bad_color_propagates() {
        let mut surface = RasterSurface::new(4);
        assert!(surface
            .fill_circle("c", Pixel::new(2.0, 2.0), 1.0, "white")
            .is_err());
    }
}
