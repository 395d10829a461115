//! Hemisphere charts and the two-chart star map session.
//!
//! A [`Chart`] is one clickable sky disk: a hemisphere flag, a projection and
//! the shared resolution. Charts never own stars; the [`Catalog`] is passed in
//! whenever a star is placed or drawn. [`StarMap`] bundles the north and south
//! charts with one shared catalog, so both charts draw ids from one index
//! space and every star remembers which chart it belongs to.
//!
//! All operations are synchronous. Catalog mutation goes through `&mut`, so a
//! host that shares a `StarMap` between threads has to put it behind a lock.

pub mod background;
#[cfg(feature = "image")]
pub mod raster;
pub mod render;

use rand::RngExt;
use tracing::{debug, info};

use crate::export;
use crate::magnitude::MagnitudePolicy;
use crate::projection::{Hemisphere, InversePolicy, Pixel, Projection, RaDec};
use crate::{Catalog, StarId, StarPoint, StarRow};

pub use background::{BackgroundLayout, DeclinationCircle, RightAscensionLine};
#[cfg(feature = "image")]
pub use raster::RasterSurface;
pub use render::{draw_background, draw_star, star_radius, RenderSurface, SvgSurface};

/// Colors and stroke widths used when drawing a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Fill of the sky disk. Default `#0e0093`.
    pub sky_color: String,
    /// Declination circles and RA chords. Default `#eeeeee`.
    pub grid_color: String,
    /// Default 0.25.
    pub grid_stroke_width: f64,
    /// Default `#ffffff`.
    pub star_color: String,
    /// Outline of selected stars. Default `#ff0000`.
    pub highlight_color: String,
    /// Default 2.
    pub highlight_stroke_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            sky_color: "#0e0093".to_string(),
            grid_color: "#eeeeee".to_string(),
            grid_stroke_width: 0.25,
            star_color: "#ffffff".to_string(),
            highlight_color: "#ff0000".to_string(),
            highlight_stroke_width: 2.0,
        }
    }
}

/// Parameters shared by both charts of a [`StarMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Width and height of each chart in pixels. Default 500.
    pub resolution: u32,
    /// Projection center. Default RA = 12h, Dec = 90° (north celestial pole).
    pub center: RaDec,
    /// Pixel → sky reconstruction. Default [`InversePolicy::Quadrant`].
    pub inverse_policy: InversePolicy,
    /// Magnitude curve for newly placed stars.
    pub magnitude: MagnitudePolicy,
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            resolution: 500,
            center: RaDec::north_pole(),
            inverse_policy: InversePolicy::default(),
            magnitude: MagnitudePolicy::default(),
            style: ChartStyle::default(),
        }
    }
}

impl ChartConfig {
    /// Projection scale, `resolution / 2`.
    pub fn scale(&self) -> f64 {
        self.resolution as f64 / 2.0
    }

    pub fn projection(&self) -> Projection {
        Projection::from_resolution(self.resolution, self.center)
            .with_inverse_policy(self.inverse_policy)
    }
}

/// One hemisphere chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    hemisphere: Hemisphere,
    projection: Projection,
    resolution: u32,
}

impl Chart {
    pub fn new(hemisphere: Hemisphere, config: &ChartConfig) -> Self {
        Self {
            hemisphere,
            projection: config.projection(),
            resolution: config.resolution,
        }
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The projection center as a star point, at `(scale, scale)`.
    pub fn center(&self) -> StarPoint {
        StarPoint::center_of(&self.projection)
    }

    /// Grid geometry for this chart.
    pub fn background(&self) -> BackgroundLayout {
        BackgroundLayout::compute(self.resolution, &self.projection)
    }

    /// Place a star where the chart was clicked.
    ///
    /// The magnitude is assigned from `catalog.next_ordinal()` before the star
    /// is appended.
    pub fn place_star<R: RngExt>(
        &self,
        catalog: &mut Catalog,
        click: Pixel,
        policy: &MagnitudePolicy,
        rng: &mut R,
    ) -> StarId {
        let mut star = StarPoint::from_screen(click.x, click.y, &self.projection, self.hemisphere);
        let ordinal = catalog.next_ordinal();
        let mag = star.assign_magnitude(ordinal, policy, rng);
        debug!(
            hemisphere = self.hemisphere.label(),
            x = click.x,
            y = click.y,
            ordinal,
            mag,
            "placing star"
        );
        catalog.add(star)
    }

    /// Draw the background and every present star that belongs to this chart.
    pub fn render<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        catalog: &Catalog,
        style: &ChartStyle,
        highlighted: &[StarId],
    ) -> anyhow::Result<()> {
        draw_background(surface, &self.background(), style, self.hemisphere)?;
        for (id, star) in catalog
            .entries()
            .filter(|(_, star)| star.hemisphere() == self.hemisphere)
        {
            draw_star(
                surface,
                id,
                star,
                self.resolution,
                style,
                highlighted.contains(&id),
            )?;
        }
        Ok(())
    }
}

/// North and south charts sharing one catalog.
#[derive(Debug, Clone)]
pub struct StarMap {
    config: ChartConfig,
    /// Indexed by [`Hemisphere::index`].
    charts: [Chart; 2],
    catalog: Catalog,
}

impl Default for StarMap {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl StarMap {
    pub fn new(config: ChartConfig) -> Self {
        info!(
            resolution = config.resolution,
            center_ra = config.center.ra,
            center_dec = config.center.dec,
            policy = ?config.inverse_policy,
            "star map created"
        );
        Self {
            charts: Hemisphere::ALL.map(|h| Chart::new(h, &config)),
            config,
            catalog: Catalog::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn chart(&self, hemisphere: Hemisphere) -> &Chart {
        &self.charts[hemisphere.index()]
    }

    /// Both charts, north first.
    pub fn charts(&self) -> &[Chart; 2] {
        &self.charts
    }

    /// Handle a click on one of the charts, jittering the magnitude with the thread rng.
    pub fn click(&mut self, hemisphere: Hemisphere, x: f64, y: f64) -> StarId {
        self.click_with_rng(hemisphere, x, y, &mut rand::rng())
    }

    pub fn click_with_rng<R: RngExt>(
        &mut self,
        hemisphere: Hemisphere,
        x: f64,
        y: f64,
        rng: &mut R,
    ) -> StarId {
        self.charts[hemisphere.index()].place_star(
            &mut self.catalog,
            Pixel::new(x, y),
            &self.config.magnitude,
            rng,
        )
    }

    /// Delete a star. Deleting an absent id is a no-op.
    pub fn delete(&mut self, id: StarId) -> Option<StarPoint> {
        self.catalog.remove(id)
    }

    pub fn star(&self, id: StarId) -> Option<&StarPoint> {
        self.catalog.get(id)
    }

    /// Selection notification from the UI.
    ///
    /// Returns the star and the chart it is drawn on so the caller can outline
    /// it; no selection state is kept here.
    pub fn highlight(&self, id: StarId) -> Option<(&StarPoint, &Chart)> {
        let star = self.catalog.get(id)?;
        debug!(id = id.index(), "highlight");
        Some((star, self.chart(star.hemisphere())))
    }

    /// Table rows for every present star.
    pub fn rows(&self) -> Vec<StarRow> {
        self.catalog.rows()
    }

    /// Render one chart to an SVG surface.
    pub fn render_svg(
        &self,
        hemisphere: Hemisphere,
        highlighted: &[StarId],
    ) -> anyhow::Result<SvgSurface> {
        let mut surface = SvgSurface::new(self.config.resolution);
        self.chart(hemisphere)
            .render(&mut surface, &self.catalog, &self.config.style, highlighted)?;
        Ok(surface)
    }

    /// CSV listing of all present stars.
    pub fn csv(&self) -> anyhow::Result<String> {
        export::csv_string(&self.catalog)
    }

    /// Both charts as the two-file SVG bundle.
    pub fn svg_bundle(&self) -> anyhow::Result<String> {
        let north = self.render_svg(Hemisphere::North, &[])?;
        let south = self.render_svg(Hemisphere::South, &[])?;
        Ok(export::svg_bundle(&north, &south))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.scale(), 250.0);
        assert_eq!(config.projection().center_pixel(), Pixel::new(250.0, 250.0));
    }

    #[test]
    fn test_place_star_uses_catalog_ordinal() {
        let chart = Chart::new(Hemisphere::North, &ChartConfig::default());
        let policy = MagnitudePolicy {
            jitter: 0.0,
            ..Default::default()
        };
        let mut catalog = Catalog::new();
        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..3 {
            let click = Pixel::new(260.0, 200.0 + i as f64);
            let id = chart.place_star(&mut catalog, click, &policy, &mut rng);
            assert_eq!(id.index(), i);
            assert_eq!(catalog.get(id).unwrap().mag(), Some(policy.base_magnitude(i)));
        }
    }

    #[test]
    fn test_click_routes_to_chart() {
        let mut map = StarMap::default();
        let mut rng = StdRng::seed_from_u64(3);
        for hemisphere in Hemisphere::ALL {
            assert_eq!(map.chart(hemisphere).hemisphere(), hemisphere);
            let id = map.click_with_rng(hemisphere, 250.0, 150.0, &mut rng);
            assert_eq!(map.star(id).unwrap().hemisphere(), hemisphere);
        }
        let order: Vec<Hemisphere> = map.charts().iter().map(|c| c.hemisphere()).collect();
        assert_eq!(order, Hemisphere::ALL.to_vec());
    }

    #[test]
    fn test_stars_drawn_on_their_own_chart() {
        let mut map = StarMap::default();
        let mut rng = StdRng::seed_from_u64(5);
        map.click_with_rng(Hemisphere::North, 300.0, 200.0, &mut rng);
        map.click_with_rng(Hemisphere::South, 200.0, 300.0, &mut rng);
        map.click_with_rng(Hemisphere::South, 210.0, 310.0, &mut rng);

        let north = map.render_svg(Hemisphere::North, &[]).unwrap();
        let south = map.render_svg(Hemisphere::South, &[]).unwrap();
        assert!(north.markup().contains("id=\"1\""));
        assert!(!north.markup().contains("id=\"2\""));
        assert!(south.markup().contains("id=\"2\""));
        assert!(south.markup().contains("id=\"3\""));
    }

    #[test]
    fn test_highlight_reports_chart() {
        let mut map = StarMap::default();
        let mut rng = StdRng::seed_from_u64(9);
        let id = map.click_with_rng(Hemisphere::South, 240.0, 260.0, &mut rng);
        let (star, chart) = map.highlight(id).unwrap();
        assert_eq!(chart.hemisphere(), Hemisphere::South);
        assert_eq!(star.pixel(), Pixel::new(240.0, 260.0));

        map.delete(id);
        assert!(map.highlight(id).is_none());
    }
}
