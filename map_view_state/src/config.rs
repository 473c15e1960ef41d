//! View configuration — the read-only options snapshot consumed by every
//! recompute.
//!
//! The view state trusts these values. `ViewConfig::validate()` is offered to
//! the layer that builds the configuration; the geometry core never calls it.

use std::f64::consts::PI;
use std::sync::{Arc, OnceLock};
use glam::DVec2;
use crate::error::{Error, Result};
use crate::surface::{PlanarSurface, ProjectionSurface};

/// Earth radius in metres, also the radius of the spherical surface.
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Width of the square spherical-mercator world, in internal units.
pub const WORLD_SIZE: f64 = 2.0 * PI * EARTH_RADIUS;

/// Half of `WORLD_SIZE`.
pub const HALF_WORLD_SIZE: f64 = PI * EARTH_RADIUS;

/// Screen density at which one dp equals one pixel.
pub const UNSCALED_DPI: f32 = 160.0;

/// Planar surface handle shared by every default configuration.
fn default_surface() -> Arc<dyn ProjectionSurface> {
    static PLANAR: OnceLock<Arc<dyn ProjectionSurface>> = OnceLock::new();
    Arc::clone(PLANAR.get_or_init(|| Arc::new(PlanarSurface::new())))
}

/// Closed zoom interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRange {
    pub min: f32,
    pub max: f32,
}

impl MapRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Axis-aligned rectangle in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl MapBounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Bounds covering the whole mercator world.
    pub fn world() -> Self {
        Self {
            min: DVec2::splat(-HALF_WORLD_SIZE),
            max: DVec2::splat(HALF_WORLD_SIZE),
        }
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// True when the bounds enclose a positive area.
    pub fn is_valid(&self) -> bool {
        self.max.x > self.min.x && self.max.y > self.min.y
    }

    pub fn contains(&self, pos: DVec2) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::world()
    }
}

/// Options snapshot driving a recompute.
///
/// Cloning is cheap: the projection surface is a shared handle.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Zoom bounds
    pub zoom_range: MapRange,
    /// Confine focus and minimum zoom to `pan_bounds`
    pub restricted_panning: bool,
    /// Pannable area in map coordinates
    pub pan_bounds: MapBounds,
    /// Ignore the bounds-derived minimum zoom when clamping
    pub ignore_min_zoom: bool,
    /// Vertical field of view in degrees
    pub field_of_view_y: i32,
    /// Screen density
    pub dpi: f32,
    /// Size of a zoom-0 tile on screen, in dp
    pub tile_draw_size: i32,
    /// Wrap around the horizontal world seam (flat surfaces only)
    pub seamless_panning: bool,
    /// Surface the map is projected on
    pub projection_surface: Arc<dyn ProjectionSurface>,
}

impl ViewConfig {
    /// Replace the projection surface, keeping all other options.
    pub fn with_surface(mut self, surface: Arc<dyn ProjectionSurface>) -> Self {
        self.projection_surface = surface;
        self
    }

    /// Check the options for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` naming the first offending option.
    pub fn validate(&self) -> Result<()> {
        if !(self.zoom_range.min <= self.zoom_range.max) {
            return Err(Self::invalid(format!(
                "zoom range [{}, {}] is inverted or NaN",
                self.zoom_range.min, self.zoom_range.max
            )));
        }
        if self.field_of_view_y <= 0 || self.field_of_view_y >= 180 {
            return Err(Self::invalid(format!(
                "field of view {} must lie in (0, 180) degrees",
                self.field_of_view_y
            )));
        }
        if !(self.dpi > 0.0) {
            return Err(Self::invalid(format!("dpi {} must be positive", self.dpi)));
        }
        if self.tile_draw_size <= 0 {
            return Err(Self::invalid(format!(
                "tile draw size {} must be positive",
                self.tile_draw_size
            )));
        }
        if self.restricted_panning && !self.pan_bounds.is_valid() {
            return Err(Self::invalid("restricted panning requires non-empty pan bounds".to_string()));
        }
        Ok(())
    }

    fn invalid(message: String) -> Error {
        crate::view_error!("mapview::ViewConfig", "{}", message);
        Error::InvalidConfig(message)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_range: MapRange::new(0.0, 24.0),
            restricted_panning: false,
            pan_bounds: MapBounds::world(),
            ignore_min_zoom: false,
            field_of_view_y: 70,
            dpi: UNSCALED_DPI,
            tile_draw_size: 256,
            seamless_panning: true,
            projection_surface: default_surface(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
