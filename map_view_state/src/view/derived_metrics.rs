/// DerivedMetrics — zoom scale, zoom-0 distance and unit conversions.
///
/// Pure function of the clamped zoom, the screen and the configuration.
/// Recomputed together with the matrices, never mutated on its own.

use crate::camera::{FieldOfView, ScreenGeometry};
use crate::config::{ViewConfig, HALF_WORLD_SIZE, UNSCALED_DPI, WORLD_SIZE};

/// Scalars derived from zoom, screen size, DPI and tile draw size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    fov: FieldOfView,
    two_pow_zoom: f64,
    zoom0_distance: f64,
    min_zoom: f32,
    normalized_resolution: f32,
    dp_to_px: f32,
    dpi: f32,
    unit_to_px_coef: f64,
    unit_to_dp_coef: f64,
}

impl DerivedMetrics {
    pub fn new(
        zoom: f32,
        min_zoom: f32,
        fov: FieldOfView,
        screen: &ScreenGeometry,
        config: &ViewConfig,
    ) -> Self {
        let dp_to_px = dp_to_px(config);
        let normalized_resolution = normalized_resolution(config);
        let two_pow_zoom = two_pow(zoom);
        let zoom0_distance = zoom0_distance(screen, &fov, normalized_resolution);
        let unit_to_px_coef = units_per_pixel(zoom, normalized_resolution);

        Self {
            fov,
            two_pow_zoom,
            zoom0_distance,
            min_zoom,
            normalized_resolution,
            dp_to_px,
            dpi: config.dpi,
            unit_to_px_coef,
            unit_to_dp_coef: unit_to_px_coef * dp_to_px as f64,
        }
    }

    pub fn fov(&self) -> &FieldOfView {
        &self.fov
    }

    /// 2^zoom
    pub fn two_pow_zoom(&self) -> f64 {
        self.two_pow_zoom
    }

    /// Camera-focus distance at which zoom 0 fits the world tile on screen.
    pub fn zoom0_distance(&self) -> f64 {
        self.zoom0_distance
    }

    /// Camera-focus distance matching the current zoom.
    pub fn zoom_distance(&self) -> f64 {
        self.zoom0_distance / self.two_pow_zoom
    }

    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    /// Pixels spanned by the whole world at zoom 0.
    pub fn normalized_resolution(&self) -> f32 {
        self.normalized_resolution
    }

    pub fn dp_to_px(&self) -> f32 {
        self.dp_to_px
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    /// World units per pixel at the focus.
    pub fn unit_to_px_coef(&self) -> f64 {
        self.unit_to_px_coef
    }

    /// World units per dp at the focus.
    pub fn unit_to_dp_coef(&self) -> f64 {
        self.unit_to_dp_coef
    }
}

/// 2^zoom, split so that integer zoom steps scale by an exact power of two.
pub fn two_pow(zoom: f32) -> f64 {
    let zoom = zoom as f64;
    let whole = zoom.floor();
    2f64.powi(whole as i32) * 2f64.powf(zoom - whole)
}

pub fn dp_to_px(config: &ViewConfig) -> f32 {
    config.dpi / UNSCALED_DPI
}

pub fn normalized_resolution(config: &ViewConfig) -> f32 {
    config.tile_draw_size as f32 * dp_to_px(config)
}

/// Camera-focus distance at which the world spans `normalized_resolution`
/// pixels vertically.
pub fn zoom0_distance(screen: &ScreenGeometry, fov: &FieldOfView, normalized_resolution: f32) -> f64 {
    screen.height() as f64 * HALF_WORLD_SIZE / (fov.tan_half_fov_y() * normalized_resolution as f64)
}

/// World units covered by one pixel at `zoom`.
pub fn units_per_pixel(zoom: f32, normalized_resolution: f32) -> f64 {
    WORLD_SIZE / (normalized_resolution as f64 * two_pow(zoom))
}

#[cfg(test)]
#[path = "derived_metrics_tests.rs"]
mod tests;
