/// ZoomPanClamp — minimum zoom and zoom/focus clamping under restricted panning.
///
/// All functions are pure. The visible area is approximated by the screen
/// rectangle rotated by the camera rotation, stretched vertically by the
/// tilt, at the scale given by the zoom (`units_per_pixel`).

use glam::{DVec2, DVec3};
use crate::camera::{ScreenGeometry, ViewParameters};
use crate::config::{ViewConfig, WORLD_SIZE};
use crate::surface::ProjectionSurface;
use super::derived_metrics::{normalized_resolution, units_per_pixel};
use super::rotation::calculate_rotation;

/// Lower bound of the tilt stretch divisor, keeps extents finite near the horizon.
const MIN_TILT_COSINE: f64 = 0.1;

/// Smallest zoom at which the pannable bounds still fill the screen.
///
/// Depends on screen size, tilt and rotation, never on the current zoom.
/// Falls back to the configured minimum when the bounds are empty.
pub fn compute_min_zoom(
    params: &ViewParameters,
    screen: &ScreenGeometry,
    config: &ViewConfig,
    surface: &dyn ProjectionSurface,
) -> f32 {
    let bounds = config.pan_bounds;
    if !bounds.is_valid() {
        return config.zoom_range.min;
    }

    let extent = visible_extent_px(params, screen, surface);
    let resolution = normalized_resolution(config) as f64;
    let size = bounds.size();

    let zoom_x = (extent.x * WORLD_SIZE / (resolution * size.x)).log2();
    let zoom_y = (extent.y * WORLD_SIZE / (resolution * size.y)).log2();
    let min_zoom = zoom_x.max(zoom_y) as f32;

    if min_zoom.is_finite() { min_zoom } else { config.zoom_range.min }
}

/// Clamp `zoom` to `[max(config min, min_zoom), config max]`.
///
/// Identity when restricted panning is off. With `ignore_min_zoom` only the
/// configured minimum applies.
pub fn clamp_zoom(zoom: f32, min_zoom: f32, config: &ViewConfig) -> f32 {
    if !config.restricted_panning {
        return zoom;
    }

    let range = config.zoom_range;
    let lower = if config.ignore_min_zoom { range.min } else { range.min.max(min_zoom) };
    zoom.max(lower).min(range.max)
}

/// Closest focus position keeping the visible area inside the pannable bounds.
///
/// Identity when restricted panning is off or the focus is already valid.
/// When the visible area is larger than the bounds along an axis, the focus
/// is centered on that axis.
pub fn clamp_focus_pos(
    params: &ViewParameters,
    screen: &ScreenGeometry,
    config: &ViewConfig,
    surface: &dyn ProjectionSurface,
) -> DVec3 {
    let focus = params.focus_pos();
    let bounds = config.pan_bounds;
    if !config.restricted_panning || !bounds.is_valid() {
        return focus;
    }

    let units_per_px = units_per_pixel(params.zoom(), normalized_resolution(config));
    let half_extent = visible_extent_px(params, screen, surface) * units_per_px * 0.5;

    let map_pos = surface.to_map(focus);
    let center = bounds.center();
    let lower = bounds.min + half_extent;
    let upper = bounds.max - half_extent;

    let clamp_axis = |value: f64, lower: f64, upper: f64, center: f64| {
        if lower > upper { center } else { value.clamp(lower, upper) }
    };
    let clamped = DVec2::new(
        clamp_axis(map_pos.x, lower.x, upper.x, center.x),
        clamp_axis(map_pos.y, lower.y, upper.y, center.y),
    );

    if clamped == map_pos {
        return focus;
    }

    // Keep the focus height above the surface.
    let target = surface.to_internal(clamped);
    target + surface.normal_at(target) * surface.height_above(focus)
}

/// Screen extent in pixels along map x and y, after rotation and tilt.
fn visible_extent_px(
    params: &ViewParameters,
    screen: &ScreenGeometry,
    surface: &dyn ProjectionSurface,
) -> DVec2 {
    let rotation = (calculate_rotation(params, surface) as f64).to_radians();
    let (sin, cos) = (rotation.sin().abs(), rotation.cos().abs());
    let width = screen.width() as f64;
    let height = screen.height() as f64;

    let tilt_cos = (params.tilt() as f64).to_radians().cos().clamp(MIN_TILT_COSINE, 1.0);
    let height = height / tilt_cos;

    DVec2::new(cos * width + sin * height, sin * width + cos * height)
}

#[cfg(test)]
#[path = "zoom_pan_clamp_tests.rs"]
mod tests;
