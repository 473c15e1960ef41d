/// ScreenMapper — pixel <-> world queries against a computed snapshot.
///
/// Screen coordinates are pixels with the origin at the top-left corner and
/// y growing downwards. World coordinates are internal double precision
/// positions.

use glam::{DVec2, DVec3, Vec2};
use crate::config::{ViewConfig, HALF_WORLD_SIZE, WORLD_SIZE};
use super::view_snapshot::ViewSnapshot;

/// Finite-difference step along the camera right axis, relative to the
/// camera-focus distance.
const PIXEL_MEASURE_STEP: f64 = 1e-3;

/// Unproject a pixel onto the surface lifted by `height`.
///
/// Returns a vector of NaNs when the ray through the pixel misses the
/// surface. When `config` enables seamless panning on a flat surface, x is
/// wrapped into `[-HALF_WORLD_SIZE, HALF_WORLD_SIZE)`.
pub fn screen_to_world(
    snapshot: &ViewSnapshot,
    screen_pos: Vec2,
    height: f64,
    config: Option<&ViewConfig>,
) -> DVec3 {
    let ndc = DVec2::new(
        screen_pos.x as f64 / snapshot.half_width() as f64 - 1.0,
        1.0 - screen_pos.y as f64 / snapshot.half_height() as f64,
    );

    let inverse = snapshot.matrices().inverse_rte_modelview_projection();
    let near = inverse.project_point3(ndc.extend(-1.0));
    let far = inverse.project_point3(ndc.extend(1.0));

    let origin = snapshot.camera_pos() + near;
    let direction = far - near;
    if !origin.is_finite() || !direction.is_finite() {
        return DVec3::NAN;
    }

    let Some(mut hit) = snapshot.projection_surface().intersect_ray(origin, direction, height) else {
        return DVec3::NAN;
    };

    if is_seamless(snapshot, config) {
        hit.x = (hit.x + HALF_WORLD_SIZE).rem_euclid(WORLD_SIZE) - HALF_WORLD_SIZE;
    }
    hit
}

/// Project a world position to pixel coordinates.
///
/// No clipping: points off screen (or behind the camera) give coordinates
/// outside `[0, width) x [0, height)`. With seamless panning, the copy of
/// the point shifted by one world width in the horizontal layer offset
/// direction is used when it lies closer to the focus.
pub fn world_to_screen(snapshot: &ViewSnapshot, world_pos: DVec3, config: Option<&ViewConfig>) -> Vec2 {
    let mut world_pos = world_pos;

    let dir = snapshot.horizontal_layer_offset_dir();
    if dir != 0 && is_seamless(snapshot, config) {
        let focus_x = snapshot.focus_pos().x;
        let shifted = world_pos.x + dir as f64 * WORLD_SIZE;
        if (shifted - focus_x).abs() < (world_pos.x - focus_x).abs() {
            world_pos.x = shifted;
        }
    }

    let relative = (world_pos - snapshot.camera_pos()).as_vec3();
    let clip = *snapshot.rte_modelview_projection() * relative.extend(1.0);
    let ndc = clip.truncate() / clip.w;

    Vec2::new(
        (ndc.x + 1.0) * snapshot.half_width(),
        (1.0 - ndc.y) * snapshot.half_height(),
    )
}

/// Approximate world units per pixel at the focus point.
///
/// Finite difference of `world_to_screen` along the camera right axis.
/// Falls back to the zoom-derived `unit_to_px_coef` when the difference
/// degenerates.
pub fn estimate_world_pixel_measure(snapshot: &ViewSnapshot) -> f64 {
    let focus = snapshot.focus_pos();
    let delta = snapshot.params().camera_distance() * PIXEL_MEASURE_STEP;
    let right = snapshot.rotation_state().x_axis().as_dvec3();

    let a = world_to_screen(snapshot, focus, None);
    let b = world_to_screen(snapshot, focus + right * delta, None);
    let pixels = a.distance(b) as f64;

    let measure = delta / pixels;
    if pixels > 0.0 && measure.is_finite() {
        measure
    } else {
        snapshot.unit_to_px_coef()
    }
}

fn is_seamless(snapshot: &ViewSnapshot, config: Option<&ViewConfig>) -> bool {
    config.map_or(false, |config| config.seamless_panning)
        && snapshot.projection_surface().curvature_radius().is_none()
}

#[cfg(test)]
#[path = "screen_mapper_tests.rs"]
mod tests;
