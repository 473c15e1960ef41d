/// FrustumBuilder — near/far planes, sky visibility and the view frustum.
///
/// Near and far vary continuously with tilt and camera distance: the far
/// plane follows the depth at which the top frustum edge meets the surface
/// and saturates smoothly at a cap instead of switching branches. Sky
/// visibility is a single comparison against that same cap (and, on curved
/// surfaces, against the horizon).

use glam::DMat4;
use crate::surface::ProjectionSurface;
use super::frustum::Frustum;
use super::projection::FieldOfView;
use super::view_parameters::ViewParameters;

/// Near plane as a fraction of the camera-focus distance.
pub const NEAR_PLANE_FACTOR: f64 = 0.01;

/// Far plane cap as a multiple of the camera-focus distance.
pub const MAX_FAR_FACTOR: f64 = 50.0;

/// Lower bound for the camera height, as a fraction of the camera-focus distance.
pub const MIN_HEIGHT_FACTOR: f64 = 0.01;

/// Extra depth kept behind the farthest visible surface point.
pub const FAR_PLANE_MARGIN: f64 = 1.1;

/// Far plane multiplier of the sky projection.
pub const SKY_FAR_FACTOR: f64 = 4.0;

/// Smallest camera-focus distance used for plane computations.
const MIN_CAMERA_DISTANCE: f64 = 1e-6;

/// Clip distances of one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlanes {
    pub near: f64,
    pub far: f64,
    /// Far distance of the sky projection
    pub sky_far: f64,
    pub sky_visible: bool,
}

/// Compute near/far planes and sky visibility.
pub fn compute_near_far(
    params: &ViewParameters,
    fov: &FieldOfView,
    surface: &dyn ProjectionSurface,
) -> ClipPlanes {
    let distance = params.camera_distance().max(MIN_CAMERA_DISTANCE);
    let height = surface
        .height_above(params.camera_pos())
        .max(distance * MIN_HEIGHT_FACTOR);

    let near = distance * NEAR_PLANE_FACTOR;
    let max_far = distance * MAX_FAR_FACTOR;

    // View depth per unit of descent along the top frustum edge.
    let tilt = (params.tilt() as f64).clamp(0.0, 90.0).to_radians();
    let descent = tilt.cos() - tilt.sin() * fov.tan_half_fov_y();

    let ground_far = height / descent.max(height / max_far);
    let mut sky_visible = descent * max_far <= height;
    let mut far = ground_far;
    let mut sky_limit = max_far;

    if let Some(radius) = surface.curvature_radius() {
        let horizon = (height * (2.0 * radius + height)).sqrt();
        far = ground_far.max(horizon.min(max_far));
        sky_limit = horizon.max(max_far);

        let top_edge = tilt + (fov.half_fov_y() as f64).to_radians();
        sky_visible |= top_edge.sin() > radius / (radius + height);
    }

    let far = (far * FAR_PLANE_MARGIN).max(near * 2.0);
    let sky_far = far.max(sky_limit) * SKY_FAR_FACTOR;

    ClipPlanes {
        near,
        far,
        sky_far,
        sky_visible,
    }
}

/// Build the view frustum from the final modelview-projection matrix.
pub fn build_frustum(modelview_projection: &DMat4) -> Frustum {
    Frustum::from_view_projection(modelview_projection)
}

#[cfg(test)]
#[path = "frustum_builder_tests.rs"]
mod tests;
