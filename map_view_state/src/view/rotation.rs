/// Camera rotation around the surface normal at the focus.

use glam::{DVec3, Vec3};
use crate::camera::{CameraBasis, ViewParameters};
use crate::surface::ProjectionSurface;

/// Camera right and up axes in world space, in float precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    x_axis: Vec3,
    y_axis: Vec3,
}

impl RotationState {
    pub fn new(x_axis: Vec3, y_axis: Vec3) -> Self {
        Self { x_axis, y_axis }
    }

    pub fn from_basis(basis: &CameraBasis) -> Self {
        Self::new(basis.right().as_vec3(), basis.up().as_vec3())
    }

    pub fn x_axis(&self) -> Vec3 {
        self.x_axis
    }

    pub fn y_axis(&self) -> Vec3 {
        self.y_axis
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(Vec3::X, Vec3::Y)
    }
}

/// Signed angle in degrees from local north to the screen-up heading,
/// counter-clockwise positive around the surface normal at the focus.
///
/// Returns 0 when no heading can be projected onto the tangent plane.
pub fn calculate_rotation(params: &ViewParameters, surface: &dyn ProjectionSurface) -> f32 {
    let focus = params.focus_pos();
    let normal = surface.normal_at(focus);
    let north = surface.north_at(focus);

    let forward = params.focus_pos() - params.camera_pos();
    let heading = match tangent_heading(params.up_vec(), normal)
        .or_else(|| tangent_heading(forward, normal))
    {
        Some(heading) => heading,
        None => return 0.0,
    };

    let sin = heading.cross(north).dot(normal);
    let cos = heading.dot(north);
    sin.atan2(cos).to_degrees() as f32
}

fn tangent_heading(direction: DVec3, normal: DVec3) -> Option<DVec3> {
    direction.reject_from_normalized(normal).try_normalize()
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
