/// ProjectionBuilder — perspective, look-at and relative-to-eye matrices.
///
/// All matrices use the right-handed OpenGL convention: the camera looks
/// down -Z in view space and clip-space depth spans [-1, 1].
///
/// Relative-to-eye (RTE) matrices drop the camera translation, so vertices
/// are expressed relative to the camera in double precision first and only
/// then cast to f32. That keeps float precision near the camera even when
/// world coordinates are in the tens of millions.

use glam::{DMat4, DVec3, DVec4, Mat4};

/// Cross products shorter than this are treated as parallel vectors.
const PARALLEL_EPSILON: f64 = 1e-12;

// ===== FIELD OF VIEW =====

/// Field of view angles and the trigonometry derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    fov_y: i32,
    half_fov_y: f32,
    tan_half_fov_y: f64,
    cos_half_fov_y: f64,
    tan_half_fov_x: f64,
    cos_half_fov_xy: f64,
}

impl FieldOfView {
    /// Build from the vertical field of view in degrees and the screen aspect ratio.
    pub fn new(fov_y: i32, aspect_ratio: f32) -> Self {
        let half_fov_y = fov_y as f32 * 0.5;
        let half_rad = (half_fov_y as f64).to_radians();
        let tan_half_fov_y = half_rad.tan();
        let cos_half_fov_y = half_rad.cos();
        let tan_half_fov_x = tan_half_fov_y * aspect_ratio as f64;
        let cos_half_fov_xy = tan_half_fov_x.atan().cos() * cos_half_fov_y;
        Self {
            fov_y,
            half_fov_y,
            tan_half_fov_y,
            cos_half_fov_y,
            tan_half_fov_x,
            cos_half_fov_xy,
        }
    }

    /// Vertical field of view in degrees.
    pub fn fov_y(&self) -> i32 {
        self.fov_y
    }

    /// Half of the vertical field of view in degrees.
    pub fn half_fov_y(&self) -> f32 {
        self.half_fov_y
    }

    pub fn tan_half_fov_y(&self) -> f64 {
        self.tan_half_fov_y
    }

    pub fn cos_half_fov_y(&self) -> f64 {
        self.cos_half_fov_y
    }

    pub fn tan_half_fov_x(&self) -> f64 {
        self.tan_half_fov_x
    }

    /// Cosine of the half horizontal angle times cosine of the half vertical angle.
    pub fn cos_half_fov_xy(&self) -> f64 {
        self.cos_half_fov_xy
    }
}

// ===== CAMERA BASIS =====

/// Which part of the pose had to be replaced to build a basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisFallback {
    /// Pose was well formed
    None,
    /// Camera and focus coincide; -Z is used as view direction
    ForwardDirection,
    /// Up vector parallel to the view direction; a world axis is used instead
    UpVector,
}

/// Orthonormal camera frame in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    right: DVec3,
    up: DVec3,
    forward: DVec3,
    fallback: BasisFallback,
}

impl CameraBasis {
    /// forward = normalize(focus - camera), right = normalize(forward x up),
    /// up = right x forward.
    pub fn new(camera_pos: DVec3, focus_pos: DVec3, up_vec: DVec3) -> Self {
        let mut fallback = BasisFallback::None;

        let forward = match (focus_pos - camera_pos).try_normalize() {
            Some(forward) => forward,
            None => {
                fallback = BasisFallback::ForwardDirection;
                DVec3::NEG_Z
            }
        };

        let mut right = forward.cross(up_vec);
        if right.length_squared() < PARALLEL_EPSILON || !right.is_finite() {
            if fallback == BasisFallback::None {
                fallback = BasisFallback::UpVector;
            }
            let substitute = if forward.z.abs() < 0.9 { DVec3::Z } else { DVec3::Y };
            right = forward.cross(substitute);
        }
        let right = right.normalize();
        let up = right.cross(forward);

        Self { right, up, forward, fallback }
    }

    pub fn right(&self) -> DVec3 {
        self.right
    }

    pub fn up(&self) -> DVec3 {
        self.up
    }

    pub fn forward(&self) -> DVec3 {
        self.forward
    }

    pub fn fallback(&self) -> BasisFallback {
        self.fallback
    }

    /// View matrix placing `eye` at the origin with this basis.
    pub fn view_matrix(&self, eye: DVec3) -> DMat4 {
        let (r, u, f) = (self.right, self.up, self.forward);
        DMat4::from_cols(
            DVec4::new(r.x, u.x, -f.x, 0.0),
            DVec4::new(r.y, u.y, -f.y, 0.0),
            DVec4::new(r.z, u.z, -f.z, 0.0),
            DVec4::new(-r.dot(eye), -u.dot(eye), f.dot(eye), 1.0),
        )
    }
}

// ===== BUILDERS =====

/// Symmetric perspective projection.
pub fn build_perspective(half_fov_y: f32, aspect_ratio: f32, near: f64, far: f64) -> DMat4 {
    DMat4::perspective_rh_gl(
        (2.0 * half_fov_y as f64).to_radians(),
        aspect_ratio as f64,
        near,
        far,
    )
}

/// Look-at (modelview) matrix with degenerate pose guards.
pub fn build_look_at(camera_pos: DVec3, focus_pos: DVec3, up_vec: DVec3) -> DMat4 {
    CameraBasis::new(camera_pos, focus_pos, up_vec).view_matrix(camera_pos)
}

/// Relative-to-eye variant of a modelview matrix.
///
/// The modelview maps the camera to the origin, so clearing its translation
/// yields the matrix to apply to `world - camera_pos`.
pub fn build_rte(modelview: &DMat4) -> DMat4 {
    let mut rte = *modelview;
    rte.w_axis = DVec4::W;
    rte
}

// ===== MATRIX SET =====

/// Projection, modelview and their relative-to-eye variants.
///
/// Built together from one modelview and one projection; the
/// modelview-projection product is computed once and every float matrix
/// is a cast of a double product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMatrices {
    projection: DMat4,
    modelview: DMat4,
    modelview_projection: DMat4,
    rte_modelview: Mat4,
    rte_modelview_projection: Mat4,
    rte_sky_projection: Mat4,
    inverse_rte_modelview_projection: DMat4,
}

impl ViewMatrices {
    pub fn new(projection: DMat4, sky_projection: DMat4, modelview: DMat4) -> Self {
        let modelview_projection = projection * modelview;
        let rte_modelview = build_rte(&modelview);
        let rte_modelview_projection = projection * rte_modelview;
        let rte_sky_projection = sky_projection * rte_modelview;

        Self {
            projection,
            modelview,
            modelview_projection,
            rte_modelview: rte_modelview.as_mat4(),
            rte_modelview_projection: rte_modelview_projection.as_mat4(),
            rte_sky_projection: rte_sky_projection.as_mat4(),
            inverse_rte_modelview_projection: rte_modelview_projection.inverse(),
        }
    }

    pub fn projection(&self) -> &DMat4 {
        &self.projection
    }

    pub fn modelview(&self) -> &DMat4 {
        &self.modelview
    }

    /// projection * modelview
    pub fn modelview_projection(&self) -> &DMat4 {
        &self.modelview_projection
    }

    pub fn rte_modelview(&self) -> &Mat4 {
        &self.rte_modelview
    }

    pub fn rte_modelview_projection(&self) -> &Mat4 {
        &self.rte_modelview_projection
    }

    /// RTE modelview-projection with the far plane pushed back for sky rendering.
    pub fn rte_sky_projection(&self) -> &Mat4 {
        &self.rte_sky_projection
    }

    /// Inverse of the double precision RTE modelview-projection, used to unproject.
    pub fn inverse_rte_modelview_projection(&self) -> &DMat4 {
        &self.inverse_rte_modelview_projection
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
