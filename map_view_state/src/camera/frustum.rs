/// Frustum — six clipping planes of the current view, in world space.
///
/// Each plane is a DVec4 (A, B, C, D):
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Planes are extracted in double precision from the world-space
/// modelview-projection matrix, so culling works directly on internal
/// coordinates without an eye-relative shift.

use glam::{DMat4, DVec3, DVec4};

/// Result of a 3-way frustum/AABB classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB partially overlaps the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Axis-aligned box in internal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: DVec3,
    /// Maximum corner (x, y, z)
    pub max: DVec3,
}

impl AABB {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

/// Six frustum planes for culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [DVec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a modelview-projection matrix.
    ///
    /// Gribb & Hartmann method, OpenGL clip range (-w <= z <= w).
    pub fn from_view_projection(mvp: &DMat4) -> Self {
        let m = mvp.to_cols_array_2d();

        // Row i of the matrix is (m[0][i], m[1][i], m[2][i], m[3][i])
        let row = |i: usize| DVec4::new(m[0][i], m[1][i], m[2][i], m[3][i]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        let mut planes = [
            r3 + r0, // Left
            r3 - r0, // Right
            r3 + r1, // Bottom
            r3 - r1, // Top
            r3 + r2, // Near
            r3 - r2, // Far
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance of `point` to the plane at `index` (positive inside).
    ///
    /// `None` when `index` is not one of the `PLANE_*` indices.
    pub fn signed_distance(&self, index: usize, point: DVec3) -> Option<f64> {
        self.planes.get(index).map(|plane| Self::plane_distance(plane, point))
    }

    /// Test if a point lies inside (or on) all six planes.
    pub fn contains_point(&self, point: DVec3) -> bool {
        self.planes.iter().all(|plane| Self::plane_distance(plane, point) >= 0.0)
    }

    /// Test if a sphere intersects this frustum. Conservative near corners.
    pub fn intersects_sphere(&self, center: DVec3, radius: f64) -> bool {
        self.planes.iter().all(|plane| Self::plane_distance(plane, center) >= -radius)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// "Positive vertex" test: for each plane, the AABB corner most in the
    /// direction of the normal must be inside. May return false positives,
    /// never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        for plane in &self.planes {
            let normal = plane.truncate();
            let p_vertex = Self::select_corner(normal, aabb.max, aabb.min);

            if normal.dot(p_vertex) + plane.w < 0.0 {
                return false;
            }
        }

        true
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// - p-vertex outside any plane -> `Outside`
    /// - n-vertex outside any plane -> at least `Partial`
    /// - otherwise -> `Inside`
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            let p_vertex = Self::select_corner(normal, aabb.max, aabb.min);
            if normal.dot(p_vertex) + plane.w < 0.0 {
                return FrustumTest::Outside;
            }

            let n_vertex = Self::select_corner(normal, aabb.min, aabb.max);
            if normal.dot(n_vertex) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }

    fn plane_distance(plane: &DVec4, point: DVec3) -> f64 {
        plane.truncate().dot(point) + plane.w
    }

    /// Per axis: `positive` where the normal component is >= 0, else `negative`.
    fn select_corner(normal: DVec3, positive: DVec3, negative: DVec3) -> DVec3 {
        DVec3::new(
            if normal.x >= 0.0 { positive.x } else { negative.x },
            if normal.y >= 0.0 { positive.y } else { negative.y },
            if normal.z >= 0.0 { positive.z } else { negative.z },
        )
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
