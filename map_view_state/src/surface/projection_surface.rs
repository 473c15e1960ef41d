/// ProjectionSurface — ray and normal queries against the map surface.

use std::fmt::Debug;
use glam::{DVec2, DVec3};

/// Surface onto which map (x, y) coordinates are projected.
///
/// Internal coordinates are double precision world positions. Map
/// coordinates are spherical-mercator metres, spanning
/// `[-HALF_WORLD_SIZE, HALF_WORLD_SIZE]` on both axes.
pub trait ProjectionSurface: Debug + Send + Sync {
    /// Intersect a ray with the surface lifted by `height`.
    ///
    /// Returns the closest hit with a non-negative ray parameter, or `None`
    /// when the ray misses. `direction` does not need to be normalized.
    fn intersect_ray(&self, origin: DVec3, direction: DVec3, height: f64) -> Option<DVec3>;

    /// Unit surface normal at (or radially below/above) `point`.
    fn normal_at(&self, point: DVec3) -> DVec3;

    /// Map position to internal coordinates (on the surface, height 0).
    fn to_internal(&self, map_pos: DVec2) -> DVec3;

    /// Internal coordinates to map position.
    fn to_map(&self, point: DVec3) -> DVec2;

    /// Signed distance of `point` above the surface.
    fn height_above(&self, point: DVec3) -> f64;

    /// Radius of curvature, `None` for flat surfaces.
    fn curvature_radius(&self) -> Option<f64> {
        None
    }

    /// Unit tangent pointing towards increasing map y (north) at `point`.
    ///
    /// Falls back to any tangent orthogonal to the normal where north is
    /// undefined (the poles of a sphere).
    fn north_at(&self, point: DVec3) -> DVec3 {
        let normal = self.normal_at(point);
        let map_pos = self.to_map(point);
        let ahead = self.to_internal(map_pos + DVec2::new(0.0, 1.0));
        let behind = self.to_internal(map_pos);
        let tangent = (ahead - behind).reject_from_normalized(normal);
        if tangent.length_squared() > f64::EPSILON {
            tangent.normalize()
        } else {
            normal.any_orthonormal_vector()
        }
    }
}
