/// PlanarSurface — the flat z = 0 map plane.

use glam::{DVec2, DVec3};
use super::projection_surface::ProjectionSurface;

/// Flat surface: map coordinates are the internal x/y, up is +Z.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarSurface;

impl PlanarSurface {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectionSurface for PlanarSurface {
    fn intersect_ray(&self, origin: DVec3, direction: DVec3, height: f64) -> Option<DVec3> {
        if direction.z.abs() < f64::EPSILON {
            return None;
        }
        let t = (height - origin.z) / direction.z;
        if t < 0.0 {
            return None;
        }
        Some(origin + direction * t)
    }

    fn normal_at(&self, _point: DVec3) -> DVec3 {
        DVec3::Z
    }

    fn to_internal(&self, map_pos: DVec2) -> DVec3 {
        map_pos.extend(0.0)
    }

    fn to_map(&self, point: DVec3) -> DVec2 {
        point.truncate()
    }

    fn height_above(&self, point: DVec3) -> f64 {
        point.z
    }

    fn north_at(&self, _point: DVec3) -> DVec3 {
        DVec3::Y
    }
}

#[cfg(test)]
#[path = "planar_surface_tests.rs"]
mod tests;
