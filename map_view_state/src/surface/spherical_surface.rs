/// SphericalSurface — the globe, a sphere centered at the origin.
///
/// Map coordinates are spherical-mercator metres: x maps linearly to
/// longitude, y through the Gudermannian function to latitude. Latitude is
/// clamped to the mercator limit when converting back to map coordinates.

use std::f64::consts::FRAC_PI_2;
use std::f64::consts::FRAC_PI_4;
use glam::{DVec2, DVec3};
use crate::config::EARTH_RADIUS;
use super::projection_surface::ProjectionSurface;

/// Latitude limit of the square spherical-mercator world (radians).
const MAX_MERCATOR_LATITUDE: f64 = 1.4844222297453324;

/// Sphere of radius `radius` at the origin; +Z is the north pole.
#[derive(Debug, Clone, Copy)]
pub struct SphericalSurface {
    radius: f64,
}

impl SphericalSurface {
    /// Globe with the earth radius.
    pub fn new() -> Self {
        Self { radius: EARTH_RADIUS }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for SphericalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionSurface for SphericalSurface {
    fn intersect_ray(&self, origin: DVec3, direction: DVec3, height: f64) -> Option<DVec3> {
        let r = self.radius + height;
        let a = direction.length_squared();
        if a < f64::EPSILON {
            return None;
        }
        let b = 2.0 * origin.dot(direction);
        let c = origin.length_squared() - r * r;
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t0 = (-b - sqrt_disc) / (2.0 * a);
        let t1 = (-b + sqrt_disc) / (2.0 * a);
        let t = if t0 >= 0.0 {
            t0
        } else if t1 >= 0.0 {
            t1
        } else {
            return None;
        };
        Some(origin + direction * t)
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        point.try_normalize().unwrap_or(DVec3::Z)
    }

    fn to_internal(&self, map_pos: DVec2) -> DVec3 {
        let lon = map_pos.x / self.radius;
        let lat = 2.0 * (map_pos.y / self.radius).exp().atan() - FRAC_PI_2;
        DVec3::new(
            lat.cos() * lon.cos(),
            lat.cos() * lon.sin(),
            lat.sin(),
        ) * self.radius
    }

    fn to_map(&self, point: DVec3) -> DVec2 {
        let len = point.length();
        if len < f64::EPSILON {
            return DVec2::ZERO;
        }
        let lon = point.y.atan2(point.x);
        let lat = (point.z / len)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
        DVec2::new(
            lon * self.radius,
            (FRAC_PI_4 + lat * 0.5).tan().ln() * self.radius,
        )
    }

    fn height_above(&self, point: DVec3) -> f64 {
        point.length() - self.radius
    }

    fn curvature_radius(&self) -> Option<f64> {
        Some(self.radius)
    }
}

#[cfg(test)]
#[path = "spherical_surface_tests.rs"]
mod tests;
