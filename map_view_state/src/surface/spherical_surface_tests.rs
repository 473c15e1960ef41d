use glam::{DVec2, DVec3};
use crate::config::{EARTH_RADIUS, HALF_WORLD_SIZE};
use super::*;

// ============================================================================
// intersect_ray
// ============================================================================

#[test]
fn test_ray_towards_center_hits_near_side() {
    let surface = SphericalSurface::new();
    let origin = DVec3::new(EARTH_RADIUS + 1000.0, 0.0, 0.0);
    let hit = surface.intersect_ray(origin, DVec3::NEG_X, 0.0).unwrap();
    assert!((hit - DVec3::new(EARTH_RADIUS, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn test_ray_hits_lifted_sphere() {
    let surface = SphericalSurface::new();
    let origin = DVec3::new(EARTH_RADIUS + 1000.0, 0.0, 0.0);
    let hit = surface.intersect_ray(origin, DVec3::NEG_X, 250.0).unwrap();
    assert!((hit.x - (EARTH_RADIUS + 250.0)).abs() < 1e-6);
}

#[test]
fn test_ray_above_horizon_misses() {
    let surface = SphericalSurface::new();
    let origin = DVec3::new(EARTH_RADIUS + 1000.0, 0.0, 0.0);
    assert!(surface.intersect_ray(origin, DVec3::Z, 0.0).is_none());
    assert!(surface.intersect_ray(origin, DVec3::X, 0.0).is_none());
}

#[test]
fn test_ray_from_inside_hits_far_side() {
    let surface = SphericalSurface::new();
    let hit = surface.intersect_ray(DVec3::ZERO, DVec3::Y, 0.0).unwrap();
    assert!((hit - DVec3::new(0.0, EARTH_RADIUS, 0.0)).length() < 1e-6);
}

// ============================================================================
// Frames and conversions
// ============================================================================

#[test]
fn test_map_origin_is_on_equator_at_prime_meridian() {
    let surface = SphericalSurface::new();
    let p = surface.to_internal(DVec2::ZERO);
    assert!((p - DVec3::new(EARTH_RADIUS, 0.0, 0.0)).length() < 1e-6);
    assert!((surface.normal_at(p) - DVec3::X).length() < 1e-12);
}

#[test]
fn test_map_round_trip() {
    let surface = SphericalSurface::new();
    for map in [
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0e6, 2.0e6),
        DVec2::new(-HALF_WORLD_SIZE * 0.9, -5.0e6),
        DVec2::new(3.3e6, 1.5e7),
    ] {
        let back = surface.to_map(surface.to_internal(map));
        assert!((back - map).length() < 1e-3, "{:?} -> {:?}", map, back);
    }
}

#[test]
fn test_north_points_to_pole_on_equator() {
    let surface = SphericalSurface::new();
    let p = surface.to_internal(DVec2::ZERO);
    assert!((surface.north_at(p) - DVec3::Z).length() < 1e-6);
}

#[test]
fn test_north_at_pole_falls_back_to_tangent() {
    let surface = SphericalSurface::new();
    let pole = DVec3::new(0.0, 0.0, EARTH_RADIUS);
    let north = surface.north_at(pole);
    assert!((north.length() - 1.0).abs() < 1e-9);
    assert!(north.dot(DVec3::Z).abs() < 1e-6);
}

#[test]
fn test_height_and_curvature() {
    let surface = SphericalSurface::new();
    assert_eq!(surface.curvature_radius(), Some(EARTH_RADIUS));
    let h = surface.height_above(DVec3::new(0.0, EARTH_RADIUS + 500.0, 0.0));
    assert!((h - 500.0).abs() < 1e-6);
}
