use std::sync::Arc;
use glam::{DVec2, DVec3};
use crate::camera::{BasisFallback, ScreenGeometry, ViewParameters};
use crate::config::{MapBounds, ViewConfig, EARTH_RADIUS};
use crate::surface::{ProjectionSurface, SphericalSurface};
use super::*;

fn top_down(height: f64, zoom: f32) -> ViewParameters {
    ViewParameters::new(DVec3::new(0.0, 0.0, height), DVec3::ZERO, DVec3::Y, 0.0, zoom)
}

// ============================================================================
// Matrices and frustum
// ============================================================================

#[test]
fn test_modelview_projection_is_product() {
    let snapshot = recompute(&top_down(10.0, 0.0), &ScreenGeometry::new(512, 512), &ViewConfig::default(), 0);

    assert_eq!(
        *snapshot.modelview_projection(),
        *snapshot.projection() * *snapshot.modelview()
    );
    assert!((snapshot.near() - 0.1).abs() < 1e-12);
    assert!(snapshot.far() > 10.0);
}

#[test]
fn test_frustum_matches_final_matrices() {
    let snapshot = recompute(&top_down(10.0, 0.0), &ScreenGeometry::new(512, 512), &ViewConfig::default(), 0);
    let expected = crate::camera::Frustum::from_view_projection(snapshot.modelview_projection());

    assert_eq!(*snapshot.frustum(), expected);
    assert!(snapshot.frustum().contains_point(DVec3::ZERO));
}

#[test]
fn test_recompute_is_bit_identical() {
    let params = ViewParameters::new(
        DVec3::new(1.0e6, -2.0e6, 3500.0),
        DVec3::new(1.0e6, -2.0e6 + 1200.0, 0.0),
        DVec3::Z,
        35.0,
        11.3,
    );
    let screen = ScreenGeometry::new(1280, 720);
    let config = ViewConfig::default();

    let a = recompute(&params, &screen, &config, 1);
    let b = recompute(&params, &screen, &config, 1);

    assert_eq!(a.matrices(), b.matrices());
    assert_eq!(a.frustum(), b.frustum());
    assert_eq!(a.metrics(), b.metrics());
    assert_eq!(a.clip_planes(), b.clip_planes());
    assert_eq!(a.params(), b.params());
    assert_eq!(a.rotation().to_bits(), b.rotation().to_bits());
    assert_eq!(a.rotation_state(), b.rotation_state());
    assert_eq!(a.uniform(), b.uniform());
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_unrestricted_zoom_passes_through() {
    let config = ViewConfig::default();
    let screen = ScreenGeometry::new(512, 512);
    let a = recompute(&top_down(10.0, 7.0), &screen, &config, 0);
    let b = recompute(&top_down(10.0, 8.0), &screen, &config, 0);

    assert_eq!(a.zoom(), 7.0);
    assert_eq!(b.zoom(), 8.0);
    assert_eq!(b.two_pow_zoom(), a.two_pow_zoom() * 2.0);
    assert!(!a.is_zoom_clamped());
    assert_eq!(a.camera_pos(), DVec3::new(0.0, 0.0, 10.0));
}

#[test]
fn test_restricted_zoom_clamps_and_moves_camera() {
    let config = ViewConfig {
        restricted_panning: true,
        ..ViewConfig::default()
    };
    let snapshot = recompute(&top_down(10.0, 30.0), &ScreenGeometry::new(512, 512), &config, 0);

    assert_eq!(snapshot.zoom(), 24.0);
    assert!(snapshot.is_zoom_clamped());
    let distance = snapshot.params().camera_distance();
    let expected = snapshot.metrics().zoom_distance();
    assert!((distance / expected - 1.0).abs() < 1e-9);
}

#[test]
fn test_restricted_min_zoom_reported() {
    let config = ViewConfig {
        restricted_panning: true,
        ..ViewConfig::default()
    };
    let snapshot = recompute(&top_down(10.0, 0.0), &ScreenGeometry::new(512, 512), &config, 0);

    // The world tile must fill a 512 pixel screen: min zoom 1.
    assert!((snapshot.min_zoom() - 1.0).abs() < 1e-5);
    assert!(snapshot.zoom() >= snapshot.min_zoom());
}

#[test]
fn test_restricted_focus_drags_camera() {
    let config = ViewConfig {
        restricted_panning: true,
        pan_bounds: MapBounds::new(DVec2::splat(-1.0e6), DVec2::splat(1.0e6)),
        ..ViewConfig::default()
    };
    let focus = DVec3::new(5.0e6, 0.0, 0.0);
    let params = ViewParameters::new(focus + DVec3::new(0.0, -50.0, 80.0), focus, DVec3::Z, 30.0, 15.0);

    let snapshot = recompute(&params, &ScreenGeometry::new(400, 400), &config, 0);

    assert!(snapshot.is_focus_clamped());
    assert!(snapshot.focus_pos().x < 1.0e6);
    let offset = snapshot.camera_pos() - snapshot.focus_pos();
    assert!((offset - DVec3::new(0.0, -50.0, 80.0)).length() < 1e-6);
}

#[test]
fn test_restricted_focus_on_globe_keeps_camera_on_normal() {
    let surface: Arc<dyn ProjectionSurface> = Arc::new(SphericalSurface::new());
    let config = ViewConfig {
        restricted_panning: true,
        pan_bounds: MapBounds::new(DVec2::splat(1.0e6), DVec2::splat(2.0e6)),
        ..ViewConfig::default().with_surface(Arc::clone(&surface))
    };
    let focus = DVec3::new(EARTH_RADIUS, 0.0, 0.0);
    let params = ViewParameters::new(focus + DVec3::new(5.0e6, 0.0, 0.0), focus, DVec3::Z, 0.0, 10.0);

    let snapshot = recompute(&params, &ScreenGeometry::new(512, 512), &config, 0);
    assert!(snapshot.is_focus_clamped());

    let focus = snapshot.focus_pos();
    let normal = surface.normal_at(focus);
    let offset = snapshot.camera_pos() - focus;
    assert!(normal.y > 0.0 && normal.z > 0.0);
    assert!((offset.normalize() - normal).length() < 1e-9);
    assert!((offset.length() - 5.0e6).abs() < 1e-3);
    assert!(snapshot.params().up_vec().dot(normal).abs() < 1e-9);
}

// ============================================================================
// Surface snapshot and degenerate input
// ============================================================================

#[test]
fn test_snapshot_keeps_configured_surface() {
    let surface: Arc<dyn ProjectionSurface> = Arc::new(SphericalSurface::new());
    let config = ViewConfig::default().with_surface(Arc::clone(&surface));
    let params = ViewParameters::new(
        DVec3::new(EARTH_RADIUS + 5000.0, 0.0, 0.0),
        DVec3::new(EARTH_RADIUS, 0.0, 0.0),
        DVec3::Z,
        0.0,
        12.0,
    );

    let snapshot = recompute(&params, &ScreenGeometry::new(640, 480), &config, 0);

    assert!(Arc::ptr_eq(snapshot.projection_surface(), &surface));
    assert!((snapshot.focus_pos_normal() - glam::Vec3::X).length() < 1e-6);
}

#[test]
fn test_degenerate_pose_stays_finite() {
    let snapshot = recompute(&ViewParameters::default(), &ScreenGeometry::default(), &ViewConfig::default(), 0);

    assert_eq!(snapshot.basis_fallback(), BasisFallback::ForwardDirection);
    assert!(snapshot.modelview().is_finite());
    assert!(snapshot.projection().is_finite());
    assert!(snapshot.rte_modelview_projection().is_finite());
}

#[test]
fn test_zero_height_screen_is_guarded() {
    let snapshot = recompute(&top_down(10.0, 0.0), &ScreenGeometry::new(640, 0), &ViewConfig::default(), 0);

    assert_eq!(snapshot.height(), 1);
    assert_eq!(snapshot.aspect_ratio(), 640.0);
    assert!(snapshot.projection().is_finite());
}
