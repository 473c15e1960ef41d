use glam::{DQuat, DVec3};
use super::*;

fn create_test_parameters() -> ViewParameters {
    ViewParameters::new(
        DVec3::new(0.0, 0.0, 10.0),
        DVec3::ZERO,
        DVec3::Y,
        0.0,
        3.0,
    )
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_stores_pose() {
    let params = create_test_parameters();
    assert_eq!(params.camera_pos(), DVec3::new(0.0, 0.0, 10.0));
    assert_eq!(params.focus_pos(), DVec3::ZERO);
    assert_eq!(params.up_vec(), DVec3::Y);
    assert_eq!(params.zoom(), 3.0);
    assert_eq!(params.camera_distance(), 10.0);
    assert!(!params.is_degenerate());
}

#[test]
fn test_default_is_degenerate() {
    let params = ViewParameters::default();
    assert!(params.is_degenerate());
    assert_eq!(params.up_vec(), DVec3::Y);
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_setters_store_values() {
    let mut params = create_test_parameters();
    params.set_camera_pos(DVec3::new(1.0, 2.0, 3.0));
    params.set_focus_pos(DVec3::new(1.0, 2.0, 0.0));
    params.set_up_vec(DVec3::X);
    params.set_tilt(30.0);
    params.set_zoom(7.5);

    assert_eq!(params.camera_pos(), DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(params.focus_pos(), DVec3::new(1.0, 2.0, 0.0));
    assert_eq!(params.up_vec(), DVec3::X);
    assert_eq!(params.tilt(), 30.0);
    assert_eq!(params.zoom(), 7.5);
}

#[test]
fn test_translate_focus_drags_camera() {
    let mut params = create_test_parameters();
    params.translate_focus(DVec3::new(100.0, -50.0, 0.0));

    assert_eq!(params.focus_pos(), DVec3::new(100.0, -50.0, 0.0));
    assert_eq!(params.camera_pos(), DVec3::new(100.0, -50.0, 10.0));
}

#[test]
fn test_rotate_focus_turns_offset_and_up() {
    let mut params = ViewParameters::new(
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(5.0, 0.0, 0.0),
        DVec3::Z,
        0.0,
        3.0,
    );
    let rotation = DQuat::from_rotation_arc(DVec3::X, DVec3::Y);
    params.rotate_focus(DVec3::new(0.0, 5.0, 0.0), rotation);

    assert_eq!(params.focus_pos(), DVec3::new(0.0, 5.0, 0.0));
    assert!((params.camera_pos() - DVec3::new(0.0, 10.0, 0.0)).length() < 1e-12);
    assert!((params.up_vec() - DVec3::Z).length() < 1e-12);
}

#[test]
fn test_rotate_focus_identity_matches_translate() {
    let mut rotated = create_test_parameters();
    let mut translated = create_test_parameters();
    let target = DVec3::new(100.0, -50.0, 0.0);

    rotated.rotate_focus(target, DQuat::IDENTITY);
    translated.translate_focus(target);

    assert_eq!(rotated, translated);
}

#[test]
fn test_set_camera_distance_keeps_direction() {
    let mut params = ViewParameters::new(
        DVec3::new(0.0, -3.0, 4.0),
        DVec3::ZERO,
        DVec3::Y,
        36.87,
        0.0,
    );
    params.set_camera_distance(10.0);

    assert!((params.camera_pos() - DVec3::new(0.0, -6.0, 8.0)).length() < 1e-12);
}

#[test]
fn test_set_camera_distance_ignores_degenerate_pose() {
    let mut params = ViewParameters::default();
    params.set_camera_distance(10.0);
    assert_eq!(params.camera_pos(), DVec3::ZERO);
}
