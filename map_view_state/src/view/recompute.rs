/// Recompute — the pure pipeline turning a pose into a `ViewSnapshot`.
///
/// Fixed order: clamp zoom, clamp focus, derive metrics and rotation, plan
/// near/far, build matrices, extract the frustum from the final matrices.
/// The projection surface handle is taken from the configuration once, at
/// entry, and every stage plus the snapshot use that same handle.

use std::sync::Arc;
use glam::DQuat;
use crate::camera::{
    build_frustum, build_perspective, compute_near_far, CameraBasis, FieldOfView,
    ScreenGeometry, ViewMatrices, ViewParameters,
};
use crate::config::ViewConfig;
use super::derived_metrics::DerivedMetrics;
use super::rotation::{calculate_rotation, RotationState};
use super::view_snapshot::ViewSnapshot;
use super::zoom_pan_clamp::{clamp_focus_pos, clamp_zoom, compute_min_zoom};

/// Compute the full view state for `params` on `screen`.
///
/// Deterministic: identical inputs give bit-identical snapshots.
pub fn recompute(
    params: &ViewParameters,
    screen: &ScreenGeometry,
    config: &ViewConfig,
    horizontal_layer_offset_dir: i32,
) -> ViewSnapshot {
    let surface = Arc::clone(&config.projection_surface);
    let fov = FieldOfView::new(config.field_of_view_y, screen.aspect_ratio());
    let mut clamped = *params;

    // ===== ZOOM =====
    let min_zoom = if config.restricted_panning {
        config
            .zoom_range
            .min
            .max(compute_min_zoom(&clamped, screen, config, surface.as_ref()))
    } else {
        config.zoom_range.min
    };

    let zoom = clamp_zoom(clamped.zoom(), min_zoom, config);
    let metrics = DerivedMetrics::new(zoom, min_zoom, fov, screen, config);
    let zoom_clamped = zoom.to_bits() != params.zoom().to_bits();
    if zoom_clamped {
        clamped.set_zoom(zoom);
        clamped.set_camera_distance(metrics.zoom_distance());
    }

    // ===== FOCUS =====
    let focus = clamp_focus_pos(&clamped, screen, config, surface.as_ref());
    let focus_clamped = focus != clamped.focus_pos();
    if focus_clamped {
        let from = surface.normal_at(clamped.focus_pos());
        let to = surface.normal_at(focus);
        clamped.rotate_focus(focus, DQuat::from_rotation_arc(from, to));
    }

    // ===== ORIENTATION =====
    let basis = CameraBasis::new(clamped.camera_pos(), clamped.focus_pos(), clamped.up_vec());
    let rotation = calculate_rotation(&clamped, surface.as_ref());
    let focus_pos_normal = surface.normal_at(clamped.focus_pos()).as_vec3();

    // ===== MATRICES =====
    let clip_planes = compute_near_far(&clamped, &fov, surface.as_ref());
    let projection = build_perspective(
        fov.half_fov_y(),
        screen.aspect_ratio(),
        clip_planes.near,
        clip_planes.far,
    );
    let sky_projection = build_perspective(
        fov.half_fov_y(),
        screen.aspect_ratio(),
        clip_planes.near,
        clip_planes.sky_far,
    );
    let matrices = ViewMatrices::new(
        projection,
        sky_projection,
        basis.view_matrix(clamped.camera_pos()),
    );
    let frustum = build_frustum(matrices.modelview_projection());

    ViewSnapshot {
        params: clamped,
        screen: *screen,
        metrics,
        rotation,
        rotation_state: RotationState::from_basis(&basis),
        focus_pos_normal,
        clip_planes,
        matrices,
        frustum,
        surface,
        horizontal_layer_offset_dir,
        basis_fallback: basis.fallback(),
        zoom_clamped,
        focus_clamped,
    }
}

#[cfg(test)]
#[path = "recompute_tests.rs"]
mod tests;
