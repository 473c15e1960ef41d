/// ViewSnapshot — immutable result of one recompute.
///
/// Every accessor is a plain field read. Matrices, frustum and scalars are
/// produced together from the same clamped pose, so they can never disagree.

use std::sync::Arc;
use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DVec3, Mat4, Vec3};
use crate::camera::{
    BasisFallback, ClipPlanes, FieldOfView, Frustum, ScreenGeometry, ViewMatrices,
    ViewParameters,
};
use crate::surface::ProjectionSurface;
use super::derived_metrics::DerivedMetrics;
use super::rotation::RotationState;

/// Per-view GPU uniform block.
///
/// Layout (std140 compatible, 208 bytes):
/// - 3 x mat4 RTE matrices (modelview, modelview-projection, sky)
/// - vec4 screen: width, height, dp_to_px, unit_to_px_coef
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ViewUniform {
    pub rte_modelview: [[f32; 4]; 4],
    pub rte_modelview_projection: [[f32; 4]; 4],
    pub rte_sky_projection: [[f32; 4]; 4],
    pub screen: [f32; 4],
}

/// Derived view state for one frame.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub(crate) params: ViewParameters,
    pub(crate) screen: ScreenGeometry,
    pub(crate) metrics: DerivedMetrics,
    pub(crate) rotation: f32,
    pub(crate) rotation_state: RotationState,
    pub(crate) focus_pos_normal: Vec3,
    pub(crate) clip_planes: ClipPlanes,
    pub(crate) matrices: ViewMatrices,
    pub(crate) frustum: Frustum,
    pub(crate) surface: Arc<dyn ProjectionSurface>,
    pub(crate) horizontal_layer_offset_dir: i32,
    pub(crate) basis_fallback: BasisFallback,
    pub(crate) zoom_clamped: bool,
    pub(crate) focus_clamped: bool,
}

impl ViewSnapshot {
    // ===== INPUTS (CLAMPED) =====

    /// Pose after zoom and focus clamping.
    pub fn params(&self) -> &ViewParameters {
        &self.params
    }

    pub fn screen(&self) -> &ScreenGeometry {
        &self.screen
    }

    pub fn camera_pos(&self) -> DVec3 {
        self.params.camera_pos()
    }

    pub fn focus_pos(&self) -> DVec3 {
        self.params.focus_pos()
    }

    pub fn up_vec(&self) -> DVec3 {
        self.params.up_vec()
    }

    pub fn tilt(&self) -> f32 {
        self.params.tilt()
    }

    pub fn zoom(&self) -> f32 {
        self.params.zoom()
    }

    /// Rotation in degrees, counter-clockwise from north.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn rotation_state(&self) -> &RotationState {
        &self.rotation_state
    }

    /// Surface normal at the focus point.
    pub fn focus_pos_normal(&self) -> Vec3 {
        self.focus_pos_normal
    }

    pub fn horizontal_layer_offset_dir(&self) -> i32 {
        self.horizontal_layer_offset_dir
    }

    /// Surface every query of this snapshot resolves against.
    pub fn projection_surface(&self) -> &Arc<dyn ProjectionSurface> {
        &self.surface
    }

    // ===== SCREEN =====

    pub fn width(&self) -> i32 {
        self.screen.width()
    }

    pub fn height(&self) -> i32 {
        self.screen.height()
    }

    pub fn half_width(&self) -> f32 {
        self.screen.half_width()
    }

    pub fn half_height(&self) -> f32 {
        self.screen.half_height()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.screen.aspect_ratio()
    }

    // ===== METRICS =====

    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    pub fn fov(&self) -> &FieldOfView {
        self.metrics.fov()
    }

    pub fn two_pow_zoom(&self) -> f64 {
        self.metrics.two_pow_zoom()
    }

    pub fn zoom0_distance(&self) -> f64 {
        self.metrics.zoom0_distance()
    }

    pub fn min_zoom(&self) -> f32 {
        self.metrics.min_zoom()
    }

    pub fn normalized_resolution(&self) -> f32 {
        self.metrics.normalized_resolution()
    }

    pub fn dp_to_px(&self) -> f32 {
        self.metrics.dp_to_px()
    }

    pub fn dpi(&self) -> f32 {
        self.metrics.dpi()
    }

    pub fn unit_to_px_coef(&self) -> f64 {
        self.metrics.unit_to_px_coef()
    }

    pub fn unit_to_dp_coef(&self) -> f64 {
        self.metrics.unit_to_dp_coef()
    }

    // ===== CLIP PLANES =====

    pub fn clip_planes(&self) -> &ClipPlanes {
        &self.clip_planes
    }

    pub fn near(&self) -> f64 {
        self.clip_planes.near
    }

    pub fn far(&self) -> f64 {
        self.clip_planes.far
    }

    pub fn is_sky_visible(&self) -> bool {
        self.clip_planes.sky_visible
    }

    // ===== MATRICES =====

    pub fn matrices(&self) -> &ViewMatrices {
        &self.matrices
    }

    pub fn projection(&self) -> &DMat4 {
        self.matrices.projection()
    }

    pub fn modelview(&self) -> &DMat4 {
        self.matrices.modelview()
    }

    pub fn modelview_projection(&self) -> &DMat4 {
        self.matrices.modelview_projection()
    }

    pub fn rte_modelview(&self) -> &Mat4 {
        self.matrices.rte_modelview()
    }

    pub fn rte_modelview_projection(&self) -> &Mat4 {
        self.matrices.rte_modelview_projection()
    }

    pub fn rte_sky_projection(&self) -> &Mat4 {
        self.matrices.rte_sky_projection()
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    // ===== RECOMPUTE REPORT =====

    /// Fallback applied while building the camera basis.
    pub fn basis_fallback(&self) -> BasisFallback {
        self.basis_fallback
    }

    /// True when the requested zoom was changed by clamping.
    pub fn is_zoom_clamped(&self) -> bool {
        self.zoom_clamped
    }

    /// True when the requested focus was moved by clamping.
    pub fn is_focus_clamped(&self) -> bool {
        self.focus_clamped
    }

    // ===== GPU =====

    /// Uniform block for upload with `bytemuck::bytes_of`.
    pub fn uniform(&self) -> ViewUniform {
        ViewUniform {
            rte_modelview: self.rte_modelview().to_cols_array_2d(),
            rte_modelview_projection: self.rte_modelview_projection().to_cols_array_2d(),
            rte_sky_projection: self.rte_sky_projection().to_cols_array_2d(),
            screen: [
                self.screen.width() as f32,
                self.screen.height() as f32,
                self.metrics.dp_to_px(),
                self.metrics.unit_to_px_coef() as f32,
            ],
        }
    }
}

#[cfg(test)]
#[path = "view_snapshot_tests.rs"]
mod tests;
