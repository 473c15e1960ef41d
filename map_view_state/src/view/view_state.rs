/// ViewState — the per-frame view facade.
///
/// Holds the raw camera pose and screen size, tracks whether they changed,
/// and keeps the snapshot produced by the last recompute. Setters only flip
/// dirty bits; `calculate_view_state()` is the single recompute entry point.
///
/// State cycle:
/// - dirty: a setter (or `camera_changed()`) touched pose, screen or layer offset
/// - clean: the snapshot matches the current inputs
///
/// A new `ViewState` starts dirty and has no snapshot until the first
/// `calculate_view_state()`.

use glam::{DVec3, Vec2};
use crate::camera::{BasisFallback, ScreenGeometry, ViewParameters};
use crate::config::ViewConfig;
use crate::error::{Error, Result};
use super::recompute::recompute;
use super::screen_mapper;
use super::view_snapshot::ViewSnapshot;

/// Camera pose changed
pub const DIRTY_CAMERA: u32 = 1 << 0;
/// Screen size changed
pub const DIRTY_SCREEN: u32 = 1 << 1;
/// Horizontal layer offset direction changed
pub const DIRTY_LAYER_OFFSET: u32 = 1 << 2;

const SOURCE: &str = "mapview::ViewState";

/// Camera pose, screen size and the last computed view snapshot.
#[derive(Debug, Clone)]
pub struct ViewState {
    params: ViewParameters,
    screen: ScreenGeometry,
    dirty: u32,
    camera_changed: bool,
    horizontal_layer_offset_dir: i32,
    snapshot: Option<ViewSnapshot>,
}

impl ViewState {
    /// Create an uninitialized view state (dirty, no snapshot).
    pub fn new() -> Self {
        Self {
            params: ViewParameters::default(),
            screen: ScreenGeometry::default(),
            dirty: DIRTY_CAMERA | DIRTY_SCREEN,
            camera_changed: false,
            horizontal_layer_offset_dir: 0,
            snapshot: None,
        }
    }

    // ===== POSE =====

    /// Raw (unclamped until the next recompute) camera pose.
    pub fn view_parameters(&self) -> &ViewParameters {
        &self.params
    }

    pub fn set_view_parameters(&mut self, params: ViewParameters) {
        self.params = params;
        self.dirty |= DIRTY_CAMERA;
    }

    pub fn camera_pos(&self) -> DVec3 {
        self.params.camera_pos()
    }

    pub fn set_camera_pos(&mut self, camera_pos: DVec3) {
        self.params.set_camera_pos(camera_pos);
        self.dirty |= DIRTY_CAMERA;
    }

    pub fn focus_pos(&self) -> DVec3 {
        self.params.focus_pos()
    }

    pub fn set_focus_pos(&mut self, focus_pos: DVec3) {
        self.params.set_focus_pos(focus_pos);
        self.dirty |= DIRTY_CAMERA;
    }

    pub fn up_vec(&self) -> DVec3 {
        self.params.up_vec()
    }

    pub fn set_up_vec(&mut self, up_vec: DVec3) {
        self.params.set_up_vec(up_vec);
        self.dirty |= DIRTY_CAMERA;
    }

    pub fn tilt(&self) -> f32 {
        self.params.tilt()
    }

    pub fn set_tilt(&mut self, tilt: f32) {
        self.params.set_tilt(tilt);
        self.dirty |= DIRTY_CAMERA;
    }

    pub fn zoom(&self) -> f32 {
        self.params.zoom()
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.params.set_zoom(zoom);
        self.dirty |= DIRTY_CAMERA;
    }

    /// Force a recompute on the next `calculate_view_state()`.
    ///
    /// Needed after configuration changes other than swapping the surface.
    pub fn camera_changed(&mut self) {
        self.dirty |= DIRTY_CAMERA;
    }

    // ===== SCREEN =====

    pub fn screen(&self) -> &ScreenGeometry {
        &self.screen
    }

    /// Set the screen size in pixels. Dimensions below 1 are clamped to 1.
    pub fn set_screen_size(&mut self, width: i32, height: i32) {
        self.screen = ScreenGeometry::new(width, height);
        self.dirty |= DIRTY_SCREEN;
    }

    pub fn width(&self) -> i32 {
        self.screen.width()
    }

    pub fn height(&self) -> i32 {
        self.screen.height()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.screen.aspect_ratio()
    }

    // ===== HORIZONTAL LAYER OFFSET =====

    pub fn horizontal_layer_offset_dir(&self) -> i32 {
        self.horizontal_layer_offset_dir
    }

    /// Set the seamless panning direction: -1 (west), 0 (none) or 1 (east).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for any other value; the current
    /// direction is kept.
    pub fn set_horizontal_layer_offset_dir(&mut self, dir: i32) -> Result<()> {
        if !(-1..=1).contains(&dir) {
            let message = format!("horizontal layer offset direction {} not in -1..=1", dir);
            crate::view_error!(SOURCE, "{}", message);
            return Err(Error::InvalidParameter(message));
        }
        if dir != self.horizontal_layer_offset_dir {
            self.horizontal_layer_offset_dir = dir;
            self.dirty |= DIRTY_LAYER_OFFSET;
        }
        Ok(())
    }

    // ===== RECOMPUTE =====

    /// True when inputs changed since the last recompute.
    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    /// Dirty bits (`DIRTY_CAMERA`, `DIRTY_SCREEN`, `DIRTY_LAYER_OFFSET`).
    pub fn dirty_flags(&self) -> u32 {
        self.dirty
    }

    /// True when the last `calculate_view_state()` produced a new snapshot.
    pub fn is_camera_changed(&self) -> bool {
        self.camera_changed
    }

    /// Recompute the snapshot if the inputs are dirty or the configured
    /// projection surface was swapped. Returns whether a recompute ran.
    ///
    /// The clamped pose is written back, so the next frame starts from it.
    pub fn calculate_view_state(&mut self, config: &ViewConfig) -> bool {
        let surface_swapped = self
            .snapshot
            .as_ref()
            .map_or(false, |s| !std::sync::Arc::ptr_eq(s.projection_surface(), &config.projection_surface));

        if !self.is_dirty() && !surface_swapped {
            self.camera_changed = false;
            return false;
        }

        let snapshot = recompute(&self.params, &self.screen, config, self.horizontal_layer_offset_dir);

        if snapshot.basis_fallback() != BasisFallback::None {
            crate::view_warn!(SOURCE,
                "Degenerate camera pose, using fallback {:?} (camera {:?}, focus {:?}, up {:?})",
                snapshot.basis_fallback(), self.params.camera_pos(), self.params.focus_pos(),
                self.params.up_vec());
        }
        if snapshot.is_zoom_clamped() {
            crate::view_info!(SOURCE, "Zoom clamped from {} to {}", self.params.zoom(), snapshot.zoom());
        }
        if snapshot.is_focus_clamped() {
            crate::view_info!(SOURCE, "Focus clamped from {:?} to {:?}",
                self.params.focus_pos(), snapshot.focus_pos());
        }
        crate::view_debug!(SOURCE,
            "Recomputed view (flags {:#05b}): zoom {}, tilt {}, near {:.3}, far {:.3}, sky {}",
            self.dirty, snapshot.zoom(), snapshot.tilt(), snapshot.near(), snapshot.far(),
            snapshot.is_sky_visible());

        self.params = *snapshot.params();
        self.snapshot = Some(snapshot);
        self.dirty = 0;
        self.camera_changed = true;
        true
    }

    /// Snapshot of the last recompute.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotCalculated` before the first `calculate_view_state()`.
    pub fn snapshot(&self) -> Result<&ViewSnapshot> {
        match &self.snapshot {
            Some(snapshot) => Ok(snapshot),
            None => {
                crate::view_error!(SOURCE, "View state queried before the first calculation");
                Err(Error::NotCalculated)
            }
        }
    }

    /// True once a snapshot exists.
    pub fn is_calculated(&self) -> bool {
        self.snapshot.is_some()
    }

    // ===== QUERIES =====

    /// Unproject a pixel onto the surface at `height`.
    ///
    /// NaN vector on a miss, and before the first calculation.
    pub fn screen_to_world(&self, screen_pos: Vec2, height: f64, config: Option<&ViewConfig>) -> DVec3 {
        match &self.snapshot {
            Some(snapshot) => screen_mapper::screen_to_world(snapshot, screen_pos, height, config),
            None => DVec3::NAN,
        }
    }

    /// Project a world position to pixels. NaN before the first calculation.
    pub fn world_to_screen(&self, world_pos: DVec3, config: Option<&ViewConfig>) -> Vec2 {
        match &self.snapshot {
            Some(snapshot) => screen_mapper::world_to_screen(snapshot, world_pos, config),
            None => Vec2::NAN,
        }
    }

    /// Approximate world units per pixel at the focus. NaN before the first calculation.
    pub fn estimate_world_pixel_measure(&self) -> f64 {
        match &self.snapshot {
            Some(snapshot) => screen_mapper::estimate_world_pixel_measure(snapshot),
            None => f64::NAN,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod tests;
