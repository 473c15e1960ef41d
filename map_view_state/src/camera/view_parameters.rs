/// ViewParameters — raw camera pose.
///
/// Plain data: setters store and compute nothing. Staleness is tracked by
/// the owning `ViewState`, which marks itself dirty whenever a setter is
/// routed through it.

use glam::{DQuat, DVec3};

/// Camera pose: position, focus point, up direction, tilt and zoom.
///
/// Tilt is measured in degrees from the surface normal: 0 looks straight
/// down, 90 looks at the horizon. Rotation is not stored here; it is derived
/// from the pose during a recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParameters {
    camera_pos: DVec3,
    focus_pos: DVec3,
    up_vec: DVec3,
    tilt: f32,
    zoom: f32,
}

impl ViewParameters {
    pub fn new(camera_pos: DVec3, focus_pos: DVec3, up_vec: DVec3, tilt: f32, zoom: f32) -> Self {
        Self {
            camera_pos,
            focus_pos,
            up_vec,
            tilt,
            zoom,
        }
    }

    // ===== GETTERS =====

    pub fn camera_pos(&self) -> DVec3 {
        self.camera_pos
    }

    pub fn focus_pos(&self) -> DVec3 {
        self.focus_pos
    }

    pub fn up_vec(&self) -> DVec3 {
        self.up_vec
    }

    /// Tilt angle in degrees.
    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Distance between camera and focus.
    pub fn camera_distance(&self) -> f64 {
        self.camera_pos.distance(self.focus_pos)
    }

    /// True when camera and focus coincide and no view direction exists.
    pub fn is_degenerate(&self) -> bool {
        self.camera_distance() < f64::EPSILON
    }

    // ===== SETTERS =====

    pub fn set_camera_pos(&mut self, camera_pos: DVec3) {
        self.camera_pos = camera_pos;
    }

    pub fn set_focus_pos(&mut self, focus_pos: DVec3) {
        self.focus_pos = focus_pos;
    }

    pub fn set_up_vec(&mut self, up_vec: DVec3) {
        self.up_vec = up_vec;
    }

    pub fn set_tilt(&mut self, tilt: f32) {
        self.tilt = tilt;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Move the focus, dragging the camera along by the same offset.
    pub fn translate_focus(&mut self, focus_pos: DVec3) {
        let delta = focus_pos - self.focus_pos;
        self.focus_pos = focus_pos;
        self.camera_pos += delta;
    }

    /// Move the focus, carrying the camera offset and the up vector through
    /// `rotation`.
    ///
    /// On a curved surface, `rotation` takes the old focus normal to the new
    /// one, so tilt and heading relative to the surface are kept.
    pub fn rotate_focus(&mut self, focus_pos: DVec3, rotation: DQuat) {
        let offset = self.camera_pos - self.focus_pos;
        self.focus_pos = focus_pos;
        self.camera_pos = focus_pos + rotation * offset;
        self.up_vec = rotation * self.up_vec;
    }

    /// Place the camera `distance` away from the focus, keeping its direction.
    pub fn set_camera_distance(&mut self, distance: f64) {
        if let Some(dir) = (self.camera_pos - self.focus_pos).try_normalize() {
            self.camera_pos = self.focus_pos + dir * distance;
        }
    }
}

impl Default for ViewParameters {
    /// Uninitialized pose: camera and focus at the origin, up along +Y.
    fn default() -> Self {
        Self::new(DVec3::ZERO, DVec3::ZERO, DVec3::Y, 0.0, 0.0)
    }
}

#[cfg(test)]
#[path = "view_parameters_tests.rs"]
mod tests;
