//! View module — clamping, recompute, snapshot and screen queries.
//!
//! `recompute()` is the pure pipeline; `ViewState` owns the pose, tracks
//! dirtiness and keeps the last `ViewSnapshot`.

mod derived_metrics;
mod rotation;
mod zoom_pan_clamp;
mod view_snapshot;
mod recompute;
mod screen_mapper;
mod view_state;

pub use derived_metrics::{
    DerivedMetrics,
    two_pow, dp_to_px, normalized_resolution, zoom0_distance, units_per_pixel,
};
pub use rotation::{RotationState, calculate_rotation};
pub use zoom_pan_clamp::{compute_min_zoom, clamp_zoom, clamp_focus_pos};
pub use view_snapshot::{ViewSnapshot, ViewUniform};
pub use recompute::recompute;
pub use screen_mapper::{screen_to_world, world_to_screen, estimate_world_pixel_measure};
pub use view_state::{ViewState, DIRTY_CAMERA, DIRTY_SCREEN, DIRTY_LAYER_OFFSET};
