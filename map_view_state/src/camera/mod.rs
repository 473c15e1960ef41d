//! Camera module — pose, screen, matrices and frustum.
//!
//! Passive data containers and pure builders. Nothing here keeps state
//! between frames; the `view` module owns the pose and drives the builders.

mod view_parameters;
mod screen_geometry;
mod projection;
mod frustum;
mod frustum_builder;

pub use view_parameters::ViewParameters;
pub use screen_geometry::ScreenGeometry;
pub use projection::{
    FieldOfView, CameraBasis, BasisFallback, ViewMatrices,
    build_perspective, build_look_at, build_rte,
};
pub use frustum::{
    Frustum, FrustumTest, AABB,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use frustum_builder::{
    ClipPlanes, compute_near_far, build_frustum,
    NEAR_PLANE_FACTOR, MAX_FAR_FACTOR, MIN_HEIGHT_FACTOR, FAR_PLANE_MARGIN, SKY_FAR_FACTOR,
};
