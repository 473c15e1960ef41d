//! Projection surfaces — the geometry the map is draped on.
//!
//! The view state never owns a surface: it borrows a shared handle from the
//! configuration at the start of every recompute and keeps that handle in the
//! resulting snapshot, so all queries of one frame resolve against the same
//! surface even if the owner swaps it in the meantime.

mod projection_surface;
mod planar_surface;
mod spherical_surface;

pub use projection_surface::ProjectionSurface;
pub use planar_surface::PlanarSurface;
pub use spherical_surface::SphericalSurface;
