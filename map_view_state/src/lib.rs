/*!
# Map View State

Camera view state for a map renderer.

Turns a camera pose (position, focus, up vector, tilt, zoom) and a screen
size into the matrices, frustum and scalars a renderer needs each frame,
and maps between screen pixels and world positions on a flat or spherical
projection surface.

## Architecture

- **ViewParameters / ScreenGeometry**: raw inputs, mutated through setters
- **ZoomPanClamp**: minimum zoom and restricted panning
- **ProjectionBuilder**: perspective, look-at and relative-to-eye matrices
- **FrustumBuilder**: adaptive near/far planes, sky visibility, frustum
- **ScreenMapper**: screen <-> world queries
- **ViewState**: dirty tracking and the immutable per-frame `ViewSnapshot`

World coordinates are kept in double precision. Float matrices are
relative to the eye, so vertices must be uploaded as `world - camera_pos`.
*/

// Internal modules
mod error;
mod config;
pub mod log;
pub mod camera;
pub mod surface;
pub mod view;

// Main mapview namespace module
pub mod mapview {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{
        ViewConfig, MapRange, MapBounds,
        EARTH_RADIUS, WORLD_SIZE, HALF_WORLD_SIZE, UNSCALED_DPI,
    };

    // View facade and snapshot
    pub use crate::view::{ViewState, ViewSnapshot, ViewUniform, RotationState, DerivedMetrics};

    // Projection surfaces
    pub use crate::surface::{ProjectionSurface, PlanarSurface, SphericalSurface};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Log, Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // View sub-module with the pure pipeline functions
    pub mod view {
        pub use crate::view::*;
    }
}

// Re-export math library at crate root
pub use glam;
