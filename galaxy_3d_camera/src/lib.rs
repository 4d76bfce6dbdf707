/*!
# Galaxy 3D Camera

Camera subsystem of the Galaxy3D rendering engine.

A `Camera` hangs off a scene-graph node. It turns the node's world transform
into a view matrix, builds a perspective projection from its field of view,
clip planes and viewport, and exposes the view frustum (as planes and as
eight corner points) for culling and debug visualization.

## Architecture

- **Camera**: view/projection matrices, dirty tracking, corner cache, bounds
- **Frustum**: six planes extracted from a view-projection matrix
- **BoundingBox**: axis-aligned box used for bounds and culling queries
- **NodeParent**: what the camera needs from its scene-graph parent
- **projection**: perspective matrix and frustum corner formulas

All math is double precision (`glam::DMat4`, `glam::DVec3`).
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine services (logger)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
