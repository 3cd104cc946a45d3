/*!
# VKPT Geometry

Camera, projection and shadow-matrix math for the VKPT Vulkan pipeline test
harness.

Everything here is plain value math on top of `glam`; no Vulkan handles are
touched. Matrices follow the Vulkan conventions used by the harness:
right-handed view space looking down -Z, clip-space Y pointing down and depth
in [0, 1].

## Architecture

- **Camera**: committed and pending pose, perspective parameters
- **Projector**: world ⇄ viewport mapping for one camera snapshot
- **Frustum**: view-volume corners, culling planes and shadow matrices
- **Light**: directional light with shadow-matrix convenience and GPU packing
- **BoundingBox / Ray / Viewport**: supporting geometry

Fallible operations return `vkpt::Result`; failures are also reported through
the replaceable logger in `vkpt::log`.
*/

// Internal modules
mod error;
pub mod log;
pub mod config;
pub mod geometry;
pub mod camera;

// Main vkpt namespace module
pub mod vkpt {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and functions, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    // Configuration sub-module
    pub mod config {
        pub use crate::config::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
