//! Camera module: camera state, projection, frustum and light shadows.
//!
//! Value types only. Nothing here owns a camera on the caller's behalf:
//! a `Projector` or `Frustum` is a snapshot of the camera at the moment it
//! was built.

mod camera;
mod frustum;
mod light;
mod projector;

pub use camera::{reconcile, Camera, CameraPose};
pub use frustum::{
    Frustum, FrustumTest, VULKAN_CLIP,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
    NEAR_TOP_LEFT, NEAR_TOP_RIGHT, NEAR_BOTTOM_LEFT, NEAR_BOTTOM_RIGHT,
    FAR_TOP_LEFT, FAR_TOP_RIGHT, FAR_BOTTOM_LEFT, FAR_BOTTOM_RIGHT,
};
pub use light::{Light, LightUniform};
pub use projector::Projector;
