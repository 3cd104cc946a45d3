//! Configuration for cameras and shadow-matrix construction.
//!
//! Plain structs with sensible `Default`s. Nothing here is read from disk;
//! the harness builds these in code and hands them to `Camera` / `Frustum`.

use glam::Vec3;

/// How `Camera::update` reconciles the committed pose with the pending one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowPolicy {
    /// Committed pose jumps to the pending pose on every update.
    Snap,
    /// Exponential approach: after `half_life` seconds half of the remaining
    /// distance (and rotation) has been covered.
    Smooth {
        half_life: f32,
    },
}

impl Default for FollowPolicy {
    fn default() -> Self {
        FollowPolicy::Snap
    }
}

/// What to do when the analytic up vector cannot be built for a light
/// direction (light direction horizontal, or parallel to the world up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpVectorFallback {
    /// Fail with `Error::DegenerateLightDirection`.
    Reject,
    /// Use the world axis least aligned with the light direction.
    LeastAligned,
    /// Use this vector (must not be parallel to the light direction).
    Fixed(Vec3),
}

impl Default for UpVectorFallback {
    fn default() -> Self {
        UpVectorFallback::LeastAligned
    }
}

/// Far plane of the spot-light shadow projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpotFarPlane {
    /// Use the `distance` argument of `perspective_shadow_matrix`.
    Distance,
    /// Always use this far plane, ignoring `distance`.
    Fixed(f32),
}

impl Default for SpotFarPlane {
    fn default() -> Self {
        SpotFarPlane::Distance
    }
}

/// Perspective camera configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Width / height
    pub aspect_ratio: f32,
    /// Near clip plane distance (> 0)
    pub near_plane: f32,
    /// Far clip plane distance (> near)
    pub far_plane: f32,
    /// Pose reconciliation policy
    pub follow: FollowPolicy,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            aspect_ratio: 1.0,
            near_plane: 0.1,
            far_plane: 100.0,
            follow: FollowPolicy::Snap,
        }
    }
}

/// Shadow-matrix construction settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    /// Fallback when the analytic up vector is undefined
    pub up_fallback: UpVectorFallback,
    /// Far plane of spot-light projections
    pub spot_far_plane: SpotFarPlane,
    /// Full field of view of point-light projections, in degrees
    pub point_fov_degrees: f32,
    /// Near plane of point-light projections
    pub point_near_plane: f32,
    /// View direction whose x/z the analytic up vector keeps
    pub reference_view_direction: Vec3,
    /// |light.y| (or |cross|) below this counts as degenerate
    pub degenerate_epsilon: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            up_fallback: UpVectorFallback::LeastAligned,
            spot_far_plane: SpotFarPlane::Distance,
            point_fov_degrees: 45.0,
            point_near_plane: 0.1,
            reference_view_direction: Vec3::NEG_Z,
            degenerate_epsilon: 1e-6,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
