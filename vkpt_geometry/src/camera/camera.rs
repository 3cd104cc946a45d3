/// Camera: perspective camera state driven by the caller.
///
/// The camera keeps two poses: the committed pose every matrix is derived
/// from, and a pending (target) pose the caller steers. `update(dt)` folds the
/// accumulated move delta into the pending pose and reconciles the two
/// according to the configured `FollowPolicy`.
///
/// Matrices follow the Vulkan conventions: right-handed view space looking
/// down -Z, clip-space Y pointing down, depth in [0, 1].

use glam::{Mat4, Quat, Vec3};
use crate::config::{CameraConfig, FollowPolicy};

/// Position plus three independent orientation quaternions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// Rotation about X
    pub pitch: Quat,
    /// Rotation about Y
    pub yaw: Quat,
    /// Rotation about Z
    pub roll: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CameraPose {
    /// At the origin, looking down -Z.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        pitch: Quat::IDENTITY,
        yaw: Quat::IDENTITY,
        roll: Quat::IDENTITY,
    };

    /// Build a pose from Euler-style angles in degrees.
    pub fn from_angles(position: Vec3, pitch_degrees: f32, yaw_degrees: f32, roll_degrees: f32) -> Self {
        Self {
            position,
            pitch: Quat::from_rotation_x(pitch_degrees.to_radians()),
            yaw: Quat::from_rotation_y(yaw_degrees.to_radians()),
            roll: Quat::from_rotation_z(roll_degrees.to_radians()),
        }
    }

    /// Combined orientation: yaw, then pitch, then roll (applied right to left).
    pub fn rotation(&self) -> Quat {
        (self.yaw * self.pitch * self.roll).normalize()
    }

    /// `T(position) * R(rotation)`
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position)
    }
}

/// Reconcile the committed pose with the pending one after `dt` seconds.
///
/// Pure function: no camera state is touched.
pub fn reconcile(committed: &CameraPose, pending: &CameraPose, dt: f32, policy: FollowPolicy) -> CameraPose {
    match policy {
        FollowPolicy::Snap => *pending,
        FollowPolicy::Smooth { half_life } => {
            if half_life <= 0.0 {
                return *pending;
            }
            if dt <= 0.0 {
                return *committed;
            }

            let alpha = 1.0 - 0.5_f32.powf(dt / half_life);
            CameraPose {
                position: committed.position.lerp(pending.position, alpha),
                pitch: committed.pitch.slerp(pending.pitch, alpha),
                yaw: committed.yaw.slerp(pending.yaw, alpha),
                roll: committed.roll.slerp(pending.roll, alpha),
            }
        }
    }
}

/// Perspective projection with Vulkan clip conventions (depth [0, 1], Y down).
pub(crate) fn vulkan_perspective(fov_y_radians: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    flip_clip_y(Mat4::perspective_rh(fov_y_radians, aspect_ratio, near, far))
}

/// Negate row 1 of a projection matrix.
pub(crate) fn flip_clip_y(mut m: Mat4) -> Mat4 {
    m.x_axis.y = -m.x_axis.y;
    m.y_axis.y = -m.y_axis.y;
    m.z_axis.y = -m.z_axis.y;
    m.w_axis.y = -m.w_axis.y;
    m
}

/// Perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    pose: CameraPose,
    target: CameraPose,
    move_delta: Vec3,
    fov_degrees: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,
    follow: FollowPolicy,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl Camera {
    /// Camera at the origin looking down -Z with the given perspective.
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            pose: CameraPose::IDENTITY,
            target: CameraPose::IDENTITY,
            move_delta: Vec3::ZERO,
            fov_degrees: config.fov_degrees,
            aspect_ratio: config.aspect_ratio,
            near_plane: config.near_plane,
            far_plane: config.far_plane,
            follow: config.follow,
        }
    }

    // ===== GETTERS =====

    /// Committed pose (what the matrices are built from).
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Pending pose the next `update` moves toward.
    pub fn target(&self) -> &CameraPose {
        &self.target
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    /// Translation accumulated since the last `update`.
    pub fn move_delta(&self) -> Vec3 {
        self.move_delta
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    pub fn follow_policy(&self) -> FollowPolicy {
        self.follow
    }

    // ===== SETTERS =====

    /// Teleport: sets both the committed and the pending position.
    pub fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
        self.target.position = position;
    }

    /// Teleport: sets both the committed and the pending orientation (degrees).
    pub fn set_orientation(&mut self, pitch_degrees: f32, yaw_degrees: f32, roll_degrees: f32) {
        let oriented = CameraPose::from_angles(self.pose.position, pitch_degrees, yaw_degrees, roll_degrees);
        self.pose = oriented;
        self.target = CameraPose { position: self.target.position, ..oriented };
    }

    /// Set only the pending position.
    pub fn set_target_position(&mut self, position: Vec3) {
        self.target.position = position;
    }

    /// Set only the pending orientation (degrees).
    pub fn set_target_orientation(&mut self, pitch_degrees: f32, yaw_degrees: f32, roll_degrees: f32) {
        self.target = CameraPose::from_angles(self.target.position, pitch_degrees, yaw_degrees, roll_degrees);
    }

    /// Accumulate a translation, applied to the pending pose on `update`.
    pub fn translate(&mut self, delta: Vec3) {
        self.move_delta += delta;
    }

    pub fn set_perspective(&mut self, fov_degrees: f32, aspect_ratio: f32, near_plane: f32, far_plane: f32) {
        self.fov_degrees = fov_degrees;
        self.aspect_ratio = aspect_ratio;
        self.near_plane = near_plane;
        self.far_plane = far_plane;
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn set_follow_policy(&mut self, follow: FollowPolicy) {
        self.follow = follow;
    }

    /// Apply the move delta to the pending pose, then reconcile.
    pub fn update(&mut self, dt: f32) {
        self.target.position += self.move_delta;
        self.move_delta = Vec3::ZERO;
        self.pose = reconcile(&self.pose, &self.target, dt, self.follow);
    }

    // ===== MATRICES =====

    /// World transform of the committed pose.
    pub fn world_transform(&self) -> Mat4 {
        self.pose.world_transform()
    }

    /// Inverse of the world transform.
    pub fn view_matrix(&self) -> Mat4 {
        self.world_transform().inverse()
    }

    /// Perspective projection, depth [0, 1], clip-space Y flipped.
    ///
    /// Singular when `near_plane == far_plane` or the aspect ratio is zero.
    pub fn projection_matrix(&self) -> Mat4 {
        vulkan_perspective(self.fov_degrees.to_radians(), self.aspect_ratio, self.near_plane, self.far_plane)
    }

    /// `projection * view`
    pub fn camera_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
