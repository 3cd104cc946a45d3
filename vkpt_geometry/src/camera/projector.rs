/// Projector: world space ⇄ viewport space mapping.
///
/// Captures the camera matrix and viewport at construction: later changes to
/// the camera do not affect an existing Projector.
///
/// Viewport space has its origin at the top-left corner with Y growing
/// downward. Depth uses the same [0, 1] convention as the projection matrix
/// (0 = near plane, 1 = far plane), remapped through the viewport depth range.

use glam::{DMat4, DVec4, Mat4, Vec2, Vec3};
use crate::error::{Error, Result};
use crate::geometry::{Ray, Viewport};
use super::camera::Camera;

const SOURCE: &str = "vkpt::Projector";

/// Clip-space z may undershoot zero by this fraction of |w| on the near plane.
const NEAR_PLANE_TOLERANCE: f32 = 1e-4;

/// Immutable world/viewport mapping for one camera snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    camera_matrix: Mat4,
    viewport: Viewport,
}

impl Projector {
    /// Snapshot `camera.camera_matrix()` together with the viewport.
    pub fn new(camera: &Camera, viewport: Viewport) -> Self {
        Self::from_matrix(camera.camera_matrix(), viewport)
    }

    /// Build from a raw `projection * view` matrix.
    pub fn from_matrix(camera_matrix: Mat4, viewport: Viewport) -> Self {
        Self { camera_matrix, viewport }
    }

    pub fn camera_matrix(&self) -> &Mat4 {
        &self.camera_matrix
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Log a failure before handing it back to the caller.
    fn warn_and_return(error: Error, operation: &str, point: Vec3) -> Error {
        crate::vkpt_warn!(SOURCE, "{} of {:?} failed: {}", operation, point, error);
        error
    }

    /// World point → viewport `(x, y, depth)`.
    ///
    /// # Errors
    ///
    /// - `UninitializedCamera` if the camera matrix is identity
    /// - `PointAtInfinity` if the homogeneous w is zero
    /// - `BehindNearPlane` if the point is in front of the near plane
    pub fn project(&self, world: Vec3) -> Result<Vec3> {
        if self.camera_matrix == Mat4::IDENTITY {
            return Err(Self::warn_and_return(Error::UninitializedCamera, "project", world));
        }

        let clip = self.camera_matrix * world.extend(1.0);
        if clip.w == 0.0 {
            return Err(Self::warn_and_return(Error::PointAtInfinity, "project", world));
        }
        if clip.z < -NEAR_PLANE_TOLERANCE * clip.w.abs() {
            return Err(Self::warn_and_return(Error::BehindNearPlane, "project", world));
        }

        let ndc = clip.truncate() / clip.w;
        let vp = &self.viewport;

        // The projection already flips Y, so NDC -1 is the top edge
        Ok(Vec3::new(
            vp.x + (ndc.x + 1.0) * 0.5 * vp.width,
            vp.y + (ndc.y + 1.0) * 0.5 * vp.height,
            vp.min_depth + ndc.z * (vp.max_depth - vp.min_depth),
        ))
    }

    /// Viewport `(x, y, depth)` → world point.
    ///
    /// `top_down` tells whether `point.y` already uses the top-left origin.
    /// When false it is measured upward from the bottom edge of the viewport
    /// and flipped inside the viewport rectangle first.
    ///
    /// # Errors
    ///
    /// - `UninitializedCamera` if the camera matrix is identity
    /// - `DegenerateTransform` if the camera matrix cannot be inverted
    /// - `PointAtInfinity` if the unprojected w is zero
    pub fn unproject(&self, point: Vec3, top_down: bool) -> Result<Vec3> {
        if self.camera_matrix == Mat4::IDENTITY {
            return Err(Self::warn_and_return(Error::UninitializedCamera, "unproject", point));
        }

        // Inverted in f64; the f32 inverse of a 0.1/100 perspective is off by ~1e-3 px
        let matrix = self.camera_matrix.as_dmat4();
        let determinant = matrix.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(Self::warn_and_return(
                Error::DegenerateTransform(format!("camera matrix determinant is {}", determinant)),
                "unproject",
                point,
            ));
        }

        let inverse = matrix.inverse();
        if !inverse.is_finite() || inverse == DMat4::IDENTITY {
            return Err(Self::warn_and_return(
                Error::DegenerateTransform("camera matrix inverse is identity or not finite".to_string()),
                "unproject",
                point,
            ));
        }

        let vp = &self.viewport;
        let p = point.as_dvec3();
        let (vx, vy, width, height) = (vp.x as f64, vp.y as f64, vp.width as f64, vp.height as f64);
        let (min_depth, max_depth) = (vp.min_depth as f64, vp.max_depth as f64);

        // Bottom-up input is flipped inside the viewport rectangle
        let y = if top_down { p.y } else { vy + height - p.y };

        let depth_range = max_depth - min_depth;
        let depth = if depth_range != 0.0 { (p.z - min_depth) / depth_range } else { 0.0 };

        let ndc = DVec4::new(
            (p.x - vx) / width * 2.0 - 1.0,
            (y - vy) / height * 2.0 - 1.0,
            depth,
            1.0,
        );

        let world = inverse * ndc;
        if world.w == 0.0 {
            return Err(Self::warn_and_return(Error::PointAtInfinity, "unproject", point));
        }

        Ok((world.truncate() / world.w).as_vec3())
    }

    /// Ray through a viewport position, from the near plane to the far plane.
    ///
    /// `position.y` is measured upward from the bottom edge of the viewport.
    pub fn viewport_ray(&self, position: Vec2) -> Result<Ray> {
        let near = self.unproject(position.extend(self.viewport.min_depth), false)?;
        let far = self.unproject(position.extend(self.viewport.max_depth), false)?;
        Ok(Ray::new(near, far - near))
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
