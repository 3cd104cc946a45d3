/// Light: directional light parameters.
///
/// The stored direction is the way light travels (from the light into the
/// scene). Shadow construction wants the opposite vector, pointing back at
/// the light, so `shadow_matrix` negates it before handing it to the frustum.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use crate::error::Result;
use crate::geometry::Viewport;
use super::camera::Camera;
use super::frustum::Frustum;

/// Directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Travel direction, w = 0
    pub direction: Vec4,
    /// RGB colour plus weight
    pub intensity: Vec4,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: Vec4::new(0.0, -1.0, 0.0, 0.0),
            intensity: Vec4::ONE,
        }
    }
}

impl Light {
    pub fn new(direction: Vec3, intensity: Vec4) -> Self {
        Self {
            direction: direction.extend(0.0),
            intensity,
        }
    }

    /// Shadow matrix for the view volume of `camera` seen through `viewport`.
    pub fn shadow_matrix(&self, camera: &Camera, viewport: Viewport, near_clip_offset: f32) -> Result<Mat4> {
        let frustum = Frustum::new(camera, viewport)?;
        self.shadow_matrix_for(&frustum, near_clip_offset)
    }

    /// Same as `shadow_matrix`, reusing an already built frustum.
    pub fn shadow_matrix_for(&self, frustum: &Frustum, near_clip_offset: f32) -> Result<Mat4> {
        frustum.ortho_shadow_matrix(-self.direction.truncate(), near_clip_offset)
    }

    /// Pack the light and its shadow matrix for upload.
    pub fn uniform(&self, shadow_matrix: Mat4) -> LightUniform {
        LightUniform {
            direction: self.direction,
            intensity: self.intensity,
            shadow_matrix,
        }
    }
}

/// GPU layout of a light (std140 compatible: two vec4 then a mat4).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub direction: Vec4,
    pub intensity: Vec4,
    pub shadow_matrix: Mat4,
}

impl LightUniform {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
