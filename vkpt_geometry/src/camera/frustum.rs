/// Frustum: the eight corners of a camera's view volume.
///
/// Built once from a `(Camera, Viewport)` pair by unprojecting the four
/// viewport corners at the near (depth 0) and far (depth 1) planes. Corner
/// order: 0..4 near plane, 4..8 far plane, each as top-left, top-right,
/// bottom-left, bottom-right on screen.
///
/// Also carries the six inward-facing culling planes and derives the shadow
/// matrices for directional, spot and point lights.

use glam::{Mat4, Vec3, Vec4};
use crate::config::{ShadowConfig, SpotFarPlane, UpVectorFallback};
use crate::error::{Error, Result};
use crate::geometry::{BoundingBox, Viewport};
use super::camera::{vulkan_perspective, Camera};
use super::projector::Projector;

const SOURCE: &str = "vkpt::Frustum";

/// Remaps OpenGL clip space to Vulkan: Y flipped, depth [-1, 1] → [0, 1].
pub const VULKAN_CLIP: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0,
    0.0, -1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
]);

/// Result of a 3-way frustum/box classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Box is entirely outside the frustum
    Outside,
    /// Box is entirely inside the frustum
    Inside,
    /// Box straddles at least one plane
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Corner indices
pub const NEAR_TOP_LEFT: usize = 0;
pub const NEAR_TOP_RIGHT: usize = 1;
pub const NEAR_BOTTOM_LEFT: usize = 2;
pub const NEAR_BOTTOM_RIGHT: usize = 3;
pub const FAR_TOP_LEFT: usize = 4;
pub const FAR_TOP_RIGHT: usize = 5;
pub const FAR_BOTTOM_LEFT: usize = 6;
pub const FAR_BOTTOM_RIGHT: usize = 7;

/// View volume of one camera snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    corners: [Vec3; 8],
    /// Planes (A, B, C, D), normal pointing inward: left, right, bottom, top, near, far
    planes: [Vec4; 6],
    config: ShadowConfig,
}

impl Frustum {
    /// Unproject the viewport corners of `camera` at depth 0 and 1.
    pub fn new(camera: &Camera, viewport: Viewport) -> Result<Self> {
        Self::from_projector(&Projector::new(camera, viewport))
    }

    /// Same as `new`, from an existing projector snapshot.
    pub fn from_projector(projector: &Projector) -> Result<Self> {
        let viewport = projector.viewport();
        let screen = viewport.corners();

        let mut corners = [Vec3::ZERO; 8];
        for (i, corner) in screen.iter().enumerate() {
            corners[i] = projector.unproject(corner.extend(viewport.min_depth), true)?;
            corners[i + 4] = projector.unproject(corner.extend(viewport.max_depth), true)?;
        }

        Ok(Self {
            corners,
            planes: extract_planes(projector.camera_matrix()),
            config: ShadowConfig::default(),
        })
    }

    /// Replace the shadow construction settings.
    pub fn with_config(mut self, config: ShadowConfig) -> Self {
        self.config = config;
        self
    }

    // ===== GETTERS =====

    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// Mean of all eight corners.
    pub fn centroid(&self) -> Vec3 {
        self.corners.iter().copied().sum::<Vec3>() / 8.0
    }

    /// Mean of the near-plane corners.
    pub fn near_center(&self) -> Vec3 {
        self.corners[..4].iter().copied().sum::<Vec3>() / 4.0
    }

    /// Mean of the far-plane corners.
    pub fn far_center(&self) -> Vec3 {
        self.corners[4..].iter().copied().sum::<Vec3>() / 4.0
    }

    // ===== CULLING =====

    /// True if `point` is on the inner side of all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.dot(point.extend(1.0)) >= 0.0)
    }

    /// Conservative box test (may report false positives, never false negatives).
    pub fn intersects_box(&self, bbox: &BoundingBox) -> bool {
        self.classify_box(bbox) != FrustumTest::Outside
    }

    /// Classify a box against the frustum using the p-vertex / n-vertex test.
    pub fn classify_box(&self, bbox: &BoundingBox) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            // Corner most in the direction of the normal
            let p_vertex = Vec3::select(normal.cmpge(Vec3::ZERO), bbox.max, bbox.min);
            if normal.dot(p_vertex) + plane.w < 0.0 {
                return FrustumTest::Outside;
            }

            // Corner least in the direction of the normal
            let n_vertex = Vec3::select(normal.cmpge(Vec3::ZERO), bbox.min, bbox.max);
            if normal.dot(n_vertex) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }

    // ===== SHADOW MATRICES =====

    /// Directional-light shadow matrix fitted around the frustum.
    ///
    /// `light_direction` points from the scene toward the light (callers
    /// holding a "light travels along" direction negate it first, see
    /// `Light::shadow_matrix`). `near_clip_offset` pulls the near plane
    /// toward the light so casters outside the frustum still land in the map.
    pub fn ortho_shadow_matrix(&self, light_direction: Vec3, near_clip_offset: f32) -> Result<Mat4> {
        let direction = self.checked_direction(light_direction)?;
        let centroid = self.centroid();
        let far_distance = (centroid - self.far_center()).length();
        let eye = centroid + direction * far_distance;

        let up = self.resolve_up(analytic_up(direction, &self.config), direction)?;
        let view = Mat4::look_at_rh(eye, centroid, up);

        let bounds = BoundingBox::from_points(self.corners.iter().map(|c| view.transform_point3(*c)));

        // View space looks down -Z: the nearest corner has the largest z
        let ortho = Mat4::orthographic_rh_gl(
            bounds.min.x,
            bounds.max.x,
            bounds.min.y,
            bounds.max.y,
            -bounds.max.z - near_clip_offset,
            -bounds.min.z,
        );

        crate::vkpt_trace!(SOURCE, "ortho shadow: eye {:?}, light-space bounds {:?}", eye, bounds);

        Ok(VULKAN_CLIP * ortho * view)
    }

    /// Spot-light shadow matrix.
    ///
    /// `angle` is the half cone angle in degrees. The far plane is `distance`
    /// unless the config pins it with `SpotFarPlane::Fixed`.
    pub fn perspective_shadow_matrix(
        &self,
        light_position: Vec3,
        light_direction: Vec3,
        distance: f32,
        angle: f32,
        near_clip_offset: f32,
    ) -> Result<Mat4> {
        let direction = self.checked_direction(light_direction)?;

        let world_up = if direction.cross(Vec3::Y).length() < self.config.degenerate_epsilon {
            Err(Error::DegenerateLightDirection(format!(
                "spot direction {:?} is parallel to the world up axis", direction
            )))
        } else {
            Ok(Vec3::Y)
        };
        let up = self.resolve_up(world_up, direction)?;

        let view = Mat4::look_at_rh(light_position, light_position + direction, up);

        let far = match self.config.spot_far_plane {
            SpotFarPlane::Distance => distance,
            SpotFarPlane::Fixed(far) => far,
        };
        let projection = vulkan_perspective((2.0 * angle).to_radians(), 1.0, near_clip_offset, far);

        Ok(projection * view)
    }

    /// Point-light shadow matrix looking from the light toward the centroid.
    ///
    /// The near plane is `ShadowConfig::point_near_plane`; `near_clip_offset`
    /// is accepted for signature parity with the other builders and ignored.
    pub fn point_light_shadow_matrix(
        &self,
        light_position: Vec3,
        far_distance: f32,
        _near_clip_offset: f32,
    ) -> Result<Mat4> {
        let centroid = self.centroid();
        let direction = self.checked_direction(centroid - light_position)?;

        let up = self.resolve_up(analytic_up(direction, &self.config), direction)?;
        let view = Mat4::look_at_rh(light_position, centroid, up);

        let projection = vulkan_perspective(
            self.config.point_fov_degrees.to_radians(),
            1.0,
            self.config.point_near_plane,
            far_distance,
        );

        Ok(projection * view)
    }

    // ===== INTERNAL =====

    /// Log a rejected light input before handing the error back.
    fn reject(&self, error: Error) -> Error {
        crate::vkpt_error!(SOURCE, "{}", error);
        error
    }

    fn checked_direction(&self, direction: Vec3) -> Result<Vec3> {
        direction.try_normalize().ok_or_else(|| {
            self.reject(Error::DegenerateLightDirection(format!(
                "{:?} cannot be normalized", direction
            )))
        })
    }

    /// Apply the configured fallback when the preferred up vector is undefined.
    fn resolve_up(&self, candidate: Result<Vec3>, direction: Vec3) -> Result<Vec3> {
        let error = match candidate {
            Ok(up) => return Ok(up),
            Err(error) => error,
        };

        match self.config.up_fallback {
            UpVectorFallback::Reject => Err(self.reject(error)),
            UpVectorFallback::LeastAligned => {
                let up = least_aligned_axis(direction);
                crate::vkpt_debug!(SOURCE, "{}; falling back to up {:?}", error, up);
                Ok(up)
            }
            UpVectorFallback::Fixed(up) => {
                if up.cross(direction).length() < self.config.degenerate_epsilon {
                    Err(self.reject(Error::DegenerateLightDirection(format!(
                        "fallback up {:?} is parallel to {:?}", up, direction
                    ))))
                } else {
                    Ok(up)
                }
            }
        }
    }
}

/// Extract six normalized inward planes from a `projection * view` matrix.
///
/// Gribb & Hartmann, for clip volumes with depth in [0, 1] and Y pointing
/// down (so `row3 + row1` bounds the top of the screen).
fn extract_planes(m: &Mat4) -> [Vec4; 6] {
    let (r0, r1, r2, r3) = (m.row(0), m.row(1), m.row(2), m.row(3));

    let mut planes = [
        r3 + r0, // left
        r3 - r0, // right
        r3 - r1, // bottom
        r3 + r1, // top
        r2,      // near
        r3 - r2, // far
    ];

    for plane in &mut planes {
        let normal_len = plane.truncate().length();
        if normal_len > 0.0 {
            *plane /= normal_len;
        }
    }

    planes
}

/// Up vector orthogonal to `direction` that keeps the x/z of the reference
/// view direction and solves for y.
fn analytic_up(direction: Vec3, config: &ShadowConfig) -> Result<Vec3> {
    if direction.y.abs() < config.degenerate_epsilon {
        return Err(Error::DegenerateLightDirection(format!(
            "{:?} has no vertical component", direction
        )));
    }

    let r = config.reference_view_direction;
    let up = Vec3::new(r.x, -(r.x * direction.x + r.z * direction.z) / direction.y, r.z);

    up.try_normalize().ok_or_else(|| {
        Error::DegenerateLightDirection(format!(
            "reference view direction {:?} gives a zero up vector", r
        ))
    })
}

/// World axis with the smallest |dot| against `direction`.
fn least_aligned_axis(direction: Vec3) -> Vec3 {
    let a = direction.abs();
    if a.x <= a.y && a.x <= a.z {
        Vec3::X
    } else if a.y <= a.z {
        Vec3::Y
    } else {
        Vec3::Z
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
