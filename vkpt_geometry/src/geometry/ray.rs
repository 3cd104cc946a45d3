/// Ray: parametric line `start + direction * t`.
///
/// The direction is not required to be normalized: rays built by
/// `Projector::viewport_ray` span exactly from the near plane (t = 0) to the
/// far plane (t = 1).

use glam::Vec3;
use super::bounding_box::BoundingBox;

/// Parametric line in world space. The default value is the null ray.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ray {
    /// Origin
    pub start: Vec3,
    /// Direction (not necessarily unit length)
    pub direction: Vec3,
}

impl Ray {
    pub fn new(start: Vec3, direction: Vec3) -> Self {
        Self { start, direction }
    }

    /// True if both start and direction are exactly zero.
    pub fn is_null(&self) -> bool {
        self.start == Vec3::ZERO && self.direction == Vec3::ZERO
    }

    /// Point at parameter `t`.
    pub fn position(&self, t: f32) -> Vec3 {
        self.start + self.direction * t
    }

    /// Slab test against an axis-aligned box.
    ///
    /// Returns the smallest `t >= 0` at which the ray is inside the box
    /// (0 when `start` already is), or `None` if the ray misses it.
    pub fn intersect_box(&self, bbox: &BoundingBox) -> Option<f32> {
        if bbox.is_empty() {
            return None;
        }

        let mut t_enter = 0.0_f32;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.start[axis];
            let dir = self.direction[axis];
            let (lo, hi) = (bbox.min[axis], bbox.max[axis]);

            if dir == 0.0 {
                // Parallel to this slab: must already be between its planes
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (lo - origin) * inv;
            let mut t1 = (hi - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }
}

#[cfg(test)]
#[path = "ray_tests.rs"]
mod tests;
