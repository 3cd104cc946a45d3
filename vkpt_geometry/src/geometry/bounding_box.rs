/// BoundingBox: axis-aligned min/max accumulator.
///
/// Starts "inside out" (min = f32::MAX, max = -inf) so the first `update_*`
/// call establishes real bounds regardless of sign. Used by `Frustum` to fit
/// light-space extents.

use glam::Vec3;

/// Axis-aligned bounding box accumulated from points or other boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBox {
    /// Create an empty box, ready to accumulate.
    pub fn new() -> Self {
        Self {
            min: Vec3::splat(f32::MAX),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Create a box from explicit bounds.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Fit a box around every point of `points`.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let mut bbox = Self::new();
        for point in points {
            bbox.update_point(point);
        }
        bbox
    }

    /// Back to the empty state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Grow the box to include `point`.
    pub fn update_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow the box to include `other` (union of extents).
    pub fn update_box(&mut self, other: &BoundingBox) {
        self.update_point(other.min);
        self.update_point(other.max);
    }

    // ===== GETTERS =====

    pub fn minimum(&self) -> Vec3 {
        self.min
    }

    pub fn maximum(&self) -> Vec3 {
        self.max
    }

    /// `(min + max) / 2`. Meaningless while the box is empty.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// `max - min`. Meaningless while the box is empty.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True until the first update.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// The 8 corners: bottom plane (min.y) first, then top plane (max.y).
    ///
    /// Each plane walks (min.x, min.z), (min.x, max.z), (max.x, max.z), (max.x, min.z).
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, lo.z),
        ]
    }

    /// Inclusive point containment on all three axes.
    pub fn contains(&self, point: Vec3) -> bool {
        self.min.x <= point.x && point.x <= self.max.x
        && self.min.y <= point.y && point.y <= self.max.y
        && self.min.z <= point.z && point.z <= self.max.z
    }

    /// Test if this box overlaps (or touches) another box.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;
