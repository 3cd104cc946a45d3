/// Viewport: pixel rectangle of the render target plus its depth range.
///
/// Same layout as `VkViewport`. The origin is the top-left corner and Y
/// grows downward.

use glam::Vec2;

/// Viewport rectangle and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Rectangle with the default [0, 1] depth range.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// Override the depth range.
    pub fn with_depth_range(mut self, min_depth: f32, max_depth: f32) -> Self {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Vec2; 4] {
        let (left, top) = (self.x, self.y);
        let (right, bottom) = (self.x + self.width, self.y + self.height);
        [
            Vec2::new(left, top),
            Vec2::new(right, top),
            Vec2::new(left, bottom),
            Vec2::new(right, bottom),
        ]
    }

    /// Width / height
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
