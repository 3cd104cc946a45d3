//! Geometry module: bounding boxes, rays and viewports.
//!
//! Plain value types shared by the camera, projector and frustum.

mod bounding_box;
mod ray;
mod viewport;

pub use bounding_box::BoundingBox;
pub use ray::Ray;
pub use viewport::Viewport;
