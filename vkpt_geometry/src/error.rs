//! Error types for the VKPT geometry core
//!
//! Every fallible projection or shadow computation returns one of these
//! instead of a zero-valued sentinel, so callers can tell a legitimate zero
//! point from a failed transform.

use std::fmt;

/// Result type for VKPT geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// VKPT geometry errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The camera matrix is exactly identity (camera not configured yet)
    UninitializedCamera,

    /// Homogeneous w is zero after the transform
    PointAtInfinity,

    /// Clip-space z is negative before the perspective divide
    BehindNearPlane,

    /// Matrix inverse is singular, non-finite or identity
    DegenerateTransform(String),

    /// Light direction cannot produce a usable up vector
    DegenerateLightDirection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UninitializedCamera => write!(f, "Camera matrix is identity (camera not configured)"),
            Error::PointAtInfinity => write!(f, "Point at infinity (homogeneous w is zero)"),
            Error::BehindNearPlane => write!(f, "Point lies in front of the near plane"),
            Error::DegenerateTransform(msg) => write!(f, "Degenerate transform: {}", msg),
            Error::DegenerateLightDirection(msg) => write!(f, "Degenerate light direction: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
