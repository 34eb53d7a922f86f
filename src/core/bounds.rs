//! Axis-aligned bounding box in world space.
//!
//! [`Bounds3D`] represents a rectangular volume, commonly used for:
//! - Object extents (how large is a piece of furniture)
//! - Deriving trace-start points above an object
//! - Spatial queries (is a point inside a region)

use super::point::Point3D;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds3D {
    /// Minimum corner (smallest x, y and z values).
    pub min: Point3D,
    /// Maximum corner (largest x, y and z values).
    pub max: Point3D,
}

impl Bounds3D {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point3D, max: Point3D) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point3D::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3D::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Check if the bounds are empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> Point3D {
        Point3D::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Depth of the bounding box (y extent).
    #[inline]
    pub fn depth(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Height of the bounding box (z extent).
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.z - self.min.z
    }

    /// Check if a point is inside the bounding box.
    #[inline]
    pub fn contains(&self, point: Point3D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: Point3D) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}
