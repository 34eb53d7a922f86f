//! World pose and relative offset types.
//!
//! A [`Coordinate`] is a full world-space pose: a position plus a yaw
//! rotation around the world Z axis. Furniture animations only ever
//! rotate actors around Z, so pitch and roll are not modeled.

use super::math::normalize_angle;
use super::point::Point3D;
use serde::{Deserialize, Serialize};

/// A world-space pose: position plus yaw.
///
/// Immutable by convention: applying an [`Offset`] yields a new
/// `Coordinate` rather than mutating in place.
///
/// # Example
/// ```
/// use asana_query::core::{Coordinate, Offset, Point3D};
/// use std::f32::consts::FRAC_PI_2;
///
/// // Pose at (10, 0, 0) facing 90° CCW
/// let base = Coordinate::new(Point3D::new(10.0, 0.0, 0.0), FRAC_PI_2);
/// // One unit "forward" in the pose's local frame
/// let offset = Offset::new(1.0, 0.0, 0.0, 0.0);
/// let world = base.offset_by(&offset);
/// // Local +X maps to world +Y at 90°
/// assert!((world.position.x - 10.0).abs() < 1e-5);
/// assert!((world.position.y - 1.0).abs() < 1e-5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// World position.
    pub position: Point3D,
    /// Yaw in radians [-π, π), CCW positive around world Z.
    pub rotation: f32,
}

impl Coordinate {
    /// Create a new pose. The rotation is normalized to [-π, π).
    #[inline]
    pub fn new(position: Point3D, rotation: f32) -> Self {
        Self {
            position,
            rotation: normalize_angle(rotation),
        }
    }

    /// Apply a relative offset, producing a new world pose.
    ///
    /// The offset's positional delta is interpreted in this pose's local
    /// frame: its XY components are rotated by the pose's yaw, the Z
    /// component is purely additive. Rotations sum and re-normalize.
    #[inline]
    pub fn offset_by(&self, offset: &Offset) -> Coordinate {
        let (sin, cos) = self.rotation.sin_cos();
        let delta = offset.delta;
        Coordinate {
            position: Point3D::new(
                self.position.x + delta.x * cos - delta.y * sin,
                self.position.y + delta.x * sin + delta.y * cos,
                self.position.z + delta.z,
            ),
            rotation: normalize_angle(self.rotation + offset.rotation),
        }
    }

    /// Straight-line distance between the positions of two poses.
    #[inline]
    pub fn distance(&self, other: &Coordinate) -> f32 {
        self.position.distance(&other.position)
    }
}

/// A relative pose delta owned by the offset catalog.
///
/// Stored verbatim as parsed from configuration; normalization happens
/// only when the offset is applied to a base pose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// Positional delta in the base pose's local frame.
    pub delta: Point3D,
    /// Rotation delta in radians.
    pub rotation: f32,
}

impl Offset {
    /// Create an offset from its four components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, rotation: f32) -> Self {
        Self {
            delta: Point3D::new(x, y, z),
            rotation,
        }
    }
}
