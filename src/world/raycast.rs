//! Raycast service boundary.
//!
//! Ray-intersection against the physical world is provided by the host
//! environment (its physics/collision service). This module defines the
//! narrow interface the query code depends on, so tests can substitute a
//! scripted implementation.

use crate::core::Point3D;
use crate::world::entity::EntityId;

/// Result of a raycast operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Whether an obstruction was hit.
    pub hit: bool,
    /// The hit point in world coordinates, if any.
    pub hit_point: Option<Point3D>,
}

impl RayHit {
    /// Create a result indicating no obstruction.
    #[inline]
    pub fn miss() -> Self {
        Self {
            hit: false,
            hit_point: None,
        }
    }

    /// Create a result indicating an obstruction at `hit_point`.
    #[inline]
    pub fn obstructed(hit_point: Point3D) -> Self {
        Self {
            hit: true,
            hit_point: Some(hit_point),
        }
    }
}

/// Cast rays against the physical world.
///
/// Implemented by the host environment; queries never retry or time out,
/// and an obstructed ray is a normal filtering outcome rather than an
/// error.
pub trait RaycastService {
    /// Cast a ray from `from` to `to`, ignoring the entities in
    /// `exclude` (typically the object whose slots are being resolved).
    fn cast_ray(&self, from: Point3D, to: Point3D, exclude: &[EntityId]) -> RayHit;
}
