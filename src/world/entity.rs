//! Read-only view of world entities.
//!
//! The scene graph owns its entities; this crate only reads poses,
//! extents and furniture metadata from them. [`WorldEntity`] is the
//! narrow accessor trait the host environment implements over its own
//! object-reference type.

use crate::core::{Bounds3D, Coordinate, Point3D};
use serde::{Deserialize, Serialize};

/// Opaque handle identifying a world entity.
///
/// Only used for identity comparisons (e.g. excluding the target object
/// from its own raycasts); the crate never dereferences it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Animation kinds a furniture marker supports, as a value-type flag set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerAnimations(u8);

impl MarkerAnimations {
    /// Sitting animation (chairs, benches, thrones).
    pub const SIT: MarkerAnimations = MarkerAnimations(1 << 0);
    /// Sleeping animation (beds, bedrolls).
    pub const SLEEP: MarkerAnimations = MarkerAnimations(1 << 1);
    /// Leaning animation (walls, railings).
    pub const LEAN: MarkerAnimations = MarkerAnimations(1 << 2);

    /// Empty flag set.
    #[inline]
    pub const fn none() -> Self {
        MarkerAnimations(0)
    }

    /// Check whether all flags in `other` are present.
    #[inline]
    pub const fn contains(self, other: MarkerAnimations) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether this marker supports the sleep animation.
    #[inline]
    pub const fn sleeps(self) -> bool {
        self.contains(MarkerAnimations::SLEEP)
    }
}

impl std::ops::BitOr for MarkerAnimations {
    type Output = Self;

    #[inline]
    fn bitor(self, other: Self) -> Self {
        MarkerAnimations(self.0 | other.0)
    }
}

/// A furniture interaction marker attached to an entity's 3D root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FurnitureMarker {
    /// Animation kinds this marker slot supports.
    pub animations: MarkerAnimations,
}

impl FurnitureMarker {
    /// Create a marker supporting the given animations.
    #[inline]
    pub const fn new(animations: MarkerAnimations) -> Self {
        Self { animations }
    }
}

/// Read-only accessors over a world entity.
///
/// Missing geometry is reported as `None`, never as an error: an entity
/// without a renderable 3D representation has no bounding box and no
/// markers, and queries treat it as "no data".
pub trait WorldEntity {
    /// Opaque identity of this entity.
    fn id(&self) -> EntityId;

    /// Current world pose.
    fn coordinate(&self) -> Coordinate;

    /// Current world position.
    #[inline]
    fn position(&self) -> Point3D {
        self.coordinate().position
    }

    /// World-space bounding box, or `None` when the entity has no
    /// renderable 3D representation.
    fn bounding_box(&self) -> Option<Bounds3D>;

    /// Display name shown to players. May be empty.
    fn display_name(&self) -> &str;

    /// Whether the entity carries the bedroll keyword.
    fn has_bedroll_keyword(&self) -> bool;

    /// Furniture markers attached to the entity's 3D root, or `None`
    /// when no marker metadata exists.
    fn furniture_markers(&self) -> Option<Vec<FurnitureMarker>>;

    /// Whether the entity's base object is categorized as furniture.
    fn is_furniture(&self) -> bool;
}
