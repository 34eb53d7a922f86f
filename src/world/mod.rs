//! Host-environment boundaries.
//!
//! Everything the query code needs from the surrounding game world is
//! expressed as a narrow trait here, injected by the caller:
//!
//! - [`WorldEntity`]: read-only pose/extent/metadata accessors
//! - [`RaycastService`]: ray casts against the physical world
//! - [`Scene`], [`SceneCell`], [`CellGrid`]: interior/exterior cell access

pub mod entity;
pub mod raycast;
pub mod scene;

pub use entity::{EntityId, FurnitureMarker, MarkerAnimations, WorldEntity};
pub use raycast::{RayHit, RaycastService};
pub use scene::{CellGrid, ExteriorCell, Scene, SceneCell, CELL_EXTENT};
