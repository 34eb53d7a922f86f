//! # Asana-Query: Furniture Interaction-Slot Resolution
//!
//! A library for resolving usable interaction points on furniture-like
//! objects in a 3D scene graph, and for finding eligible sleeping
//! furniture near an actor.
//!
//! ## Features
//!
//! - **Offset Catalog**: per-type interaction offsets loaded once from
//!   YAML configuration, immutable afterwards
//! - **Slot Resolution**: object-local offsets transformed to world
//!   space and validated with two-stage raycast occlusion testing
//! - **Bed Classification**: keyword, name and furniture-marker based
//!   bed subtype detection
//! - **Area Search**: interior-cell or exterior-grid bed discovery with
//!   distance-sorted results
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asana_query::registry::{OffsetCatalog, TypeFilter};
//! use asana_query::query::candidates_in_bound;
//! # use asana_query::world::{RaycastService, WorldEntity};
//!
//! // Load the catalog once at startup
//! let catalog = OffsetCatalog::from_yaml(
//!     "Chair:\n  Offset: [30.0, 0.0, 0.0, 0.0]\n",
//! ).unwrap();
//!
//! # fn resolve(catalog: &OffsetCatalog, target: &impl WorldEntity, physics: &dyn RaycastService) {
//! // Per query: validated world-space points on a target object
//! let slots = candidates_in_bound(catalog, target, TypeFilter::ALL, physics);
//! for (ty, points) in &slots {
//!     println!("{:?}: {} usable points", ty, points.len());
//! }
//! # }
//! ```
//!
//! ## Coordinate Frame
//!
//! The world frame is Z-up with yaw-only orientation (rotation around
//! the world Z axis, counter-clockwise positive, radians). Distances
//! are in world units.
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types ([`Point3D`], [`Coordinate`],
//!   [`Offset`], [`Bounds3D`])
//! - [`world`]: Traits the host environment implements
//!   ([`WorldEntity`], [`RaycastService`], [`Scene`])
//! - [`registry`]: Furniture type table and [`OffsetCatalog`]
//! - [`query`]: Slot resolution and bed discovery entry points
//!
//! The host environment owns the scene graph, entities and physics; the
//! library only reads from them through the [`world`] traits, which
//! keeps every query unit-testable against scripted fakes.
//!
//! ## Error Handling
//!
//! All failures inside queries are handled locally by omission: missing
//! geometry, obstructed rays and unmatched filters produce empty
//! results, never errors. Configuration problems are logged entry by
//! entry and skipped, so a partially valid catalog still loads.

pub mod core;
pub mod query;
pub mod registry;
pub mod world;

pub use crate::core::{Bounds3D, Coordinate, Offset, Point3D};
pub use query::{
    candidates_in_bound, classify_bed, closest_candidate_in_bound, find_beds_in_area, is_bed,
};
pub use registry::{CatalogError, FurnitureType, OffsetCatalog, TypeFilter};
pub use world::{
    CellGrid, EntityId, ExteriorCell, FurnitureMarker, MarkerAnimations, RayHit, RaycastService,
    Scene, SceneCell, WorldEntity, CELL_EXTENT,
};
