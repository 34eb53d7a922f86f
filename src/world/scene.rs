//! Scene cell and grid accessors.
//!
//! The simulated world is either a self-contained interior cell or an
//! exterior grid of square cells, each with a fixed world footprint and
//! possibly unattached (unloaded). These traits are the read-only view
//! the area search needs; the host passes its scene explicitly instead
//! of the query code reaching into process-wide singletons.

use crate::core::Point3D;
use crate::world::entity::WorldEntity;

/// World-space footprint of one exterior grid cell, in world units.
pub const CELL_EXTENT: f32 = 4096.0;

/// A cell that can enumerate its entities near a point.
pub trait SceneCell<E: WorldEntity> {
    /// Visit every entity within `radius` of `center`.
    ///
    /// Traversal order is the cell's own storage order; callers that
    /// need ranked results sort afterwards.
    fn for_each_in_range(&self, center: Point3D, radius: f32, visit: &mut dyn FnMut(&E));
}

/// An exterior grid cell with attachment state and a world origin.
pub trait ExteriorCell<E: WorldEntity>: SceneCell<E> {
    /// Whether the cell is currently attached (loaded).
    fn is_attached(&self) -> bool;

    /// World X/Y of the cell's corner, or `None` when unknown.
    fn world_origin(&self) -> Option<(f32, f32)>;
}

/// A square grid of exterior cells.
pub trait CellGrid<E: WorldEntity> {
    /// Side length of the grid in cells.
    fn length(&self) -> u32;

    /// Cell at grid indices `(x, y)`, or `None` when out of range or
    /// not present.
    fn cell(&self, x: u32, y: u32) -> Option<&dyn ExteriorCell<E>>;
}

/// The currently loaded scene: exactly one of an interior cell or an
/// exterior cell grid is expected to be available.
pub trait Scene<E: WorldEntity> {
    /// The current self-contained interior cell, if the scene is an
    /// interior.
    fn interior_cell(&self) -> Option<&dyn SceneCell<E>>;

    /// The exterior cell grid, if the scene is an exterior.
    fn cell_grid(&self) -> Option<&dyn CellGrid<E>>;
}
