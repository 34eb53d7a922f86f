//! Shared fake world for integration tests.
//!
//! Provides a tiny collision world (axis-aligned boxes with a
//! slab-method segment test) plus configurable entities and scenes, so
//! the full query pipeline can run without a host environment.

// Each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use asana_query::core::{Bounds3D, Coordinate, Point3D};
use asana_query::world::{
    CellGrid, EntityId, ExteriorCell, FurnitureMarker, MarkerAnimations, RayHit, RaycastService,
    Scene, SceneCell, WorldEntity,
};

/// Configurable entity backed by plain fields.
#[derive(Clone)]
pub struct FakeEntity {
    pub id: EntityId,
    pub coordinate: Coordinate,
    pub bounds: Option<Bounds3D>,
    pub name: String,
    pub bedroll: bool,
    pub markers: Option<Vec<FurnitureMarker>>,
    pub furniture: bool,
}

impl FakeEntity {
    pub fn new(id: u64, position: Point3D) -> Self {
        Self {
            id: EntityId(id),
            coordinate: Coordinate::new(position, 0.0),
            bounds: None,
            name: String::new(),
            bedroll: false,
            markers: None,
            furniture: false,
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.coordinate = Coordinate::new(self.coordinate.position, rotation);
        self
    }

    pub fn with_bounds(mut self, half_extent: f32, height: f32) -> Self {
        let p = self.coordinate.position;
        self.bounds = Some(Bounds3D::new(
            Point3D::new(p.x - half_extent, p.y - half_extent, p.z),
            Point3D::new(p.x + half_extent, p.y + half_extent, p.z + height),
        ));
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_sleep_markers(mut self, count: usize) -> Self {
        self.markers = Some(
            (0..count)
                .map(|_| FurnitureMarker::new(MarkerAnimations::SLEEP))
                .collect(),
        );
        self.furniture = true;
        self
    }
}

impl WorldEntity for FakeEntity {
    fn id(&self) -> EntityId {
        self.id
    }
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
    fn bounding_box(&self) -> Option<Bounds3D> {
        self.bounds
    }
    fn display_name(&self) -> &str {
        &self.name
    }
    fn has_bedroll_keyword(&self) -> bool {
        self.bedroll
    }
    fn furniture_markers(&self) -> Option<Vec<FurnitureMarker>> {
        self.markers.clone()
    }
    fn is_furniture(&self) -> bool {
        self.furniture
    }
}

/// A solid box in the collision world, optionally owned by an entity so
/// exclusion lists work.
pub struct Obstacle {
    pub bounds: Bounds3D,
    pub owner: Option<EntityId>,
}

/// Collision world of axis-aligned boxes.
#[derive(Default)]
pub struct FakePhysics {
    obstacles: Vec<Obstacle>,
}

impl FakePhysics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_box(&mut self, min: Point3D, max: Point3D) {
        self.obstacles.push(Obstacle {
            bounds: Bounds3D::new(min, max),
            owner: None,
        });
    }

    pub fn add_entity_box(&mut self, owner: EntityId, min: Point3D, max: Point3D) {
        self.obstacles.push(Obstacle {
            bounds: Bounds3D::new(min, max),
            owner: Some(owner),
        });
    }
}

/// Slab-method segment/box intersection. Returns the parametric entry
/// distance along `[from, to]`, or `None` when the segment misses.
fn segment_box_entry(from: Point3D, to: Point3D, bounds: &Bounds3D) -> Option<f32> {
    let delta = to - from;
    let mut t_min = 0.0f32;
    let mut t_max = 1.0f32;
    let axes = [
        (from.x, delta.x, bounds.min.x, bounds.max.x),
        (from.y, delta.y, bounds.min.y, bounds.max.y),
        (from.z, delta.z, bounds.min.z, bounds.max.z),
    ];
    for (origin, dir, min, max) in axes {
        if dir.abs() < 1e-8 {
            if origin < min || origin > max {
                return None;
            }
        } else {
            let inv = 1.0 / dir;
            let (t0, t1) = {
                let a = (min - origin) * inv;
                let b = (max - origin) * inv;
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            };
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }
    }
    Some(t_min)
}

impl RaycastService for FakePhysics {
    fn cast_ray(&self, from: Point3D, to: Point3D, exclude: &[EntityId]) -> RayHit {
        let mut nearest: Option<f32> = None;
        for obstacle in &self.obstacles {
            if let Some(owner) = obstacle.owner {
                if exclude.contains(&owner) {
                    continue;
                }
            }
            if let Some(t) = segment_box_entry(from, to, &obstacle.bounds) {
                if nearest.map_or(true, |best| t < best) {
                    nearest = Some(t);
                }
            }
        }
        match nearest {
            Some(t) => RayHit::obstructed(from + (to - from) * t),
            None => RayHit::miss(),
        }
    }
}

/// A cell holding entities; doubles as interior cell and exterior grid
/// cell.
pub struct FakeCell {
    pub entities: Vec<FakeEntity>,
    pub attached: bool,
    pub origin: Option<(f32, f32)>,
}

impl FakeCell {
    pub fn with_entities(entities: Vec<FakeEntity>) -> Self {
        Self {
            entities,
            attached: true,
            origin: Some((0.0, 0.0)),
        }
    }

    pub fn at_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Some((x, y));
        self
    }
}

impl SceneCell<FakeEntity> for FakeCell {
    fn for_each_in_range(&self, center: Point3D, radius: f32, visit: &mut dyn FnMut(&FakeEntity)) {
        for entity in &self.entities {
            if entity.coordinate.position.distance(&center) <= radius {
                visit(entity);
            }
        }
    }
}

impl ExteriorCell<FakeEntity> for FakeCell {
    fn is_attached(&self) -> bool {
        self.attached
    }
    fn world_origin(&self) -> Option<(f32, f32)> {
        self.origin
    }
}

/// Square grid of fake cells indexed `[x][y]`.
pub struct FakeGrid {
    pub cells: Vec<Vec<FakeCell>>,
}

impl FakeGrid {
    /// Build an `n`×`n` grid of empty attached cells with world origins
    /// laid out on the cell extent.
    pub fn empty(n: usize, cell_extent: f32) -> Self {
        let cells = (0..n)
            .map(|x| {
                (0..n)
                    .map(|y| {
                        FakeCell::with_entities(Vec::new())
                            .at_origin(x as f32 * cell_extent, y as f32 * cell_extent)
                    })
                    .collect()
            })
            .collect();
        Self { cells }
    }
}

impl CellGrid<FakeEntity> for FakeGrid {
    fn length(&self) -> u32 {
        self.cells.len() as u32
    }
    fn cell(&self, x: u32, y: u32) -> Option<&dyn ExteriorCell<FakeEntity>> {
        self.cells
            .get(x as usize)?
            .get(y as usize)
            .map(|c| c as &dyn ExteriorCell<FakeEntity>)
    }
}

/// Scene exposing either an interior cell or an exterior grid.
pub enum FakeScene {
    Interior(FakeCell),
    Exterior(FakeGrid),
}

impl Scene<FakeEntity> for FakeScene {
    fn interior_cell(&self) -> Option<&dyn SceneCell<FakeEntity>> {
        match self {
            FakeScene::Interior(cell) => Some(cell),
            FakeScene::Exterior(_) => None,
        }
    }
    fn cell_grid(&self) -> Option<&dyn CellGrid<FakeEntity>> {
        match self {
            FakeScene::Interior(_) => None,
            FakeScene::Exterior(grid) => Some(grid),
        }
    }
}
