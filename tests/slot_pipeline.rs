//! End-to-end slot resolution against a fake collision world.

mod common;

use approx::assert_relative_eq;
use asana_query::core::Point3D;
use asana_query::query::{candidates_in_bound, closest_candidate_in_bound, GROUND_CLEARANCE};
use asana_query::registry::{FurnitureType, OffsetCatalog, TypeFilter};
use common::{FakeEntity, FakePhysics};
use std::f32::consts::FRAC_PI_2;

const CATALOG_YAML: &str = "\
Chair:
  Offset: [40.0, 0.0, 0.0, 0.0]
BedDouble:
  Offset:
    - [0.0, 35.0, 0.0, 0.0]
    - [0.0, -35.0, 0.0, 0.0]
";

/// A double bed at (100, 100, 0), rotated 90° CCW. Its two side
/// offsets land at (65, 100) and (135, 100) after rotation.
fn double_bed() -> FakeEntity {
    FakeEntity::new(1, Point3D::new(100.0, 100.0, 0.0))
        .with_rotation(FRAC_PI_2)
        .with_bounds(50.0, 30.0)
}

#[test]
fn open_world_keeps_every_candidate() {
    let catalog = OffsetCatalog::from_yaml(CATALOG_YAML).unwrap();
    let bed = double_bed();
    let physics = FakePhysics::new();

    let result = candidates_in_bound(&catalog, &bed, TypeFilter::ALL, &physics);
    assert_eq!(result.len(), 2);

    let (ty, points) = &result[1];
    assert_eq!(*ty, FurnitureType::BedDouble);
    assert_eq!(points.len(), 2);
    // Rotation maps local +Y to world -X, and every candidate is raised
    assert_relative_eq!(points[0].position.x, 65.0, epsilon = 1e-4);
    assert_relative_eq!(points[0].position.y, 100.0, epsilon = 1e-4);
    assert_relative_eq!(points[0].position.z, GROUND_CLEARANCE, epsilon = 1e-4);
    assert_relative_eq!(points[1].position.x, 135.0, epsilon = 1e-4);
}

#[test]
fn wall_between_object_and_candidate_rejects_that_side() {
    let catalog = OffsetCatalog::from_yaml(CATALOG_YAML).unwrap();
    let bed = double_bed();
    let mut physics = FakePhysics::new();
    // Thin wall between the bed top and the (135, 100) candidate
    physics.add_box(
        Point3D::new(115.0, 80.0, 0.0),
        Point3D::new(118.0, 120.0, 200.0),
    );

    let result = candidates_in_bound(
        &catalog,
        &bed,
        TypeFilter::of(FurnitureType::BedDouble),
        &physics,
    );
    assert_eq!(result.len(), 1);
    let points = &result[0].1;
    assert_eq!(points.len(), 1);
    assert_relative_eq!(points[0].position.x, 65.0, epsilon = 1e-4);
}

#[test]
fn low_ceiling_rejects_candidate() {
    let catalog = OffsetCatalog::from_yaml(CATALOG_YAML).unwrap();
    let bed = double_bed();
    let mut physics = FakePhysics::new();
    // Ceiling slab 60 units up, over the (65, 100) candidate only
    physics.add_box(
        Point3D::new(40.0, 80.0, 60.0),
        Point3D::new(90.0, 120.0, 70.0),
    );

    let result = candidates_in_bound(
        &catalog,
        &bed,
        TypeFilter::of(FurnitureType::BedDouble),
        &physics,
    );
    let points = &result[0].1;
    assert_eq!(points.len(), 1);
    assert_relative_eq!(points[0].position.x, 135.0, epsilon = 1e-4);
}

#[test]
fn own_geometry_is_excluded_from_raycasts() {
    let catalog = OffsetCatalog::from_yaml(CATALOG_YAML).unwrap();
    let bed = double_bed();
    let mut physics = FakePhysics::new();
    // Register the bed's own solid box; excluded rays must ignore it
    let bounds = bed.bounds.unwrap();
    physics.add_entity_box(bed.id, bounds.min, bounds.max);

    let result = candidates_in_bound(
        &catalog,
        &bed,
        TypeFilter::of(FurnitureType::BedDouble),
        &physics,
    );
    assert_eq!(result[0].1.len(), 2);
}

#[test]
fn closest_candidate_per_type_minimizes_actor_distance() {
    let catalog = OffsetCatalog::from_yaml(CATALOG_YAML).unwrap();
    let bed = double_bed();
    let actor = FakeEntity::new(2, Point3D::new(60.0, 100.0, 0.0));
    let physics = FakePhysics::new();

    let result = closest_candidate_in_bound(
        &catalog,
        &bed,
        TypeFilter::of(FurnitureType::BedDouble),
        &actor,
        &physics,
    );
    assert_eq!(result.len(), 1);
    let (ty, coords) = &result[0];
    assert_eq!(*ty, FurnitureType::BedDouble);
    assert_relative_eq!(coords.position.x, 65.0, epsilon = 1e-4);
}

#[test]
fn closest_omits_fully_blocked_types() {
    let catalog = OffsetCatalog::from_yaml(CATALOG_YAML).unwrap();
    let bed = double_bed();
    let actor = FakeEntity::new(2, Point3D::new(60.0, 100.0, 0.0));
    let mut physics = FakePhysics::new();
    // Dome both bed-side candidates under a wide low ceiling
    physics.add_box(
        Point3D::new(0.0, 0.0, 60.0),
        Point3D::new(200.0, 200.0, 70.0),
    );

    let result = closest_candidate_in_bound(
        &catalog,
        &bed,
        TypeFilter::of(FurnitureType::BedDouble),
        &actor,
        &physics,
    );
    assert!(result.is_empty());
}

#[test]
fn entity_without_geometry_yields_nothing() {
    let catalog = OffsetCatalog::from_yaml(CATALOG_YAML).unwrap();
    let ghost = FakeEntity::new(3, Point3D::zero());
    let physics = FakePhysics::new();

    let result = candidates_in_bound(&catalog, &ghost, TypeFilter::ALL, &physics);
    assert!(result.is_empty());
}
