//! Bed classification and area-bounded bed discovery.
//!
//! Classification combines a keyword check, a cheap name pre-filter and
//! furniture-marker inspection. Discovery walks the current scene cell
//! (interior) or the exterior cell grid and collects entities that
//! classify as beds.

use crate::core::Point3D;
use crate::registry::FurnitureType;
use crate::world::{Scene, WorldEntity, CELL_EXTENT};
use log::debug;

/// Classify an entity into a bed subtype.
///
/// - The bedroll keyword short-circuits to [`FurnitureType::BedRoll`],
///   independent of name or markers.
/// - Otherwise the display name must be non-empty and contain `"bed"`
///   case-insensitively; this cheap pre-filter runs before the marker
///   inspection.
/// - Marker metadata must exist; the number of sleep-capable markers
///   then decides: 0 → `None`, 1 → `BedSingle`, 2 or more → `BedDouble`.
pub fn classify_bed<E: WorldEntity>(entity: &E) -> FurnitureType {
    if entity.has_bedroll_keyword() {
        return FurnitureType::BedRoll;
    }
    let name = entity.display_name();
    if name.is_empty() || !name.to_ascii_lowercase().contains("bed") {
        return FurnitureType::None;
    }
    let markers = match entity.furniture_markers() {
        Some(markers) => markers,
        None => return FurnitureType::None,
    };

    let sleep_markers = markers.iter().filter(|m| m.animations.sleeps()).count();
    match sleep_markers {
        0 => FurnitureType::None,
        1 => FurnitureType::BedSingle,
        _ => FurnitureType::BedDouble,
    }
}

/// Whether the entity classifies as any bed subtype.
#[inline]
pub fn is_bed<E: WorldEntity>(entity: &E) -> bool {
    classify_bed(entity) != FurnitureType::None
}

/// Find bed entities within `radius` of `center_entity`.
///
/// A furniture-category entity is rejected when `radius_z > 0` and its
/// vertical separation from the center exceeds `radius_z`; passing
/// `radius_z <= 0` disables the vertical filter entirely.
///
/// In an interior scene the single current cell is enumerated and
/// results keep traversal order. In an exterior scene, attached grid
/// cells along the grid diagonal whose world footprint intersects the
/// search square are enumerated, and results are sorted ascending by
/// distance from the center.
pub fn find_beds_in_area<E: WorldEntity + Clone>(
    scene: &dyn Scene<E>,
    center_entity: &E,
    radius: f32,
    radius_z: f32,
) -> Vec<E> {
    let center = center_entity.position();
    let mut found: Vec<E> = Vec::new();
    let mut visit = |entity: &E| {
        if entity.is_furniture()
            && radius_z > 0.0
            && (center.z - entity.position().z).abs() > radius_z
        {
            return;
        }
        if is_bed(entity) {
            found.push(entity.clone());
        }
    };

    if let Some(interior) = scene.interior_cell() {
        interior.for_each_in_range(center, radius, &mut visit);
    } else if let Some(grid) = scene.cell_grid() {
        let length = grid.length();
        let x_plus = center.x + radius;
        let x_minus = center.x - radius;
        let y_plus = center.y + radius;
        let y_minus = center.y - radius;
        // Cells are visited along the grid diagonal only.
        for i in 0..length {
            let cell = match grid.cell(i, i) {
                Some(cell) if cell.is_attached() => cell,
                _ => continue,
            };
            let (world_x, world_y) = match cell.world_origin() {
                Some(origin) => origin,
                None => continue,
            };
            if world_x < x_plus
                && world_x + CELL_EXTENT > x_minus
                && world_y < y_plus
                && world_y + CELL_EXTENT > y_minus
            {
                cell.for_each_in_range(center, radius, &mut visit);
            }
        }
        if !found.is_empty() {
            found.sort_by(|a, b| {
                center
                    .distance_squared(&a.position())
                    .partial_cmp(&center.distance_squared(&b.position()))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }
    debug!("[Beds] Found {} beds within {} units", found.len(), radius);
    found
}
