//! Interaction-slot resolution.
//!
//! Turns catalog offsets into verified world-space usable points. Each
//! candidate survives two ray casts: a sightline from above the target
//! object to the candidate, then an overhead clearance cast straight up
//! from the candidate. This cheaply approximates "reachable and not
//! inside or under solid geometry" without a navigation-mesh query;
//! candidate counts per object are single-digit, so two casts each is
//! affordable.

use crate::core::{Coordinate, Point3D};
use crate::registry::{FurnitureType, OffsetCatalog, TypeFilter};
use crate::world::{RaycastService, WorldEntity};
use log::{debug, trace};

/// Height added to every candidate so it hovers above small floor
/// clutter (rugs, dropped coins) instead of intersecting it.
pub const GROUND_CLEARANCE: f32 = 16.0;

/// A sightline obstruction within this distance of the candidate is
/// tolerated (the candidate resting against a surface); farther hits
/// mean the path is blocked.
pub const CONTACT_TOLERANCE: f32 = 16.0;

/// Required unobstructed height above a candidate.
pub const HEADROOM: f32 = 128.0;

/// Compute validated interaction points on `target` for every catalog
/// row whose type is in `filter`.
///
/// Returns one `(type, points)` pair per matching catalog row, in
/// catalog order; a row whose candidates were all rejected still
/// appears with an empty list. Points within a row follow the catalog's
/// offset order.
///
/// Returns an empty result when the target has no renderable 3D
/// representation (no bounding box).
pub fn candidates_in_bound<E: WorldEntity>(
    catalog: &OffsetCatalog,
    target: &E,
    filter: TypeFilter,
    raycast: &dyn RaycastService,
) -> Vec<(FurnitureType, Vec<Coordinate>)> {
    let bounds = match target.bounding_box() {
        Some(bounds) => bounds,
        None => {
            debug!("[Slots] Target {:?} has no 3D bounds", target.id());
            return Vec::new();
        }
    };
    // Trace from the top of the object so its own geometry does not
    // produce spurious self-hits.
    let mut trace_start = bounds.center();
    trace_start.z = bounds.max.z;

    let base = target.coordinate();
    let exclude = [target.id()];
    let mut result = Vec::new();
    for (ty, offsets) in catalog.rows() {
        if !filter.contains(*ty) {
            continue;
        }
        let mut points = Vec::new();
        for offset in offsets {
            let mut coords = base.offset_by(offset);
            coords.position.z += GROUND_CLEARANCE;
            let candidate = coords.position;

            // Sightline: is the path from above the object down to the
            // candidate free? A hit very close to the candidate is the
            // candidate resting against a surface; a distant hit is a
            // wall or an actor in the way.
            let sightline = raycast.cast_ray(trace_start, candidate, &exclude);
            if sightline.hit
                && sightline
                    .hit_point
                    .map_or(true, |p| p.distance(&candidate) > CONTACT_TOLERANCE)
            {
                trace!("[Slots] {:?} candidate blocked by sightline", ty);
                continue;
            }

            // Clearance: enough headroom straight up?
            let overhead = Point3D::new(candidate.x, candidate.y, candidate.z + HEADROOM);
            if raycast.cast_ray(candidate, overhead, &exclude).hit {
                trace!("[Slots] {:?} candidate lacks headroom", ty);
                continue;
            }
            points.push(coords);
        }
        debug!(
            "[Slots] {:?}: {}/{} candidates survived",
            ty,
            points.len(),
            offsets.len()
        );
        result.push((*ty, points));
    }
    result
}

/// Compute, per furniture type, the single validated point closest to
/// `reference`.
///
/// Runs [`candidates_in_bound`] and keeps for each row the survivor
/// minimizing straight-line distance to the reference entity's current
/// position. Rows with no survivors are omitted entirely.
pub fn closest_candidate_in_bound<E: WorldEntity>(
    catalog: &OffsetCatalog,
    target: &E,
    filter: TypeFilter,
    reference: &E,
    raycast: &dyn RaycastService,
) -> Vec<(FurnitureType, Coordinate)> {
    let center = reference.position();
    let valids = candidates_in_bound(catalog, target, filter, raycast);
    let mut result = Vec::new();
    for (ty, coordinates) in valids {
        let closest = coordinates.into_iter().min_by(|a, b| {
            a.position
                .distance_squared(&center)
                .partial_cmp(&b.position.distance_squared(&center))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(coords) = closest {
            result.push((ty, coords));
        }
    }
    result
}
