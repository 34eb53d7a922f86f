//! Slot resolution and bed discovery queries.
//!
//! All queries run synchronously on the calling thread and handle
//! missing data by returning empty results; an empty result means "no
//! eligible candidate found", never an error.

pub mod beds;
pub mod slots;

pub use beds::{classify_bed, find_beds_in_area, is_bed};
pub use slots::{
    candidates_in_bound, closest_candidate_in_bound, CONTACT_TOLERANCE, GROUND_CLEARANCE, HEADROOM,
};
