//! Core value types.
//!
//! Fundamental types used throughout the crate:
//! - [`Point3D`]: world-space 3D vector
//! - [`Coordinate`] and [`Offset`]: world pose and relative pose delta
//! - [`Bounds3D`]: axis-aligned bounding box
//! - [`normalize_angle`]: yaw normalization

mod bounds;
mod coordinate;
pub mod math;
mod point;

pub use bounds::Bounds3D;
pub use coordinate::{Coordinate, Offset};
pub use math::normalize_angle;
pub use point::Point3D;
