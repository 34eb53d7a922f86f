//! Furniture type table and offset catalog.
//!
//! - [`FurnitureType`]: closed enumeration of recognized subtypes
//! - [`TypeFilter`]: bitmask over furniture types for multi-type queries
//! - [`OffsetCatalog`]: per-type interaction offsets loaded from YAML

mod catalog;
mod types;

pub use catalog::{CatalogError, OffsetCatalog};
pub use types::{FurnitureType, TypeFilter};
