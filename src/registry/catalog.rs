//! Offset catalog: per-type interaction-point offsets.
//!
//! The catalog is built once at startup from an already-parsed YAML
//! tree and is read-only afterwards. Malformed entries are logged and
//! skipped rather than failing the whole load; a partial catalog is
//! still usable.
//!
//! Two tree shapes are accepted:
//!
//! ```yaml
//! # Mapping form
//! Chair:
//!   Offset: [30.0, 0.0, 0.0, 0.0]
//! BedDouble:
//!   Offset:
//!     - [0.0, 35.0, 0.0, 0.0]
//!     - [0.0, -35.0, 0.0, 0.0]
//! ```
//!
//! or a sequence of such single-entry mappings, which allows the same
//! type name to appear more than once (each occurrence contributes its
//! own catalog row).

use crate::core::Offset;
use crate::registry::types::FurnitureType;
use log::{error, warn};
use serde_yaml::Value;
use std::path::Path;

/// Catalog of candidate interaction offsets, keyed by furniture type.
///
/// Rows preserve configuration order; duplicate type names are kept as
/// separate rows rather than merged.
#[derive(Clone, Debug, Default)]
pub struct OffsetCatalog {
    rows: Vec<(FurnitureType, Vec<Offset>)>,
}

impl OffsetCatalog {
    /// Build a catalog from an already-parsed configuration tree.
    ///
    /// Never fails: entries with unknown type names, missing `Offset`
    /// fields, or no valid offset records are logged and skipped, and
    /// offset records that do not decode to exactly 4 numeric
    /// components are discarded individually.
    pub fn parse(tree: &Value) -> OffsetCatalog {
        let mut rows = Vec::new();
        match tree {
            Value::Mapping(map) => {
                for (key, value) in map {
                    parse_entry(key, value, &mut rows);
                }
            }
            Value::Sequence(seq) => {
                for item in seq {
                    if let Value::Mapping(map) = item {
                        for (key, value) in map {
                            parse_entry(key, value, &mut rows);
                        }
                    } else {
                        error!("[Catalog] Expected a mapping entry, got: {:?}", item);
                    }
                }
            }
            _ => {
                error!("[Catalog] Configuration root is neither a mapping nor a sequence");
            }
        }
        OffsetCatalog { rows }
    }

    /// Load a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<OffsetCatalog, CatalogError> {
        let tree: Value =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Ok(Self::parse(&tree))
    }

    /// Load a catalog from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<OffsetCatalog, CatalogError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// All catalog rows in configuration order.
    #[inline]
    pub fn rows(&self) -> &[(FurnitureType, Vec<Offset>)] {
        &self.rows
    }

    /// All offsets registered for `ty`, in catalog order.
    ///
    /// Concatenates every row for the type; empty if the type never
    /// parsed as valid.
    pub fn lookup(&self, ty: FurnitureType) -> Vec<Offset> {
        self.rows
            .iter()
            .filter(|(row_ty, _)| *row_ty == ty)
            .flat_map(|(_, offsets)| offsets.iter().copied())
            .collect()
    }

    /// Number of catalog rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the catalog holds no rows at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn parse_entry(key: &Value, value: &Value, rows: &mut Vec<(FurnitureType, Vec<Offset>)>) {
    let name = match key.as_str() {
        Some(name) => name,
        None => {
            error!("[Catalog] Type name is not a string: {:?}", key);
            return;
        }
    };
    let ty = match FurnitureType::from_name(name) {
        Some(ty) => ty,
        None => {
            error!("[Catalog] Unrecognized furniture type: '{}'", name);
            return;
        }
    };
    let offset_node = match value.get("Offset") {
        Some(node) => node,
        None => {
            error!("[Catalog] Missing 'Offset' field for type '{}'", name);
            return;
        }
    };

    let mut offsets = Vec::new();
    match offset_node {
        // A sequence of sequences is a list of records; a flat sequence
        // is a single record.
        Value::Sequence(seq) if seq.first().map_or(false, Value::is_sequence) => {
            offsets.reserve(seq.len());
            for record in seq {
                if let Some(offset) = decode_record(record) {
                    offsets.push(offset);
                }
            }
        }
        node => {
            if let Some(offset) = decode_record(node) {
                offsets.push(offset);
            }
        }
    }

    if offsets.is_empty() {
        warn!("[Catalog] Type '{}' is defined but has no valid offsets", name);
        return;
    }
    rows.push((ty, offsets));
}

/// Decode one offset record: exactly 4 numeric components (x, y, z,
/// rotation). Any other arity is rejected.
fn decode_record(node: &Value) -> Option<Offset> {
    let seq = match node.as_sequence() {
        Some(seq) => seq,
        None => {
            error!("[Catalog] Offset record is not a sequence: {:?}", node);
            return None;
        }
    };
    let mut components = Vec::with_capacity(seq.len());
    for value in seq {
        match value.as_f64() {
            Some(f) => components.push(f as f32),
            None => {
                error!("[Catalog] Offset component is not numeric: {:?}", value);
                return None;
            }
        }
    }
    if components.len() != 4 {
        error!(
            "[Catalog] Invalid offset size. Expected 4 but got {}",
            components.len()
        );
        return None;
    }
    Some(Offset::new(
        components[0],
        components[1],
        components[2],
        components[3],
    ))
}

/// Catalog loading error.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// File I/O error.
    IoError(String),
    /// YAML parsing error.
    ParseError(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::IoError(msg) => write!(f, "IO error: {}", msg),
            CatalogError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}
