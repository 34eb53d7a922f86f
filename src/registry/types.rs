//! Closed furniture type enumeration and type filters.
//!
//! The type set is fixed at compile time; configuration refers to types
//! by name and unknown names are rejected at parse time. Each variant
//! occupies one bit so that a set of requested types fits in a single
//! [`TypeFilter`] word.

use serde::{Deserialize, Serialize};

/// A recognized furniture subtype.
///
/// `None` is the sentinel "unclassified" value; every other variant is
/// a distinct one-bit flag usable in a [`TypeFilter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u32)]
pub enum FurnitureType {
    /// Not recognized as any furniture subtype.
    #[default]
    None = 0,

    /// Portable bedroll laid on the ground.
    BedRoll = 1 << 0,
    /// Single-sleeper bed.
    BedSingle = 1 << 1,
    /// Double-sleeper bed.
    BedDouble = 1 << 2,

    /// Plain wall surface.
    Wall = 1 << 3,
    /// Railing or balustrade.
    Railing = 1 << 4,

    /// Cooking pot or spit.
    CraftCookingPot = 1 << 5,
    /// Alchemy workstation.
    CraftAlchemy = 1 << 6,
    /// Enchanting workstation.
    CraftEnchanting = 1 << 7,
    /// Smithing forge.
    CraftSmithing = 1 << 8,
    /// Blacksmith anvil.
    CraftAnvil = 1 << 9,
    /// Generic workbench.
    CraftWorkbench = 1 << 10,
    /// Sharpening grindstone.
    CraftGrindstone = 1 << 11,

    /// Dining or work table.
    Table = 1 << 12,
    /// Bar counter.
    TableCounter = 1 << 13,

    /// Generic chair.
    Chair = 1 << 14,
    /// Common wooden chair with armrests.
    ChairCommon = 1 << 15,
    /// Plain wooden chair.
    ChairWood = 1 << 16,
    /// Bar stool.
    ChairBar = 1 << 17,
    /// Upholstered noble chair.
    ChairNoble = 1 << 18,
    /// Other chair variants.
    ChairMisc = 1 << 19,

    /// Generic bench.
    Bench = 1 << 20,
    /// Upholstered noble bench.
    BenchNoble = 1 << 21,
    /// Other bench variants.
    BenchMisc = 1 << 22,

    /// Generic throne.
    Throne = 1 << 23,
    /// Ornate stone throne.
    ThroneOrnate = 1 << 24,
    /// Rustic carved throne.
    ThroneRustic = 1 << 25,

    /// X-shaped restraint cross.
    XCross = 1 << 26,
    /// Pillory stock.
    Pillory = 1 << 27,
}

/// Name table for configuration lookups. Names match the variant
/// identifiers; comparison is case-insensitive.
const NAME_TABLE: &[(&str, FurnitureType)] = &[
    ("BedRoll", FurnitureType::BedRoll),
    ("BedSingle", FurnitureType::BedSingle),
    ("BedDouble", FurnitureType::BedDouble),
    ("Wall", FurnitureType::Wall),
    ("Railing", FurnitureType::Railing),
    ("CraftCookingPot", FurnitureType::CraftCookingPot),
    ("CraftAlchemy", FurnitureType::CraftAlchemy),
    ("CraftEnchanting", FurnitureType::CraftEnchanting),
    ("CraftSmithing", FurnitureType::CraftSmithing),
    ("CraftAnvil", FurnitureType::CraftAnvil),
    ("CraftWorkbench", FurnitureType::CraftWorkbench),
    ("CraftGrindstone", FurnitureType::CraftGrindstone),
    ("Table", FurnitureType::Table),
    ("TableCounter", FurnitureType::TableCounter),
    ("Chair", FurnitureType::Chair),
    ("ChairCommon", FurnitureType::ChairCommon),
    ("ChairWood", FurnitureType::ChairWood),
    ("ChairBar", FurnitureType::ChairBar),
    ("ChairNoble", FurnitureType::ChairNoble),
    ("ChairMisc", FurnitureType::ChairMisc),
    ("Bench", FurnitureType::Bench),
    ("BenchNoble", FurnitureType::BenchNoble),
    ("BenchMisc", FurnitureType::BenchMisc),
    ("Throne", FurnitureType::Throne),
    ("ThroneOrnate", FurnitureType::ThroneOrnate),
    ("ThroneRustic", FurnitureType::ThroneRustic),
    ("XCross", FurnitureType::XCross),
    ("Pillory", FurnitureType::Pillory),
];

impl FurnitureType {
    /// Resolve a configuration type name, case-insensitively.
    ///
    /// Returns `None` for unrecognized names; the sentinel `None`
    /// variant is not nameable.
    pub fn from_name(name: &str) -> Option<FurnitureType> {
        NAME_TABLE
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|&(_, ty)| ty)
    }

    /// Canonical name of this type, or `"None"` for the sentinel.
    pub fn name(self) -> &'static str {
        NAME_TABLE
            .iter()
            .find(|&&(_, ty)| ty == self)
            .map(|&(name, _)| name)
            .unwrap_or("None")
    }
}

/// A set of furniture types, stored as a fixed-width bitmask.
///
/// Used to request several types in one slot query. A plain value type:
/// cheap to copy, combinable with `|`.
///
/// # Example
/// ```
/// use asana_query::registry::{FurnitureType, TypeFilter};
///
/// let filter = TypeFilter::of(FurnitureType::Chair) | TypeFilter::beds();
/// assert!(filter.contains(FurnitureType::Chair));
/// assert!(filter.contains(FurnitureType::BedSingle));
/// assert!(!filter.contains(FurnitureType::Table));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFilter(u32);

impl TypeFilter {
    /// The empty filter (matches nothing).
    pub const EMPTY: TypeFilter = TypeFilter(0);

    /// Filter matching every furniture type.
    pub const ALL: TypeFilter = TypeFilter(u32::MAX);

    /// Filter matching a single type.
    ///
    /// `FurnitureType::None` yields the empty filter: the sentinel is
    /// never a member of any set.
    #[inline]
    pub const fn of(ty: FurnitureType) -> Self {
        TypeFilter(ty as u32)
    }

    /// Filter matching the three bed subtypes.
    #[inline]
    pub const fn beds() -> Self {
        TypeFilter(
            FurnitureType::BedRoll as u32
                | FurnitureType::BedSingle as u32
                | FurnitureType::BedDouble as u32,
        )
    }

    /// Check whether `ty` is a member of this filter.
    #[inline]
    pub const fn contains(self, ty: FurnitureType) -> bool {
        let bits = ty as u32;
        bits != 0 && self.0 & bits != 0
    }

    /// Add a type to this filter.
    #[inline]
    pub fn insert(&mut self, ty: FurnitureType) {
        self.0 |= ty as u32;
    }

    /// Whether the filter matches nothing.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for TypeFilter {
    type Output = Self;

    #[inline]
    fn bitor(self, other: Self) -> Self {
        TypeFilter(self.0 | other.0)
    }
}

impl From<FurnitureType> for TypeFilter {
    #[inline]
    fn from(ty: FurnitureType) -> Self {
        TypeFilter::of(ty)
    }
}

impl FromIterator<FurnitureType> for TypeFilter {
    fn from_iter<I: IntoIterator<Item = FurnitureType>>(iter: I) -> Self {
        let mut filter = TypeFilter::EMPTY;
        for ty in iter {
            filter.insert(ty);
        }
        filter
    }
}
