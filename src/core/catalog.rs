//! Catalog types carried by block facets.
//!
//! Each catalog type has a stable string id used at the container
//! boundary; the enum discriminant is never persisted.

use serde::{Deserialize, Serialize};

/// Which half of a two-block-tall structure (slab, stairs, door) a block is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortionType {
    Top,
    #[default]
    Bottom,
}

impl PortionType {
    /// Every portion type, in id order.
    pub const ALL: [PortionType; 2] = [PortionType::Top, PortionType::Bottom];

    /// Stable id used in containers.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            PortionType::Top => "top",
            PortionType::Bottom => "bottom",
        }
    }

    /// Look up a portion type by id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Default portion, usable as a key default.
    #[must_use]
    pub const fn bottom() -> Self {
        PortionType::Bottom
    }
}

/// Facing of a directional block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
    /// No facing.
    #[default]
    None,
}

impl Direction {
    /// Every direction, in id order.
    pub const ALL: [Direction; 7] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::None,
    ];

    /// Stable id used in containers.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::None => "NONE",
        }
    }

    /// Look up a direction by id (case-insensitive).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.id().eq_ignore_ascii_case(id))
    }

    /// The opposite direction. `None` is its own opposite.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    /// Default direction, usable as a key default.
    #[must_use]
    pub const fn none() -> Self {
        Direction::None
    }
}

/// Variant of a two-block-tall plant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoublePlantType {
    Sunflower,
    Syringa,
    #[default]
    Grass,
    Fern,
    Rose,
    Paeonia,
}

impl DoublePlantType {
    /// Every double plant type.
    pub const ALL: [DoublePlantType; 6] = [
        DoublePlantType::Sunflower,
        DoublePlantType::Syringa,
        DoublePlantType::Grass,
        DoublePlantType::Fern,
        DoublePlantType::Rose,
        DoublePlantType::Paeonia,
    ];

    /// Stable id used in containers.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            DoublePlantType::Sunflower => "sunflower",
            DoublePlantType::Syringa => "syringa",
            DoublePlantType::Grass => "double_grass",
            DoublePlantType::Fern => "double_fern",
            DoublePlantType::Rose => "double_rose",
            DoublePlantType::Paeonia => "paeonia",
        }
    }

    /// Look up a double plant type by id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Default plant, usable as a key default.
    #[must_use]
    pub const fn grass() -> Self {
        DoublePlantType::Grass
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
