//! Block state host.
//!
//! A block state is a block type plus whichever properties that type
//! carries. A property the block type lacks is `None`, and processors treat
//! such a block as not supporting the matching facet.

use std::any::Any;

use serde::{Deserialize, Serialize};

use super::DataHolder;
use crate::core::{Direction, DoublePlantType, PortionType};

/// Kinds of blocks used by the reference processors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// Plain block with no properties.
    Stone,
    /// Half block occupying the top or bottom of its space.
    Slab,
    /// Half-height block with a facing.
    Stairs,
    /// Facing block.
    Furnace,
    /// Two-block-tall plant with a plant variant.
    DoublePlant,
}

impl BlockType {
    /// Check if this block type has a portion property.
    #[must_use]
    pub const fn has_portion(self) -> bool {
        matches!(self, BlockType::Slab | BlockType::Stairs)
    }

    /// Check if this block type has a facing property.
    #[must_use]
    pub const fn has_direction(self) -> bool {
        matches!(self, BlockType::Stairs | BlockType::Furnace)
    }

    /// Check if this block type has a double plant variant.
    #[must_use]
    pub const fn has_plant_type(self) -> bool {
        matches!(self, BlockType::DoublePlant)
    }
}

/// A block type with its property values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockState {
    /// The block type.
    pub block_type: BlockType,

    /// Occupied half, if the block type has one.
    pub portion: Option<PortionType>,

    /// Facing, if the block type has one.
    pub direction: Option<Direction>,

    /// Plant variant, if the block type has one.
    #[serde(default)]
    pub plant_type: Option<DoublePlantType>,
}

impl BlockState {
    /// Create a state with default values for every property the block
    /// type carries.
    #[must_use]
    pub fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            portion: block_type.has_portion().then(PortionType::default),
            direction: block_type.has_direction().then_some(Direction::North),
            plant_type: block_type.has_plant_type().then(DoublePlantType::default),
        }
    }

    /// Set the portion (builder pattern).
    #[must_use]
    pub fn with_portion(mut self, portion: PortionType) -> Self {
        self.portion = Some(portion);
        self
    }

    /// Set the facing (builder pattern).
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the plant variant (builder pattern).
    #[must_use]
    pub fn with_plant_type(mut self, plant_type: DoublePlantType) -> Self {
        self.plant_type = Some(plant_type);
        self
    }
}

impl DataHolder for BlockState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&self) -> &'static str {
        "BlockState"
    }
}
