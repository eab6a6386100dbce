//! Facing facet.

use std::sync::Arc;

use crate::container::DataContainer;
use crate::core::Direction;
use crate::key::keys::DIRECTION;
use crate::key::{ErasedValue, ImmutableValue};
use crate::manipulator::{DataManipulator, Facet, ImmutableDataManipulator};

/// The direction a block faces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectionalData {
    pub(crate) direction: Direction,
}

impl DirectionalData {
    /// Create a facet with the given direction.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// The stored direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Facet for DirectionalData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&DIRECTION, self.direction))]
    }

    fn to_container(&self) -> DataContainer {
        DataContainer::new().with(DIRECTION.query(), self.direction.id())
    }
}

impl DataManipulator for DirectionalData {
    type Immutable = ImmutableDirectionalData;

    fn as_immutable(&self) -> ImmutableDirectionalData {
        ImmutableDirectionalData {
            direction: self.direction,
        }
    }
}

/// Frozen facing facet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImmutableDirectionalData {
    pub(crate) direction: Direction,
}

impl ImmutableDirectionalData {
    /// Create a facet with the given direction.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// The stored direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Facet for ImmutableDirectionalData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&DIRECTION, self.direction))]
    }

    fn to_container(&self) -> DataContainer {
        DataContainer::new().with(DIRECTION.query(), self.direction.id())
    }
}

impl ImmutableDataManipulator for ImmutableDirectionalData {
    type Mutable = DirectionalData;

    fn as_mutable(&self) -> DirectionalData {
        DirectionalData {
            direction: self.direction,
        }
    }
}
