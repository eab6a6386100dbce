//! Portion facet.

use std::sync::Arc;

use crate::container::DataContainer;
use crate::core::PortionType;
use crate::key::keys::PORTION_TYPE;
use crate::key::{ErasedValue, ImmutableValue};
use crate::manipulator::{DataManipulator, Facet, ImmutableDataManipulator};

/// Which half of its space a block occupies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortionData {
    pub(crate) portion: PortionType,
}

impl PortionData {
    /// Create a facet with the given portion.
    #[must_use]
    pub fn new(portion: PortionType) -> Self {
        Self { portion }
    }

    /// The stored portion.
    #[must_use]
    pub fn portion(&self) -> PortionType {
        self.portion
    }
}

impl Facet for PortionData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&PORTION_TYPE, self.portion))]
    }

    fn to_container(&self) -> DataContainer {
        DataContainer::new().with(PORTION_TYPE.query(), self.portion.id())
    }
}

impl DataManipulator for PortionData {
    type Immutable = ImmutablePortionData;

    fn as_immutable(&self) -> ImmutablePortionData {
        ImmutablePortionData {
            portion: self.portion,
        }
    }
}

/// Frozen portion facet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImmutablePortionData {
    pub(crate) portion: PortionType,
}

impl ImmutablePortionData {
    /// Create a facet with the given portion.
    #[must_use]
    pub fn new(portion: PortionType) -> Self {
        Self { portion }
    }

    /// The stored portion.
    #[must_use]
    pub fn portion(&self) -> PortionType {
        self.portion
    }
}

impl Facet for ImmutablePortionData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&PORTION_TYPE, self.portion))]
    }

    fn to_container(&self) -> DataContainer {
        DataContainer::new().with(PORTION_TYPE.query(), self.portion.id())
    }
}

impl ImmutableDataManipulator for ImmutablePortionData {
    type Mutable = PortionData;

    fn as_mutable(&self) -> PortionData {
        PortionData {
            portion: self.portion,
        }
    }
}
