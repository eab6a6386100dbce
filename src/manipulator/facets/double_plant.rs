//! Double plant facet.
//!
//! Facets order by the plant type id, so a sorted collection of plant
//! facets reads alphabetically by id.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::container::DataContainer;
use crate::core::DoublePlantType;
use crate::key::keys::DOUBLE_PLANT_TYPE;
use crate::key::{ErasedValue, ImmutableValue, Value};
use crate::manipulator::{DataManipulator, Facet, ImmutableDataManipulator};

/// The variant of a two-block-tall plant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoublePlantData {
    pub(crate) plant_type: DoublePlantType,
}

impl DoublePlantData {
    /// Create a facet with the given plant variant.
    #[must_use]
    pub fn new(plant_type: DoublePlantType) -> Self {
        Self { plant_type }
    }

    /// The stored plant variant.
    #[must_use]
    pub fn plant_type(&self) -> DoublePlantType {
        self.plant_type
    }

    /// The plant variant bound to [`DOUBLE_PLANT_TYPE`].
    #[must_use]
    pub fn plant_type_value(&self) -> Value<DoublePlantType> {
        Value::new(&DOUBLE_PLANT_TYPE, self.plant_type)
    }
}

impl PartialOrd for DoublePlantData {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DoublePlantData {
    fn cmp(&self, other: &Self) -> Ordering {
        self.plant_type.id().cmp(other.plant_type.id())
    }
}

impl Facet for DoublePlantData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&DOUBLE_PLANT_TYPE, self.plant_type))]
    }

    fn to_container(&self) -> DataContainer {
        DataContainer::new().with(DOUBLE_PLANT_TYPE.query(), self.plant_type.id())
    }
}

impl DataManipulator for DoublePlantData {
    type Immutable = ImmutableDoublePlantData;

    fn as_immutable(&self) -> ImmutableDoublePlantData {
        ImmutableDoublePlantData {
            plant_type: self.plant_type,
        }
    }
}

/// Frozen double plant facet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImmutableDoublePlantData {
    pub(crate) plant_type: DoublePlantType,
}

impl ImmutableDoublePlantData {
    /// Create a facet with the given plant variant.
    #[must_use]
    pub fn new(plant_type: DoublePlantType) -> Self {
        Self { plant_type }
    }

    /// The stored plant variant.
    #[must_use]
    pub fn plant_type(&self) -> DoublePlantType {
        self.plant_type
    }

    /// The plant variant bound to [`DOUBLE_PLANT_TYPE`].
    #[must_use]
    pub fn plant_type_value(&self) -> ImmutableValue<DoublePlantType> {
        ImmutableValue::new(&DOUBLE_PLANT_TYPE, self.plant_type)
    }
}

impl PartialOrd for ImmutableDoublePlantData {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ImmutableDoublePlantData {
    fn cmp(&self, other: &Self) -> Ordering {
        self.plant_type.id().cmp(other.plant_type.id())
    }
}

impl Facet for ImmutableDoublePlantData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&DOUBLE_PLANT_TYPE, self.plant_type))]
    }

    fn to_container(&self) -> DataContainer {
        DataContainer::new().with(DOUBLE_PLANT_TYPE.query(), self.plant_type.id())
    }
}

impl ImmutableDataManipulator for ImmutableDoublePlantData {
    type Mutable = DoublePlantData;

    fn as_mutable(&self) -> DoublePlantData {
        DoublePlantData {
            plant_type: self.plant_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_id() {
        let mut plants: Vec<DoublePlantData> =
            DoublePlantType::ALL.into_iter().map(DoublePlantData::new).collect();
        plants.sort();
        let ids: Vec<&str> = plants.iter().map(|p| p.plant_type().id()).collect();
        assert_eq!(
            ids,
            ["double_fern", "double_grass", "double_rose", "paeonia", "sunflower", "syringa"]
        );
        let rose = ImmutableDoublePlantData::new(DoublePlantType::Rose);
        assert!(rose > ImmutableDoublePlantData::new(DoublePlantType::Fern));
    }

    #[test]
    fn test_type_value_and_container() {
        let data = DoublePlantData::new(DoublePlantType::Sunflower);
        assert_eq!(*data.plant_type_value().get(), DoublePlantType::Sunflower);
        assert_eq!(*data.as_immutable().plant_type_value().get(), DoublePlantType::Sunflower);
        assert_eq!(data.to_container().get_string("DoubleSizePlantType"), Some("sunflower"));
        assert_eq!(data.as_immutable().as_mutable(), data);
        assert_eq!(DoublePlantData::default().plant_type(), DoublePlantType::Grass);
    }
}
