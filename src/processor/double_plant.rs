//! Double plant processors.

use std::any::Any;

use super::{traced, DataPriority, ManipulatorProcessor, ValueProcessor};
use crate::container::DataContainer;
use crate::core::{DoublePlantType, Result};
use crate::host::{BlockState, DataHolder};
use crate::key::keys::DOUBLE_PLANT_TYPE;
use crate::key::{Key, Value};
use crate::manipulator::{DoublePlantData, ImmutableDoublePlantData};
use crate::transaction::{DataTransactionResult, TransactionType};

fn plant_block(target: &dyn Any) -> Option<&BlockState> {
    target
        .downcast_ref::<BlockState>()
        .filter(|block| block.block_type.has_plant_type())
}

/// Reads and writes [`DOUBLE_PLANT_TYPE`] on plant facets and double plant
/// blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoublePlantTypeValueProcessor;

impl ValueProcessor<DoublePlantType> for DoublePlantTypeValueProcessor {
    fn key(&self) -> &'static Key<DoublePlantType> {
        &DOUBLE_PLANT_TYPE
    }

    fn supports(&self, target: &dyn Any) -> bool {
        target.is::<DoublePlantData>()
            || target.is::<ImmutableDoublePlantData>()
            || plant_block(target).is_some()
    }

    fn value_from(&self, target: &dyn Any) -> Option<DoublePlantType> {
        if let Some(data) = target.downcast_ref::<DoublePlantData>() {
            return Some(data.plant_type);
        }
        if let Some(data) = target.downcast_ref::<ImmutableDoublePlantData>() {
            return Some(data.plant_type);
        }
        plant_block(target).and_then(|block| block.plant_type)
    }

    fn set(&self, target: &mut dyn Any, value: DoublePlantType) -> Result<()> {
        if let Some(data) = target.downcast_mut::<DoublePlantData>() {
            data.plant_type = value;
            return Ok(());
        }
        match target.downcast_mut::<BlockState>() {
            Some(block) if block.block_type.has_plant_type() => {
                block.plant_type = Some(value);
                Ok(())
            }
            _ => Err(self.unsupported_target()),
        }
    }

    fn with(&self, target: &dyn Any, value: DoublePlantType) -> Option<Box<dyn Any>> {
        if target.is::<ImmutableDoublePlantData>() {
            return Some(Box::new(ImmutableDoublePlantData::new(value)));
        }
        if target.is::<DoublePlantData>() {
            return Some(Box::new(DoublePlantData::new(value)));
        }
        let block = plant_block(target)?;
        Some(Box::new(block.clone().with_plant_type(value)))
    }
}

/// Applies [`DoublePlantData`] to double plant blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoublePlantDataProcessor;

impl ManipulatorProcessor<DoublePlantData> for DoublePlantDataProcessor {
    fn create(&self) -> DoublePlantData {
        DoublePlantData::new(DOUBLE_PLANT_TYPE.default_value())
    }

    fn supports_holder(&self, holder: &dyn DataHolder) -> bool {
        plant_block(holder.as_any()).is_some()
    }

    fn get_from(&self, holder: &dyn DataHolder) -> Option<DoublePlantData> {
        plant_block(holder.as_any())?.plant_type.map(DoublePlantData::new)
    }

    fn set_data(
        &self,
        holder: &mut dyn DataHolder,
        manipulator: &DoublePlantData,
        priority: DataPriority,
    ) -> DataTransactionResult {
        let host = holder.kind();
        let block = match holder.as_any_mut().downcast_mut::<BlockState>() {
            Some(block) if block.block_type.has_plant_type() => block,
            _ => return traced("DoublePlantData", host, DataTransactionResult::fail(manipulator)),
        };
        if priority.holder_wins() && block.plant_type.is_some() {
            return traced("DoublePlantData", host, DataTransactionResult::fail(manipulator));
        }

        let mut builder = DataTransactionResult::builder();
        if let Some(previous) = block.plant_type.replace(manipulator.plant_type) {
            builder = builder.replace(&Value::new(&DOUBLE_PLANT_TYPE, previous));
        }
        let result = builder
            .success_data(manipulator)
            .result(TransactionType::Success)
            .build();
        traced("DoublePlantData", host, result)
    }

    fn remove(&self, holder: &mut dyn DataHolder) -> bool {
        holder
            .as_any_mut()
            .downcast_mut::<BlockState>()
            .and_then(|block| block.plant_type.take())
            .is_some()
    }

    fn build(&self, container: &DataContainer) -> Option<DoublePlantData> {
        container
            .get_string(DOUBLE_PLANT_TYPE.query())
            .and_then(DoublePlantType::from_id)
            .map(DoublePlantData::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::BlockType;

    #[test]
    fn test_only_plants_carry_plant_type() {
        let mut slab = BlockState::new(BlockType::Slab);

        assert!(!DoublePlantTypeValueProcessor.supports(&slab));
        assert!(DoublePlantTypeValueProcessor
            .set(&mut slab, DoublePlantType::Rose)
            .unwrap_err()
            .is_unsupported());
        assert!(DoublePlantDataProcessor.get_from(&slab).is_none());

        let result = DoublePlantDataProcessor.set_data(
            &mut slab,
            &DoublePlantData::new(DoublePlantType::Rose),
            DataPriority::DataManipulator,
        );
        assert_eq!(result.kind(), TransactionType::Failure);
        assert!(slab.plant_type.is_none());
    }

    #[test]
    fn test_set_data_replaces_plant_type() {
        let mut plant = BlockState::new(BlockType::DoublePlant);
        let sunflower = DoublePlantData::new(DoublePlantType::Sunflower);

        let kept = DoublePlantDataProcessor.set_data(&mut plant, &sunflower, DataPriority::DataHolder);
        assert_eq!(kept.kind(), TransactionType::Failure);
        assert_eq!(plant.plant_type, Some(DoublePlantType::Grass));

        let result = DoublePlantDataProcessor.set_data(&mut plant, &sunflower, DataPriority::DataManipulator);
        assert!(result.is_successful());
        assert_eq!(
            result.replaced_of(&DOUBLE_PLANT_TYPE).map(|v| *v.get()),
            Some(DoublePlantType::Grass)
        );
        assert_eq!(DoublePlantDataProcessor.get_from(&plant), Some(sunflower));

        assert!(DoublePlantDataProcessor.remove(&mut plant));
        assert!(!DoublePlantDataProcessor.remove(&mut plant));
    }

    #[test]
    fn test_with_on_block_copies() {
        let plant = BlockState::new(BlockType::DoublePlant);
        let fern = DoublePlantTypeValueProcessor.with(&plant, DoublePlantType::Fern).unwrap();
        let fern = fern.downcast::<BlockState>().unwrap();

        assert_eq!(fern.plant_type, Some(DoublePlantType::Fern));
        assert_eq!(plant.plant_type, Some(DoublePlantType::Grass));
    }

    #[test]
    fn test_build_from_container() {
        let container = DataContainer::new().with("DoubleSizePlantType", "paeonia");
        assert_eq!(
            DoublePlantDataProcessor.build(&container),
            Some(DoublePlantData::new(DoublePlantType::Paeonia))
        );
        let unknown = DataContainer::new().with("DoubleSizePlantType", "cactus");
        assert!(DoublePlantDataProcessor.build(&unknown).is_none());
    }
}
