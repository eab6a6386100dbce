//! Portion processors.

use std::any::Any;

use super::{traced, DataPriority, ManipulatorProcessor, ValueProcessor};
use crate::container::DataContainer;
use crate::core::{PortionType, Result};
use crate::host::{BlockState, DataHolder};
use crate::key::keys::PORTION_TYPE;
use crate::key::{Key, Value};
use crate::manipulator::{ImmutablePortionData, PortionData};
use crate::transaction::{DataTransactionResult, TransactionType};

fn portion_block(target: &dyn Any) -> Option<&BlockState> {
    target
        .downcast_ref::<BlockState>()
        .filter(|block| block.block_type.has_portion())
}

/// Reads and writes [`PORTION_TYPE`] on portion facets and block states
/// whose block type has a portion.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortionValueProcessor;

impl ValueProcessor<PortionType> for PortionValueProcessor {
    fn key(&self) -> &'static Key<PortionType> {
        &PORTION_TYPE
    }

    fn supports(&self, target: &dyn Any) -> bool {
        target.is::<PortionData>()
            || target.is::<ImmutablePortionData>()
            || portion_block(target).is_some()
    }

    fn value_from(&self, target: &dyn Any) -> Option<PortionType> {
        if let Some(data) = target.downcast_ref::<PortionData>() {
            return Some(data.portion);
        }
        if let Some(data) = target.downcast_ref::<ImmutablePortionData>() {
            return Some(data.portion);
        }
        portion_block(target).and_then(|block| block.portion)
    }

    fn set(&self, target: &mut dyn Any, value: PortionType) -> Result<()> {
        if let Some(data) = target.downcast_mut::<PortionData>() {
            data.portion = value;
            return Ok(());
        }
        match target.downcast_mut::<BlockState>() {
            Some(block) if block.block_type.has_portion() => {
                block.portion = Some(value);
                Ok(())
            }
            _ => Err(self.unsupported_target()),
        }
    }

    fn with(&self, target: &dyn Any, value: PortionType) -> Option<Box<dyn Any>> {
        if target.is::<ImmutablePortionData>() {
            return Some(Box::new(ImmutablePortionData::new(value)));
        }
        if target.is::<PortionData>() {
            return Some(Box::new(PortionData::new(value)));
        }
        let block = portion_block(target)?;
        Some(Box::new(block.clone().with_portion(value)))
    }
}

/// Applies [`PortionData`] to block states.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortionDataProcessor;

impl ManipulatorProcessor<PortionData> for PortionDataProcessor {
    fn create(&self) -> PortionData {
        PortionData::new(PORTION_TYPE.default_value())
    }

    fn supports_holder(&self, holder: &dyn DataHolder) -> bool {
        portion_block(holder.as_any()).is_some()
    }

    fn get_from(&self, holder: &dyn DataHolder) -> Option<PortionData> {
        portion_block(holder.as_any())?.portion.map(PortionData::new)
    }

    fn set_data(
        &self,
        holder: &mut dyn DataHolder,
        manipulator: &PortionData,
        priority: DataPriority,
    ) -> DataTransactionResult {
        let host = holder.kind();
        let block = match holder.as_any_mut().downcast_mut::<BlockState>() {
            Some(block) if block.block_type.has_portion() => block,
            _ => return traced("PortionData", host, DataTransactionResult::fail(manipulator)),
        };
        if priority.holder_wins() && block.portion.is_some() {
            return traced("PortionData", host, DataTransactionResult::fail(manipulator));
        }

        let mut builder = DataTransactionResult::builder();
        if let Some(previous) = block.portion.replace(manipulator.portion) {
            builder = builder.replace(&Value::new(&PORTION_TYPE, previous));
        }
        let result = builder
            .success_data(manipulator)
            .result(TransactionType::Success)
            .build();
        traced("PortionData", host, result)
    }

    fn remove(&self, holder: &mut dyn DataHolder) -> bool {
        holder
            .as_any_mut()
            .downcast_mut::<BlockState>()
            .and_then(|block| block.portion.take())
            .is_some()
    }

    fn build(&self, container: &DataContainer) -> Option<PortionData> {
        container
            .get_string(PORTION_TYPE.query())
            .and_then(PortionType::from_id)
            .map(PortionData::new)
    }
}
