//! Facing processors.

use std::any::Any;

use super::{traced, DataPriority, ManipulatorProcessor, ValueProcessor};
use crate::container::DataContainer;
use crate::core::{Direction, Result};
use crate::host::{BlockState, DataHolder};
use crate::key::keys::DIRECTION;
use crate::key::{Key, Value};
use crate::manipulator::{DirectionalData, ImmutableDirectionalData};
use crate::transaction::{DataTransactionResult, TransactionType};

fn facing_block(target: &dyn Any) -> Option<&BlockState> {
    target
        .downcast_ref::<BlockState>()
        .filter(|block| block.block_type.has_direction())
}

/// Reads and writes [`DIRECTION`] on directional facets and block states
/// whose block type has a facing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionValueProcessor;

impl ValueProcessor<Direction> for DirectionValueProcessor {
    fn key(&self) -> &'static Key<Direction> {
        &DIRECTION
    }

    fn supports(&self, target: &dyn Any) -> bool {
        target.is::<DirectionalData>()
            || target.is::<ImmutableDirectionalData>()
            || facing_block(target).is_some()
    }

    fn value_from(&self, target: &dyn Any) -> Option<Direction> {
        if let Some(data) = target.downcast_ref::<DirectionalData>() {
            return Some(data.direction);
        }
        if let Some(data) = target.downcast_ref::<ImmutableDirectionalData>() {
            return Some(data.direction);
        }
        facing_block(target).and_then(|block| block.direction)
    }

    fn set(&self, target: &mut dyn Any, value: Direction) -> Result<()> {
        if let Some(data) = target.downcast_mut::<DirectionalData>() {
            data.direction = value;
            return Ok(());
        }
        match target.downcast_mut::<BlockState>() {
            Some(block) if block.block_type.has_direction() => {
                block.direction = Some(value);
                Ok(())
            }
            _ => Err(self.unsupported_target()),
        }
    }

    fn with(&self, target: &dyn Any, value: Direction) -> Option<Box<dyn Any>> {
        if target.is::<ImmutableDirectionalData>() {
            return Some(Box::new(ImmutableDirectionalData::new(value)));
        }
        if target.is::<DirectionalData>() {
            return Some(Box::new(DirectionalData::new(value)));
        }
        let block = facing_block(target)?;
        Some(Box::new(block.clone().with_direction(value)))
    }
}

/// Applies [`DirectionalData`] to block states.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionalDataProcessor;

impl ManipulatorProcessor<DirectionalData> for DirectionalDataProcessor {
    fn create(&self) -> DirectionalData {
        DirectionalData::new(DIRECTION.default_value())
    }

    fn supports_holder(&self, holder: &dyn DataHolder) -> bool {
        facing_block(holder.as_any()).is_some()
    }

    fn get_from(&self, holder: &dyn DataHolder) -> Option<DirectionalData> {
        facing_block(holder.as_any())?
            .direction
            .map(DirectionalData::new)
    }

    fn set_data(
        &self,
        holder: &mut dyn DataHolder,
        manipulator: &DirectionalData,
        priority: DataPriority,
    ) -> DataTransactionResult {
        let host = holder.kind();
        let block = match holder.as_any_mut().downcast_mut::<BlockState>() {
            Some(block) if block.block_type.has_direction() => block,
            _ => return traced("DirectionalData", host, DataTransactionResult::fail(manipulator)),
        };
        if priority.holder_wins() && block.direction.is_some() {
            return traced("DirectionalData", host, DataTransactionResult::fail(manipulator));
        }

        let mut builder = DataTransactionResult::builder();
        if let Some(previous) = block.direction.replace(manipulator.direction) {
            builder = builder.replace(&Value::new(&DIRECTION, previous));
        }
        let result = builder
            .success_data(manipulator)
            .result(TransactionType::Success)
            .build();
        traced("DirectionalData", host, result)
    }

    fn remove(&self, holder: &mut dyn DataHolder) -> bool {
        holder
            .as_any_mut()
            .downcast_mut::<BlockState>()
            .and_then(|block| block.direction.take())
            .is_some()
    }

    fn build(&self, container: &DataContainer) -> Option<DirectionalData> {
        container
            .get_string(DIRECTION.query())
            .and_then(Direction::from_id)
            .map(DirectionalData::new)
    }
}
