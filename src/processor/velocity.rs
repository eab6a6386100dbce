//! Velocity processors.
//!
//! A stationary entity has no velocity: reading the facet from it yields
//! `None` rather than a zero vector.

use std::any::Any;

use super::{traced, DataPriority, ManipulatorProcessor, ValueProcessor};
use crate::container::DataContainer;
use crate::core::{DataConfig, DataError, Result, Vector3d};
use crate::host::{DataHolder, Entity};
use crate::key::keys::VELOCITY;
use crate::key::{Key, Value};
use crate::manipulator::facets::VELOCITY_AXES;
use crate::manipulator::{ImmutableVelocityData, VelocityData};
use crate::transaction::{DataTransactionResult, TransactionType};

/// True if `velocity` is unusable on an entity moving at most `max` per axis.
fn exceeds_limit(velocity: Vector3d, max: f64) -> bool {
    !velocity.is_finite() || velocity.max_abs_component() > max
}

/// Reads and writes [`VELOCITY`] on velocity facets and entities.
///
/// Facets accept any vector. Entities refuse non-finite vectors and
/// anything faster than the configured per-axis limit.
#[derive(Clone, Copy, Debug)]
pub struct VelocityValueProcessor {
    max_velocity: f64,
}

impl VelocityValueProcessor {
    /// Create a processor using the velocity limit from `config`.
    #[must_use]
    pub fn new(config: &DataConfig) -> Self {
        Self {
            max_velocity: config.max_velocity,
        }
    }
}

impl Default for VelocityValueProcessor {
    fn default() -> Self {
        Self::new(&DataConfig::default())
    }
}

impl ValueProcessor<Vector3d> for VelocityValueProcessor {
    fn key(&self) -> &'static Key<Vector3d> {
        &VELOCITY
    }

    fn supports(&self, target: &dyn Any) -> bool {
        target.is::<VelocityData>() || target.is::<ImmutableVelocityData>() || target.is::<Entity>()
    }

    fn value_from(&self, target: &dyn Any) -> Option<Vector3d> {
        if let Some(data) = target.downcast_ref::<VelocityData>() {
            return Some(data.velocity);
        }
        if let Some(data) = target.downcast_ref::<ImmutableVelocityData>() {
            return Some(data.velocity);
        }
        target.downcast_ref::<Entity>().map(|entity| entity.motion)
    }

    fn set(&self, target: &mut dyn Any, value: Vector3d) -> Result<()> {
        if let Some(data) = target.downcast_mut::<VelocityData>() {
            data.velocity = value;
            return Ok(());
        }
        if let Some(entity) = target.downcast_mut::<Entity>() {
            if exceeds_limit(value, self.max_velocity) {
                return Err(DataError::rejected(
                    VELOCITY.id().as_str(),
                    "not finite or above the velocity limit",
                ));
            }
            entity.motion = value;
            return Ok(());
        }
        Err(self.unsupported_target())
    }

    fn with(&self, target: &dyn Any, value: Vector3d) -> Option<Box<dyn Any>> {
        if target.is::<ImmutableVelocityData>() {
            return Some(Box::new(ImmutableVelocityData::new(value)));
        }
        if target.is::<VelocityData>() {
            return Some(Box::new(VelocityData::new(value)));
        }
        let entity = target.downcast_ref::<Entity>()?;
        if exceeds_limit(value, self.max_velocity) {
            return None;
        }
        Some(Box::new(entity.clone().with_motion(value)))
    }
}

/// Applies [`VelocityData`] to entities.
///
/// Offers faster than the configured per-axis limit, or with a non-finite
/// component, are rejected.
#[derive(Clone, Debug)]
pub struct VelocityDataProcessor {
    max_velocity: f64,
}

impl VelocityDataProcessor {
    /// Create a processor using the velocity limit from `config`.
    #[must_use]
    pub fn new(config: &DataConfig) -> Self {
        Self {
            max_velocity: config.max_velocity,
        }
    }
}

impl ManipulatorProcessor<VelocityData> for VelocityDataProcessor {
    fn create(&self) -> VelocityData {
        VelocityData::new(VELOCITY.default_value())
    }

    fn supports_holder(&self, holder: &dyn DataHolder) -> bool {
        holder.as_any().is::<Entity>()
    }

    fn get_from(&self, holder: &dyn DataHolder) -> Option<VelocityData> {
        let entity = holder.as_any().downcast_ref::<Entity>()?;
        entity.is_moving().then(|| VelocityData::new(entity.motion))
    }

    fn set_data(
        &self,
        holder: &mut dyn DataHolder,
        manipulator: &VelocityData,
        priority: DataPriority,
    ) -> DataTransactionResult {
        let host = holder.kind();
        let Some(entity) = holder.as_any_mut().downcast_mut::<Entity>() else {
            return traced("VelocityData", host, DataTransactionResult::fail(manipulator));
        };
        if exceeds_limit(manipulator.velocity, self.max_velocity) {
            return traced("VelocityData", host, DataTransactionResult::fail(manipulator));
        }
        if priority.holder_wins() && entity.is_moving() {
            return traced("VelocityData", host, DataTransactionResult::fail(manipulator));
        }

        let mut builder = DataTransactionResult::builder();
        if entity.is_moving() {
            builder = builder.replace(&Value::new(&VELOCITY, entity.motion));
        }
        entity.motion = manipulator.velocity;

        let result = builder
            .success_data(manipulator)
            .result(TransactionType::Success)
            .build();
        traced("VelocityData", host, result)
    }

    fn remove(&self, holder: &mut dyn DataHolder) -> bool {
        match holder.as_any_mut().downcast_mut::<Entity>() {
            Some(entity) if entity.is_moving() => {
                entity.motion = Vector3d::ZERO;
                true
            }
            _ => false,
        }
    }

    fn build(&self, container: &DataContainer) -> Option<VelocityData> {
        let base = VELOCITY.query();
        let [x, y, z] = VELOCITY_AXES;
        Some(VelocityData::new(Vector3d::new(
            container.get_double(base.child(x))?,
            container.get_double(base.child(y))?,
            container.get_double(base.child(z))?,
        )))
    }
}
