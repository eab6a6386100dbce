//! Velocity facet.

use std::sync::Arc;

use crate::container::DataContainer;
use crate::core::Vector3d;
use crate::key::keys::VELOCITY;
use crate::key::{ErasedValue, ImmutableValue};
use crate::manipulator::{DataManipulator, Facet, ImmutableDataManipulator};

/// Container entry names under the velocity path.
pub(crate) const AXES: [&str; 3] = ["X", "Y", "Z"];

fn velocity_container(velocity: Vector3d) -> DataContainer {
    let base = VELOCITY.query();
    DataContainer::new()
        .with(base.child(AXES[0]), velocity.x)
        .with(base.child(AXES[1]), velocity.y)
        .with(base.child(AXES[2]), velocity.z)
}

/// How fast and in which direction an entity moves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VelocityData {
    pub(crate) velocity: Vector3d,
}

impl VelocityData {
    /// Create a facet with the given velocity.
    #[must_use]
    pub fn new(velocity: Vector3d) -> Self {
        Self { velocity }
    }

    /// The stored velocity.
    #[must_use]
    pub fn velocity(&self) -> Vector3d {
        self.velocity
    }
}

impl Facet for VelocityData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&VELOCITY, self.velocity))]
    }

    fn to_container(&self) -> DataContainer {
        velocity_container(self.velocity)
    }
}

impl DataManipulator for VelocityData {
    type Immutable = ImmutableVelocityData;

    fn as_immutable(&self) -> ImmutableVelocityData {
        ImmutableVelocityData {
            velocity: self.velocity,
        }
    }
}

/// Frozen velocity facet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImmutableVelocityData {
    pub(crate) velocity: Vector3d,
}

impl ImmutableVelocityData {
    /// Create a facet with the given velocity.
    #[must_use]
    pub fn new(velocity: Vector3d) -> Self {
        Self { velocity }
    }

    /// The stored velocity.
    #[must_use]
    pub fn velocity(&self) -> Vector3d {
        self.velocity
    }
}

impl Facet for ImmutableVelocityData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&VELOCITY, self.velocity))]
    }

    fn to_container(&self) -> DataContainer {
        velocity_container(self.velocity)
    }
}

impl ImmutableDataManipulator for ImmutableVelocityData {
    type Mutable = VelocityData;

    fn as_mutable(&self) -> VelocityData {
        VelocityData {
            velocity: self.velocity,
        }
    }
}
