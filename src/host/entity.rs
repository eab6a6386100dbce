//! Entity host.

use std::any::Any;

use serde::{Deserialize, Serialize};

use super::DataHolder;
use crate::core::{EntityId, Vector3d};

/// A moving object in the world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,

    /// Current motion per tick.
    pub motion: Vector3d,
}

impl Entity {
    /// Create a stationary entity.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            motion: Vector3d::ZERO,
        }
    }

    /// Set the motion (builder pattern).
    #[must_use]
    pub fn with_motion(mut self, motion: Vector3d) -> Self {
        self.motion = motion;
        self
    }

    /// Check if the entity is moving.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        !self.motion.is_zero()
    }
}

impl DataHolder for Entity {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&self) -> &'static str {
        "Entity"
    }
}
