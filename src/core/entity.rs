//! Entity identification.
//!
//! Every entity host carries a unique `EntityId`. Ids are opaque to the
//! data framework; collaborators allocate them.
//!
//! ## Usage
//!
//! ```
//! use hostdata::core::EntityId;
//!
//! let id = EntityId::new(7);
//! assert_eq!(id.raw(), 7);
//! assert_eq!(id.to_string(), "Entity(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for an entity host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID following this one, for sequential allocation.
    ///
    /// Saturates at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
