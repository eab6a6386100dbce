//! Hosts: objects facets attach to.
//!
//! The framework never inspects a host directly. Processors check whether
//! they can handle a host by downcasting it, so a host only needs to expose
//! itself as [`Any`].
//!
//! ## Reference Hosts
//!
//! - [`Entity`]: Carries a motion vector
//! - [`SignTile`]: Carries lines of text
//! - [`BlockState`]: Carries optional block properties

mod block;
mod entity;
mod sign;

use std::any::Any;

pub use block::{BlockState, BlockType};
pub use entity::Entity;
pub use sign::SignTile;

/// A host object that facets can be read from and offered to.
pub trait DataHolder: Any + Send + Sync {
    /// Access the concrete host for capability checks.
    fn as_any(&self) -> &dyn Any;

    /// Mutable access to the concrete host.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Short name of the host family, for diagnostics.
    fn kind(&self) -> &'static str;
}

/// Last path segment of a type name.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityId;

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Entity>(), "Entity");
        assert_eq!(short_type_name::<u8>(), "u8");
    }

    #[test]
    fn test_holders_downcast() {
        let holders: Vec<Box<dyn DataHolder>> = vec![
            Box::new(Entity::new(EntityId::new(1))),
            Box::new(SignTile::blank(4)),
            Box::new(BlockState::new(BlockType::Stone)),
        ];

        let kinds: Vec<_> = holders.iter().map(|h| h.kind()).collect();
        assert_eq!(kinds, vec!["Entity", "SignTile", "BlockState"]);
        assert!(holders[0].as_any().is::<Entity>());
        assert!(!holders[1].as_any().is::<Entity>());
    }
}
