//! Immutable facets.

use std::any::Any;

use super::facet::Facet;
use super::mutable::DataManipulator;
use crate::container::DataContainer;
use crate::core::{DataError, Result};
use crate::host::{short_type_name, DataHolder};
use crate::key::{BaseValue, Key, KeyValue};
use crate::processor::DataPriority;
use crate::registry::ProcessorRegistry;

/// A facet that never changes after construction.
///
/// Every "mutator" answers with a new instance. Immutable facets are safe
/// to share across threads.
pub trait ImmutableDataManipulator: Facet {
    /// The mutable counterpart.
    type Mutable: DataManipulator<Immutable = Self>;

    /// Thaw into a mutable copy.
    fn as_mutable(&self) -> Self::Mutable;

    /// A new facet with `value` under `key`.
    ///
    /// `Err(UnsupportedAttribute)` if no processor is registered for `key`;
    /// `Ok(None)` if the processor declines this facet.
    fn with<V: KeyValue>(
        &self,
        registry: &ProcessorRegistry,
        key: &'static Key<V>,
        value: V,
    ) -> Result<Option<Self>> {
        let processor = registry
            .value_processor(key)
            .ok_or_else(|| DataError::unsupported(key.id().as_str(), short_type_name::<Self>()))?;
        Ok(processor.with(self, value).and_then(downcast_self))
    }

    /// A new facet with one type-erased value applied.
    fn with_value(&self, registry: &ProcessorRegistry, value: &dyn BaseValue) -> Result<Option<Self>> {
        Ok(value.offer_with(registry, self)?.and_then(downcast_self))
    }

    /// A new facet with the host's state merged in, host values winning.
    fn fill(&self, registry: &ProcessorRegistry, holder: &dyn DataHolder) -> Option<Self> {
        registry
            .immutable_processor::<Self>()?
            .fill_data(holder, &self.as_mutable(), DataPriority::DataHolder)
            .map(|filled| filled.as_immutable())
    }

    /// A new facet merged with the host's state by `overlap(mine, theirs)`.
    fn fill_with(
        &self,
        registry: &ProcessorRegistry,
        holder: &dyn DataHolder,
        overlap: impl FnOnce(Self, Self) -> Self,
    ) -> Option<Self> {
        let processor = registry.immutable_processor::<Self>()?;
        if !processor.supports_holder(holder) {
            return None;
        }
        Some(match processor.get_from(holder) {
            Some(theirs) => overlap(self.clone(), theirs.as_immutable()),
            None => self.clone(),
        })
    }

    /// Parse from a container through the facet's processor.
    fn from_container(registry: &ProcessorRegistry, container: &DataContainer) -> Option<Self> {
        registry
            .immutable_processor::<Self>()?
            .build(container)
            .map(|built| built.as_immutable())
    }
}

fn downcast_self<T: Any>(built: Box<dyn Any>) -> Option<T> {
    built.downcast::<T>().ok().map(|boxed| *boxed)
}
