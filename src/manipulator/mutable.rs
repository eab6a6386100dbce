//! Mutable facets.

use std::any::Any;

use tracing::warn;

use super::facet::Facet;
use super::immutable::ImmutableDataManipulator;
use crate::container::DataContainer;
use crate::core::{DataError, Result};
use crate::host::{short_type_name, DataHolder};
use crate::key::{BaseValue, Key, KeyValue};
use crate::processor::DataPriority;
use crate::registry::ProcessorRegistry;

/// A facet whose values change in place.
///
/// Concrete facets only declare their storage, their immutable
/// counterpart and their container form. Every mutation is delegated to
/// the processors registered in the [`ProcessorRegistry`].
pub trait DataManipulator: Facet {
    /// The immutable counterpart.
    type Immutable: ImmutableDataManipulator<Mutable = Self>;

    /// Snapshot into the immutable counterpart.
    fn as_immutable(&self) -> Self::Immutable;

    /// An independent deep copy.
    #[must_use]
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Write `value` under `key`.
    ///
    /// Fails with `UnsupportedAttribute` if no processor is registered for
    /// `key` or the processor does not handle this facet.
    fn set<V: KeyValue>(
        &mut self,
        registry: &ProcessorRegistry,
        key: &'static Key<V>,
        value: V,
    ) -> Result<&mut Self> {
        let processor = registry
            .value_processor(key)
            .ok_or_else(|| unsupported::<Self, V>(key))?;
        if !processor.supports(&*self) {
            return Err(unsupported::<Self, V>(key));
        }
        processor.set(&mut *self, value)?;
        Ok(self)
    }

    /// Write one type-erased value.
    fn set_value(&mut self, registry: &ProcessorRegistry, value: &dyn BaseValue) -> Result<&mut Self> {
        if !value.supported_by(registry, &*self) {
            return Err(DataError::unsupported(
                value.key_id().as_str(),
                short_type_name::<Self>(),
            ));
        }
        value.offer_to(registry, &mut *self)?;
        Ok(self)
    }

    /// Write each value independently.
    ///
    /// A value this facet does not support is logged and skipped; the rest
    /// are still applied.
    fn set_values(&mut self, registry: &ProcessorRegistry, values: &[&dyn BaseValue]) -> &mut Self {
        for value in values {
            if let Err(error) = self.set_value(registry, *value) {
                warn!(
                    domain = "manipulator",
                    facet = short_type_name::<Self>(),
                    key = %value.key_id(),
                    %error,
                    "skipped unsupported value in batch set"
                );
            }
        }
        self
    }

    /// Read `key`, apply `f`, and write the result back through the same
    /// processor.
    fn transform<V: KeyValue>(
        &mut self,
        registry: &ProcessorRegistry,
        key: &'static Key<V>,
        f: impl Fn(V) -> V,
    ) -> Result<&mut Self> {
        let processor = registry
            .value_processor(key)
            .ok_or_else(|| unsupported::<Self, V>(key))?;
        if !processor.supports(&*self) {
            return Err(unsupported::<Self, V>(key));
        }
        processor.transform(&mut *self, &f)?;
        Ok(self)
    }

    /// A copy of this facet with the host's state merged in, host values
    /// winning.
    ///
    /// `None` if no processor is registered for this facet or the host is
    /// outside its family.
    fn fill(&self, registry: &ProcessorRegistry, holder: &dyn DataHolder) -> Option<Self> {
        registry
            .manipulator_processor::<Self>()?
            .fill_data(holder, self, DataPriority::DataHolder)
    }

    /// A copy of this facet merged with the host's state by `overlap`.
    ///
    /// `overlap(mine, theirs)` decides the merge; it is skipped when the
    /// host carries no value.
    fn fill_with(
        &self,
        registry: &ProcessorRegistry,
        holder: &dyn DataHolder,
        overlap: impl FnOnce(Self, Self) -> Self,
    ) -> Option<Self> {
        let processor = registry.manipulator_processor::<Self>()?;
        if !processor.supports_holder(holder) {
            return None;
        }
        Some(match processor.get_from(holder) {
            Some(theirs) => overlap(self.copy(), theirs),
            None => self.copy(),
        })
    }

    /// Parse from a container through this facet's processor.
    fn from_container(registry: &ProcessorRegistry, container: &DataContainer) -> Option<Self> {
        registry.manipulator_processor::<Self>()?.build(container)
    }
}

fn unsupported<T: Any, V>(key: &'static Key<V>) -> DataError {
    DataError::unsupported(key.id().as_str(), short_type_name::<T>())
}
