//! Registration phase of the processor registry.

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::registry::ProcessorRegistry;
use crate::core::{DataError, Result};
use crate::host::short_type_name;
use crate::key::{KeyId, KeyValue};
use crate::manipulator::DataManipulator;
use crate::processor::{ManipulatorProcessor, ValueProcessor};

/// Type-erased processor slot. Holds an `Arc<dyn ValueProcessor<V>>` or an
/// `Arc<dyn ManipulatorProcessor<M>>`.
pub(super) type Slot = Box<dyn Any + Send + Sync>;

/// Collects processors before the registry is sealed.
///
/// Registration needs `&mut self`, so it cannot race with lookups: lookups
/// only exist on the [`ProcessorRegistry`] produced by [`seal`](Self::seal).
///
/// ## Example
///
/// ```
/// use hostdata::core::DataConfig;
/// use hostdata::processor::{VelocityDataProcessor, VelocityValueProcessor};
/// use hostdata::registry::ProcessorRegistryBuilder;
///
/// let mut builder = ProcessorRegistryBuilder::new();
/// builder.register_value_processor(VelocityValueProcessor::default()).unwrap();
/// builder
///     .register_manipulator_processor(VelocityDataProcessor::new(&DataConfig::default()))
///     .unwrap();
///
/// // A second processor for the same key is refused.
/// assert!(builder.register_value_processor(VelocityValueProcessor::default()).is_err());
///
/// let registry = builder.seal();
/// assert_eq!(registry.value_processor_count(), 1);
/// ```
#[derive(Default)]
pub struct ProcessorRegistryBuilder {
    values: FxHashMap<KeyId, Slot>,
    manipulators: FxHashMap<TypeId, Slot>,
    immutables: FxHashMap<TypeId, Slot>,
    facet_names: Vec<&'static str>,
}

impl ProcessorRegistryBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the processor for the key it declares.
    ///
    /// Fails with `RegistrationConflict` if the key already has one; the
    /// first registration stays in place.
    pub fn register_value_processor<V, P>(&mut self, processor: P) -> Result<()>
    where
        V: KeyValue,
        P: ValueProcessor<V> + 'static,
    {
        let id = processor.key().id();
        match self.values.entry(id) {
            Entry::Occupied(_) => {
                warn!(domain = "registry", key = %id, "value processor registered twice");
                Err(DataError::conflict("value", id.as_str()))
            }
            Entry::Vacant(slot) => {
                let processor: Arc<dyn ValueProcessor<V>> = Arc::new(processor);
                slot.insert(Box::new(processor));
                debug!(domain = "registry", key = %id, "registered value processor");
                Ok(())
            }
        }
    }

    /// Register the processor for facet type `M`.
    ///
    /// The processor is also reachable through `M`'s immutable counterpart.
    /// Fails with `RegistrationConflict` if either type already has one.
    pub fn register_manipulator_processor<M, P>(&mut self, processor: P) -> Result<()>
    where
        M: DataManipulator,
        P: ManipulatorProcessor<M> + 'static,
    {
        let facet = short_type_name::<M>();
        let mutable_id = TypeId::of::<M>();
        let immutable_id = TypeId::of::<M::Immutable>();
        if self.manipulators.contains_key(&mutable_id) || self.immutables.contains_key(&immutable_id) {
            warn!(domain = "registry", facet, "manipulator processor registered twice");
            return Err(DataError::conflict("manipulator", facet));
        }

        let processor: Arc<dyn ManipulatorProcessor<M>> = Arc::new(processor);
        self.immutables.insert(immutable_id, Box::new(Arc::clone(&processor)));
        self.manipulators.insert(mutable_id, Box::new(processor));
        self.facet_names.push(facet);
        debug!(domain = "registry", facet, "registered manipulator processor");
        Ok(())
    }

    /// Number of registered value processors.
    #[must_use]
    pub fn value_processor_count(&self) -> usize {
        self.values.len()
    }

    /// Number of registered manipulator processors.
    #[must_use]
    pub fn manipulator_processor_count(&self) -> usize {
        self.manipulators.len()
    }

    /// End the registration phase.
    #[must_use]
    pub fn seal(self) -> ProcessorRegistry {
        info!(
            domain = "registry",
            value_processors = self.values.len(),
            manipulator_processors = self.manipulators.len(),
            "processor registry sealed"
        );
        ProcessorRegistry::from_parts(self.values, self.manipulators, self.immutables, self.facet_names)
    }
}

impl std::fmt::Debug for ProcessorRegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("ProcessorRegistryBuilder")
            .field("keys", &keys)
            .field("facets", &self.facet_names)
            .finish()
    }
}
