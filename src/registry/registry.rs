//! The sealed, read-only processor registry.

use std::any::TypeId;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::bootstrap::register_defaults;
use super::builder::{ProcessorRegistryBuilder, Slot};
use crate::container::DataContainer;
use crate::core::{DataConfig, Result};
use crate::host::DataHolder;
use crate::key::{Key, KeyId, KeyValue, Value};
use crate::manipulator::{DataManipulator, ImmutableDataManipulator};
use crate::processor::{DataPriority, ManipulatorProcessor, ValueProcessor};
use crate::transaction::{DataTransactionResult, TransactionType};

/// Lookup table from keys to value processors and from facet types to
/// manipulator processors.
///
/// Produced by [`ProcessorRegistryBuilder::seal`] and never modified
/// afterwards. Lookups are hashed and side-effect free, and the registry is
/// `Send + Sync`: share it behind an `Arc`.
///
/// Besides lookups, the registry exposes the host-facing entry points:
/// creating facets, reading them from hosts, offering them to hosts and
/// removing them. Offers always answer with a [`DataTransactionResult`].
///
/// ## Example
///
/// ```
/// use hostdata::core::{DataConfig, EntityId, Vector3d};
/// use hostdata::host::Entity;
/// use hostdata::key::keys::VELOCITY;
/// use hostdata::manipulator::VelocityData;
/// use hostdata::processor::DataPriority;
/// use hostdata::registry::ProcessorRegistry;
///
/// let registry = ProcessorRegistry::with_defaults(&DataConfig::default()).unwrap();
/// let mut entity = Entity::new(EntityId::new(1));
///
/// // A stationary entity has no velocity facet.
/// assert!(registry.get_from::<VelocityData>(&entity).is_none());
///
/// let push = VelocityData::new(Vector3d::new(0.5, 0.0, 0.0));
/// let result = registry.offer(&mut entity, &push, DataPriority::DataManipulator);
/// assert!(result.is_successful());
/// assert_eq!(registry.value_of(&entity, &VELOCITY), Some(Vector3d::new(0.5, 0.0, 0.0)));
/// ```
pub struct ProcessorRegistry {
    values: FxHashMap<KeyId, Slot>,
    manipulators: FxHashMap<TypeId, Slot>,
    immutables: FxHashMap<TypeId, Slot>,
    facet_names: Vec<&'static str>,
}

impl ProcessorRegistry {
    pub(super) fn from_parts(
        values: FxHashMap<KeyId, Slot>,
        manipulators: FxHashMap<TypeId, Slot>,
        immutables: FxHashMap<TypeId, Slot>,
        facet_names: Vec<&'static str>,
    ) -> Self {
        Self {
            values,
            manipulators,
            immutables,
            facet_names,
        }
    }

    /// Start a registration phase.
    #[must_use]
    pub fn builder() -> ProcessorRegistryBuilder {
        ProcessorRegistryBuilder::new()
    }

    /// A registry with no processors.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_parts(
            FxHashMap::default(),
            FxHashMap::default(),
            FxHashMap::default(),
            Vec::new(),
        )
    }

    /// A sealed registry holding the built-in processors.
    pub fn with_defaults(config: &DataConfig) -> Result<Self> {
        let mut builder = Self::builder();
        register_defaults(&mut builder, config)?;
        Ok(builder.seal())
    }

    // === Lookup ===

    /// The value processor registered for `key`.
    ///
    /// A different key item that happens to share `key`'s id finds nothing.
    #[must_use]
    pub fn value_processor<V: KeyValue>(
        &self,
        key: &'static Key<V>,
    ) -> Option<Arc<dyn ValueProcessor<V>>> {
        self.values
            .get(&key.id())?
            .downcast_ref::<Arc<dyn ValueProcessor<V>>>()
            .filter(|processor| processor.key() == key)
            .cloned()
    }

    /// The manipulator processor registered for facet type `M`.
    #[must_use]
    pub fn manipulator_processor<M: DataManipulator>(&self) -> Option<Arc<dyn ManipulatorProcessor<M>>> {
        self.manipulators
            .get(&TypeId::of::<M>())?
            .downcast_ref::<Arc<dyn ManipulatorProcessor<M>>>()
            .cloned()
    }

    /// The manipulator processor reachable through immutable facet type `I`.
    #[must_use]
    pub fn immutable_processor<I: ImmutableDataManipulator>(
        &self,
    ) -> Option<Arc<dyn ManipulatorProcessor<I::Mutable>>> {
        self.immutables
            .get(&TypeId::of::<I>())?
            .downcast_ref::<Arc<dyn ManipulatorProcessor<I::Mutable>>>()
            .cloned()
    }

    /// Check if a value processor is registered for `key`.
    #[must_use]
    pub fn supports_key<V: KeyValue>(&self, key: &'static Key<V>) -> bool {
        self.value_processor(key).is_some()
    }

    /// Check if a manipulator processor is registered for facet type `M`.
    #[must_use]
    pub fn supports_facet<M: DataManipulator>(&self) -> bool {
        self.manipulators.contains_key(&TypeId::of::<M>())
    }

    /// Number of value processors.
    #[must_use]
    pub fn value_processor_count(&self) -> usize {
        self.values.len()
    }

    /// Number of manipulator processors.
    #[must_use]
    pub fn manipulator_processor_count(&self) -> usize {
        self.manipulators.len()
    }

    /// Keys with a registered value processor, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<KeyId> {
        let mut keys: Vec<_> = self.values.keys().copied().collect();
        keys.sort();
        keys
    }

    /// Short names of facets with a registered processor, in registration
    /// order.
    #[must_use]
    pub fn facet_names(&self) -> &[&'static str] {
        &self.facet_names
    }

    // === Facet construction ===

    /// A facet of type `M` holding defaults.
    #[must_use]
    pub fn create<M: DataManipulator>(&self) -> Option<M> {
        Some(self.manipulator_processor::<M>()?.create())
    }

    /// A facet of type `M` read from `holder`, or defaults if the holder
    /// carries no value. `None` if the holder is unsupported.
    #[must_use]
    pub fn create_from<M: DataManipulator>(&self, holder: &dyn DataHolder) -> Option<M> {
        self.manipulator_processor::<M>()?.create_from(holder)
    }

    /// A facet of type `M` read from `holder`, with no default fallback.
    #[must_use]
    pub fn get_from<M: DataManipulator>(&self, holder: &dyn DataHolder) -> Option<M> {
        self.manipulator_processor::<M>()?.get_from(holder)
    }

    /// A facet of type `M` parsed from `container`.
    #[must_use]
    pub fn build<M: DataManipulator>(&self, container: &DataContainer) -> Option<M> {
        self.manipulator_processor::<M>()?.build(container)
    }

    // === Host mutation ===

    /// Offer `manipulator` to `holder`.
    ///
    /// An `Error` result rejecting the facet if no processor is registered
    /// for `M`.
    pub fn offer<M: DataManipulator>(
        &self,
        holder: &mut dyn DataHolder,
        manipulator: &M,
        priority: DataPriority,
    ) -> DataTransactionResult {
        match self.manipulator_processor::<M>() {
            Some(processor) => processor.set_data(holder, manipulator, priority),
            None => {
                debug!(
                    domain = "registry",
                    facet = %manipulator.facet_id(),
                    "offer without a registered processor"
                );
                DataTransactionResult::error(manipulator)
            }
        }
    }

    /// Remove facet type `M` from `holder`.
    ///
    /// `Success` with the removed values recorded as replaced, `Failure` if
    /// nothing was present, `Error` if no processor is registered.
    pub fn remove<M: DataManipulator>(&self, holder: &mut dyn DataHolder) -> DataTransactionResult {
        let Some(processor) = self.manipulator_processor::<M>() else {
            return DataTransactionResult::builder()
                .result(TransactionType::Error)
                .build();
        };
        let previous = processor.get_from(&*holder);
        if !processor.remove(holder) {
            return DataTransactionResult::fail_no_data();
        }
        let builder = match previous {
            Some(previous) => DataTransactionResult::builder().replace_data(&previous),
            None => DataTransactionResult::builder(),
        };
        builder.result(TransactionType::Success).build()
    }

    /// Read `key` directly from `holder`.
    #[must_use]
    pub fn value_of<V: KeyValue>(&self, holder: &dyn DataHolder, key: &'static Key<V>) -> Option<V> {
        self.value_processor(key)?.value_from(holder.as_any())
    }

    /// Write `key` directly onto `holder`.
    ///
    /// The previous value, if any, is recorded as replaced. `Failure` if the
    /// holder does not carry `key` or refuses the value under the configured
    /// limits, `Error` if no processor is registered.
    pub fn offer_value<V: KeyValue>(
        &self,
        holder: &mut dyn DataHolder,
        key: &'static Key<V>,
        value: V,
    ) -> DataTransactionResult {
        let offered = Value::new(key, value.clone());
        let Some(processor) = self.value_processor(key) else {
            return DataTransactionResult::builder()
                .reject(&offered)
                .result(TransactionType::Error)
                .build();
        };

        let previous = processor.value_from(holder.as_any());
        match processor.set(holder.as_any_mut(), value) {
            Ok(()) => {
                let mut builder = DataTransactionResult::builder();
                if let Some(previous) = previous {
                    builder = builder.replace(&Value::new(key, previous));
                }
                builder
                    .success(&offered)
                    .result(TransactionType::Success)
                    .build()
            }
            Err(error) => {
                debug!(domain = "registry", key = %key.id(), host = holder.kind(), %error, "value offer rejected");
                DataTransactionResult::builder()
                    .reject(&offered)
                    .result(TransactionType::Failure)
                    .build()
            }
        }
    }
}

impl std::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("keys", &self.keys())
            .field("facets", &self.facet_names)
            .finish()
    }
}
