//! Read path shared by mutable and immutable facets.

use std::any::{Any, TypeId};
use std::fmt::Debug;

use crate::container::DataContainer;
use crate::host::short_type_name;
use crate::key::{BaseValue, ErasedValue, Key, KeyId, KeyValue, Value};
use crate::registry::ProcessorRegistry;

/// Identity of a facet type.
///
/// Two facets share an id when they are the same kind of facet, whatever
/// values they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FacetId {
    type_id: TypeId,
    name: &'static str,
}

impl FacetId {
    /// The id of facet type `T`.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: short_type_name::<T>(),
        }
    }

    /// Short type name of the facet.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runtime type id of the facet.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl std::fmt::Display for FacetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// A cohesive bundle of attributes attachable to a host.
///
/// Reads never touch attribute logic directly: each one looks up the key's
/// [`ValueProcessor`](crate::processor::ValueProcessor) and asks it about
/// this facet.
pub trait Facet: Any + Clone + Debug + Send + Sync {
    /// Every value this facet carries, as immutable snapshots.
    fn values(&self) -> Vec<ErasedValue>;

    /// Keys this facet exposes.
    fn keys(&self) -> Vec<KeyId> {
        self.values().iter().map(|value| value.key_id()).collect()
    }

    /// Serialize to a container. Facets without fields emit an empty one.
    fn to_container(&self) -> DataContainer {
        DataContainer::new()
    }

    /// The facet's type identity.
    fn facet_id(&self) -> FacetId {
        FacetId::of::<Self>()
    }

    /// Read `key`. `None` if no processor is registered or the value is not
    /// present on this facet.
    fn get<V: KeyValue>(&self, registry: &ProcessorRegistry, key: &'static Key<V>) -> Option<V> {
        let target: &dyn Any = self;
        registry.value_processor(key)?.value_from(target)
    }

    /// Read `key`, or `default` if absent.
    fn get_or_else<V: KeyValue>(
        &self,
        registry: &ProcessorRegistry,
        key: &'static Key<V>,
        default: V,
    ) -> V {
        self.get(registry, key).unwrap_or(default)
    }

    /// Read `key`, or the key's default if absent.
    fn get_or_default<V: KeyValue>(&self, registry: &ProcessorRegistry, key: &'static Key<V>) -> V {
        self.get(registry, key)
            .unwrap_or_else(|| key.default_value())
    }

    /// Read `key` bound into a [`Value`].
    fn get_value<V: KeyValue>(
        &self,
        registry: &ProcessorRegistry,
        key: &'static Key<V>,
    ) -> Option<Value<V>> {
        let target: &dyn Any = self;
        registry.value_processor(key)?.api_value_from(target)
    }

    /// Check if a processor for `key` is registered and handles this facet.
    fn supports<V: KeyValue>(&self, registry: &ProcessorRegistry, key: &'static Key<V>) -> bool {
        let target: &dyn Any = self;
        registry
            .value_processor(key)
            .is_some_and(|processor| processor.supports(target))
    }

    /// Check if `value` could be applied to this facet.
    fn supports_value(&self, registry: &ProcessorRegistry, value: &dyn BaseValue) -> bool {
        value.supported_by(registry, self)
    }
}
