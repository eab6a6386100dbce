//! Values bound to keys.
//!
//! [`Value`] is the mutable form, [`ImmutableValue`] the frozen one. Both
//! erase to [`BaseValue`] so heterogeneous values can travel together in a
//! batch set or a transaction record.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use super::key::{Key, KeyId, KeyValue};
use crate::core::{DataError, Result};
use crate::registry::ProcessorRegistry;

/// A shared, type-erased immutable value.
pub type ErasedValue = Arc<dyn BaseValue>;

/// A key paired with a value, independent of the value type.
pub trait BaseValue: Debug + Send + Sync + 'static {
    /// Identity of the key this value is bound to.
    fn key_id(&self) -> KeyId;

    /// Access the concrete value type for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Check if `target` accepts this value through the registered processor.
    fn supported_by(&self, registry: &ProcessorRegistry, target: &dyn Any) -> bool;

    /// Write this value into `target` through the registered processor.
    fn offer_to(&self, registry: &ProcessorRegistry, target: &mut dyn Any) -> Result<()>;

    /// Copy-on-write application: a new target with this value applied.
    ///
    /// `Ok(None)` means the processor declined the target.
    fn offer_with(
        &self,
        registry: &ProcessorRegistry,
        target: &dyn Any,
    ) -> Result<Option<Box<dyn Any>>>;

    /// Freeze into a shareable immutable value.
    fn snapshot(&self) -> ErasedValue;
}

/// A mutable value of one key.
///
/// Carries its own fallback so [`Value::get`] always has something to
/// answer with.
#[derive(Clone, Debug, PartialEq)]
pub struct Value<V: KeyValue> {
    key: &'static Key<V>,
    value: V,
    default: V,
}

impl<V: KeyValue> Value<V> {
    /// Create a value using the key's default as fallback.
    #[must_use]
    pub fn new(key: &'static Key<V>, value: V) -> Self {
        Self {
            key,
            value,
            default: key.default_value(),
        }
    }

    /// Create a value with an explicit fallback.
    #[must_use]
    pub fn with_default(key: &'static Key<V>, value: V, default: V) -> Self {
        Self {
            key,
            value,
            default,
        }
    }

    /// The bound key.
    #[must_use]
    pub fn key(&self) -> &'static Key<V> {
        self.key
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> &V {
        &self.value
    }

    /// The fallback value.
    #[must_use]
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Replace the current value.
    pub fn set(&mut self, value: V) -> &mut Self {
        self.value = value;
        self
    }

    /// Reset to the fallback.
    pub fn reset(&mut self) -> &mut Self {
        self.value = self.default.clone();
        self
    }

    /// Apply `f` to the current value.
    pub fn transform(&mut self, f: impl FnOnce(V) -> V) -> &mut Self {
        let current = std::mem::replace(&mut self.value, self.default.clone());
        self.value = f(current);
        self
    }

    /// Freeze a copy.
    #[must_use]
    pub fn as_immutable(&self) -> ImmutableValue<V> {
        ImmutableValue {
            key: self.key,
            value: self.value.clone(),
            default: self.default.clone(),
        }
    }

    /// Take the current value.
    #[must_use]
    pub fn into_inner(self) -> V {
        self.value
    }
}

/// A frozen value of one key. "Mutators" return new instances.
#[derive(Clone, Debug, PartialEq)]
pub struct ImmutableValue<V: KeyValue> {
    key: &'static Key<V>,
    value: V,
    default: V,
}

impl<V: KeyValue> ImmutableValue<V> {
    /// Create a value using the key's default as fallback.
    #[must_use]
    pub fn new(key: &'static Key<V>, value: V) -> Self {
        Self {
            key,
            value,
            default: key.default_value(),
        }
    }

    /// The bound key.
    #[must_use]
    pub fn key(&self) -> &'static Key<V> {
        self.key
    }

    /// The value.
    #[must_use]
    pub fn get(&self) -> &V {
        &self.value
    }

    /// The fallback value.
    #[must_use]
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// A new value with `value` in place of the current one.
    #[must_use]
    pub fn with(&self, value: V) -> Self {
        Self {
            key: self.key,
            value,
            default: self.default.clone(),
        }
    }

    /// A new value with `f` applied.
    #[must_use]
    pub fn transform(&self, f: impl FnOnce(V) -> V) -> Self {
        self.with(f(self.value.clone()))
    }

    /// Thaw into a mutable copy.
    #[must_use]
    pub fn as_mutable(&self) -> Value<V> {
        Value::with_default(self.key, self.value.clone(), self.default.clone())
    }

    /// Take the value.
    #[must_use]
    pub fn into_inner(self) -> V {
        self.value
    }
}

fn unsupported<V>(key: &'static Key<V>) -> DataError {
    DataError::unsupported(key.id().as_str(), "unregistered key")
}

fn supported_by<V: KeyValue>(
    key: &'static Key<V>,
    registry: &ProcessorRegistry,
    target: &dyn Any,
) -> bool {
    registry
        .value_processor(key)
        .is_some_and(|processor| processor.supports(target))
}

fn offer_to<V: KeyValue>(
    key: &'static Key<V>,
    value: &V,
    registry: &ProcessorRegistry,
    target: &mut dyn Any,
) -> Result<()> {
    let processor = registry.value_processor(key).ok_or_else(|| unsupported(key))?;
    processor.set(target, value.clone())
}

fn offer_with<V: KeyValue>(
    key: &'static Key<V>,
    value: &V,
    registry: &ProcessorRegistry,
    target: &dyn Any,
) -> Result<Option<Box<dyn Any>>> {
    let processor = registry.value_processor(key).ok_or_else(|| unsupported(key))?;
    Ok(processor.with(target, value.clone()))
}

impl<V: KeyValue> BaseValue for Value<V> {
    fn key_id(&self) -> KeyId {
        self.key.id()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn supported_by(&self, registry: &ProcessorRegistry, target: &dyn Any) -> bool {
        supported_by(self.key, registry, target)
    }

    fn offer_to(&self, registry: &ProcessorRegistry, target: &mut dyn Any) -> Result<()> {
        offer_to(self.key, &self.value, registry, target)
    }

    fn offer_with(
        &self,
        registry: &ProcessorRegistry,
        target: &dyn Any,
    ) -> Result<Option<Box<dyn Any>>> {
        offer_with(self.key, &self.value, registry, target)
    }

    fn snapshot(&self) -> ErasedValue {
        Arc::new(self.as_immutable())
    }
}

impl<V: KeyValue> BaseValue for ImmutableValue<V> {
    fn key_id(&self) -> KeyId {
        self.key.id()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn supported_by(&self, registry: &ProcessorRegistry, target: &dyn Any) -> bool {
        supported_by(self.key, registry, target)
    }

    fn offer_to(&self, registry: &ProcessorRegistry, target: &mut dyn Any) -> Result<()> {
        offer_to(self.key, &self.value, registry, target)
    }

    fn offer_with(
        &self,
        registry: &ProcessorRegistry,
        target: &dyn Any,
    ) -> Result<Option<Box<dyn Any>>> {
        offer_with(self.key, &self.value, registry, target)
    }

    fn snapshot(&self) -> ErasedValue {
        Arc::new(self.clone())
    }
}

/// Recover the typed immutable value bound to `key`, if `value` is one.
#[must_use]
pub fn downcast_value<'a, V: KeyValue>(
    value: &'a dyn BaseValue,
    key: &'static Key<V>,
) -> Option<&'a ImmutableValue<V>> {
    value
        .as_any()
        .downcast_ref::<ImmutableValue<V>>()
        .filter(|typed| typed.key() == key)
}
