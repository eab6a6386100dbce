//! Per-key value processors.

use std::any::Any;

use crate::core::{DataError, Result};
use crate::key::{Key, KeyValue, Value};

/// Reads and writes one key's value on facets and hosts.
///
/// Targets are type-erased: a processor downcasts to each concrete facet or
/// host type it knows and treats anything else as unsupported. The same
/// processor therefore serves mutable facets, immutable facets and raw
/// hosts.
pub trait ValueProcessor<V: KeyValue>: Send + Sync {
    /// The key this processor handles.
    fn key(&self) -> &'static Key<V>;

    /// Check if `target` carries this key.
    fn supports(&self, target: &dyn Any) -> bool;

    /// Read the value from `target`. `None` if unsupported or not present.
    fn value_from(&self, target: &dyn Any) -> Option<V>;

    /// Read the value from `target`, bound to the key.
    fn api_value_from(&self, target: &dyn Any) -> Option<Value<V>> {
        self.value_from(target).map(|value| Value::new(self.key(), value))
    }

    /// Write `value` into `target` in place.
    ///
    /// Fails with `UnsupportedAttribute` if `target` is not handled, or
    /// `ValueRejected` if a host refuses the value.
    fn set(&self, target: &mut dyn Any, value: V) -> Result<()>;

    /// Build a copy of `target` with `value` applied. `target` is untouched.
    ///
    /// `None` if `target` is not handled or a host would refuse the value.
    fn with(&self, target: &dyn Any, value: V) -> Option<Box<dyn Any>>;

    /// Read, apply `f`, and write back.
    ///
    /// A target that reports no value starts from the key's default.
    fn transform(&self, target: &mut dyn Any, f: &dyn Fn(V) -> V) -> Result<()> {
        if !self.supports(target) {
            return Err(self.unsupported_target());
        }
        let current = self
            .value_from(target)
            .unwrap_or_else(|| self.key().default_value());
        self.set(target, f(current))
    }

    /// The error for a target this processor does not handle.
    fn unsupported_target(&self) -> DataError {
        DataError::unsupported(self.key().id().as_str(), "an unhandled target")
    }
}
