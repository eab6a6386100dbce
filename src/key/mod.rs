//! Keys and values.
//!
//! ## Key Types
//!
//! - [`Key`]: Static, typed identity of one attribute slot
//! - [`Value`] / [`ImmutableValue`]: A key bound to a value
//! - [`BaseValue`]: Type-erased value for batches and transaction records
//!
//! Built-in keys live in [`keys`].

#[allow(clippy::module_inception)]
mod key;
pub mod keys;
mod value;

pub use key::{Key, KeyId, KeyValue, ValueKind};
pub use value::{downcast_value, BaseValue, ErasedValue, ImmutableValue, Value};
