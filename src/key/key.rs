//! Typed attribute keys.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::container::Query;

/// Bound shared by every value a key can address.
pub trait KeyValue: Clone + Debug + PartialEq + Send + Sync + 'static {}

impl<T: Clone + Debug + PartialEq + Send + Sync + 'static> KeyValue for T {}

/// Shape of the value a key addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// One value.
    Single,
    /// Ordered list of values.
    List,
    /// Values mapped by key.
    Mapped,
}

/// Untyped key identity, used as the registry index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(&'static str);

impl KeyId {
    /// Get the raw id string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Typed identifier for one attribute slot.
///
/// Keys are process-wide singletons declared as `static` items and handed
/// around as `&'static Key<V>`. Two keys are equal only if they are the
/// same item.
///
/// ```
/// use hostdata::key::{Key, ValueKind};
///
/// static SPEED: Key<f64> = Key::single("speed", "Speed", f64::default);
///
/// assert_eq!(SPEED.id().as_str(), "speed");
/// assert_eq!(SPEED.kind(), ValueKind::Single);
/// assert_eq!(SPEED.query().to_string(), "Speed");
/// assert_eq!(SPEED.default_value(), 0.0);
/// assert_eq!(SPEED.element_type(), "f64");
/// ```
pub struct Key<V> {
    id: &'static str,
    path: &'static str,
    kind: ValueKind,
    default: fn() -> V,
}

impl<V> Key<V> {
    /// Create a key.
    ///
    /// `path` is the container path the value is serialized under;
    /// `default` produces the value a freshly created facet carries.
    #[must_use]
    pub const fn new(id: &'static str, path: &'static str, kind: ValueKind, default: fn() -> V) -> Self {
        Self {
            id,
            path,
            kind,
            default,
        }
    }

    /// Create a single-value key.
    #[must_use]
    pub const fn single(id: &'static str, path: &'static str, default: fn() -> V) -> Self {
        Self::new(id, path, ValueKind::Single, default)
    }

    /// Create a list-valued key.
    #[must_use]
    pub const fn list(id: &'static str, path: &'static str, default: fn() -> V) -> Self {
        Self::new(id, path, ValueKind::List, default)
    }

    /// The registry identity of this key.
    #[must_use]
    pub const fn id(&self) -> KeyId {
        KeyId(self.id)
    }

    /// The value shape.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The raw serialization path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// The serialization path as a query.
    #[must_use]
    pub fn query(&self) -> Query {
        Query::of(self.path)
    }

    /// A fresh default value.
    #[must_use]
    pub fn default_value(&self) -> V {
        (self.default)()
    }

    /// Name of the element type.
    #[must_use]
    pub fn element_type(&self) -> &'static str {
        std::any::type_name::<V>()
    }
}

impl<V> PartialEq for Key<V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl<V> Eq for Key<V> {}

impl<V> Hash for Key<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V> Debug for Key<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("element_type", &self.element_type())
            .finish()
    }
}

impl<V> std::fmt::Display for Key<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key({})", self.id)
    }
}
