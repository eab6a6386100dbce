//! Serialization tree for facets.
//!
//! ## Key Types
//!
//! - [`Query`]: Dotted/indexed path (`Velocity.X`, `Lines[2]`)
//! - [`DataValue`]: A node (primitive, list, or nested container)
//! - [`DataContainer`]: The tree itself, addressed by queries
//!
//! Containers are the only channel through which facets cross into and out
//! of serialized form. Byte encoding is left to the persistence layer.

#[allow(clippy::module_inception)]
mod container;
mod query;
mod value;

pub use container::DataContainer;
pub use query::{Query, QueryPart};
pub use value::DataValue;
