//! Core types: errors, configuration, ids, vectors, catalog types.
//!
//! These are leaf types with no knowledge of keys, facets, or processors.

pub mod catalog;
pub mod config;
pub mod entity;
pub mod error;
pub mod math;

pub use catalog::{Direction, DoublePlantType, PortionType};
pub use config::DataConfig;
pub use entity::EntityId;
pub use error::{DataError, Result};
pub use math::{Vector2i, Vector3d, Vector3i};
