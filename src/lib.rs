//! # hostdata
//!
//! Typed facets of data attached to heterogeneous host objects.
//!
//! ## Design Principles
//!
//! 1. **Hosts Stay Ignorant**: A host type never lists the facets it
//!    carries. Processors decide, by downcasting, which hosts they handle.
//!
//! 2. **Facets Stay Ignorant**: A facet never knows how a host stores its
//!    values. Facets delegate every read and write to a processor.
//!
//! 3. **Explicit Outcomes**: Offering data to a host answers with a
//!    transaction result recording what was replaced, rejected and applied.
//!
//! ## Architecture
//!
//! - **Two Registries, One Table**: Value processors are keyed by [`Key`],
//!   manipulator processors by facet type. Together they resolve the
//!   (facet x host) dispatch without a subclass per pair.
//!
//! - **Sealed Registry**: Processors are registered on a
//!   [`ProcessorRegistryBuilder`], then sealed into a read-only
//!   [`ProcessorRegistry`] shared behind an `Arc`.
//!
//! - **Mutable / Immutable Duality**: Every facet has two types. Immutable
//!   facets answer "mutators" with new instances and are safe to share.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, vectors, catalog types
//! - `container`: Path-addressed serialization tree
//! - `key`: Keys and values
//! - `host`: Host capability and reference hosts
//! - `manipulator`: Facet traits and built-in facets
//! - `processor`: Processor contracts and built-in processors
//! - `registry`: Registration phase and sealed lookup
//! - `transaction`: Mutation outcomes
//! - `buffer`: Dense block and biome grids

pub mod buffer;
pub mod container;
pub mod core;
pub mod host;
pub mod key;
pub mod manipulator;
pub mod processor;
pub mod registry;
pub mod transaction;

// Re-export commonly used types
pub use crate::core::{
    DataConfig, DataError, Direction, DoublePlantType, EntityId, PortionType, Result, Vector2i,
    Vector3d, Vector3i,
};

pub use crate::container::{DataContainer, DataValue, Query, QueryPart};

pub use crate::key::{
    BaseValue, ErasedValue, ImmutableValue, Key, KeyId, KeyValue, Value, ValueKind,
};

pub use crate::host::{BlockState, BlockType, DataHolder, Entity, SignTile};

pub use crate::manipulator::{
    DataManipulator, DirectionalData, DoublePlantData, Facet, FacetId, ImmutableDataManipulator,
    ImmutableDirectionalData, ImmutableDoublePlantData, ImmutablePortionData, ImmutableSignData,
    ImmutableVelocityData, PortionData, SignData, VelocityData,
};

pub use crate::processor::{DataPriority, ManipulatorProcessor, ValueProcessor};

pub use crate::registry::{register_defaults, ProcessorRegistry, ProcessorRegistryBuilder};

pub use crate::transaction::{DataTransactionBuilder, DataTransactionResult, TransactionType};

pub use crate::buffer::{
    BiomeView, ImmutableBiomeBuffer, ImmutableBlockBuffer, MutableBiomeBuffer, MutableBlockBuffer,
};

/// Traits needed to call facet methods.
pub mod prelude {
    pub use crate::host::DataHolder;
    pub use crate::manipulator::{DataManipulator, Facet, ImmutableDataManipulator};
    pub use crate::processor::{ManipulatorProcessor, ValueProcessor};
}
