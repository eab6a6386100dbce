//! Processor registry.
//!
//! Registration and lookup are two phases with two types:
//!
//! - [`ProcessorRegistryBuilder`]: Mutable, single owner, registers processors
//! - [`ProcessorRegistry`]: Sealed, read-only, shared across threads
//!
//! [`register_defaults`] installs the built-in processors.

mod bootstrap;
mod builder;
#[allow(clippy::module_inception)]
mod registry;

pub use bootstrap::register_defaults;
pub use builder::ProcessorRegistryBuilder;
pub use registry::ProcessorRegistry;
