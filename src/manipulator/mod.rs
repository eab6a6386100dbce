//! Facets: typed handles over bundles of attributes.
//!
//! ## Traits
//!
//! - [`Facet`]: Read path and serialization shared by both forms
//! - [`DataManipulator`]: Mutable form; mutators change the facet in place
//! - [`ImmutableDataManipulator`]: Immutable form; mutators return new facets
//!
//! Facets implement no attribute logic. Reads and writes go through the
//! processors registered in a [`ProcessorRegistry`](crate::registry::ProcessorRegistry),
//! which is passed to every call.
//!
//! ## Example
//!
//! ```
//! use hostdata::core::{DataConfig, Vector3d};
//! use hostdata::key::keys::VELOCITY;
//! use hostdata::manipulator::{DataManipulator, Facet, VelocityData};
//! use hostdata::registry::ProcessorRegistry;
//!
//! let registry = ProcessorRegistry::with_defaults(&DataConfig::default()).unwrap();
//!
//! let mut velocity = registry.create::<VelocityData>().unwrap();
//! assert_eq!(velocity.get(&registry, &VELOCITY), Some(Vector3d::ZERO));
//!
//! velocity.set(&registry, &VELOCITY, Vector3d::new(0.0, 1.0, 0.0)).unwrap();
//! assert_eq!(velocity.velocity().y, 1.0);
//! ```

mod facet;
pub mod facets;
mod immutable;
mod mutable;

pub use facet::{Facet, FacetId};
pub use facets::{
    DirectionalData, DoublePlantData, ImmutableDirectionalData, ImmutableDoublePlantData,
    ImmutablePortionData, ImmutableSignData, ImmutableVelocityData, PortionData, SignData,
    VelocityData,
};
pub use immutable::ImmutableDataManipulator;
pub use mutable::DataManipulator;
