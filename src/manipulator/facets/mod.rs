//! Built-in facets, each with a mutable and an immutable form.

mod directional;
mod double_plant;
mod portion;
mod sign;
mod velocity;

pub use directional::{DirectionalData, ImmutableDirectionalData};
pub use double_plant::{DoublePlantData, ImmutableDoublePlantData};
pub use portion::{ImmutablePortionData, PortionData};
pub use sign::{ImmutableSignData, SignData};
pub use velocity::{ImmutableVelocityData, VelocityData};

pub(crate) use velocity::AXES as VELOCITY_AXES;
