//! Dense grid buffers for world generation.
//!
//! Flat arrays addressed by position with explicit bounds checks. Each
//! buffer comes in a mutable form written in place and an immutable
//! snapshot backed by shared storage, mirroring the facet duality.
//!
//! | Buffer | Element | Addressed by |
//! |--------|---------|--------------|
//! | [`MutableBlockBuffer`] / [`ImmutableBlockBuffer`] | `u16` block id | `Vector3i` |
//! | [`MutableBiomeBuffer`] / [`ImmutableBiomeBuffer`] | `u8` biome id | `Vector2i` (x, z) |
//!
//! An [`ImmutableBiomeBuffer`] also hands out [`BiomeView`] windows onto
//! part of its area without copying.

mod biome;
mod block;
mod layout;

pub use biome::{BiomeView, ImmutableBiomeBuffer, MutableBiomeBuffer};
pub use block::{ImmutableBlockBuffer, MutableBlockBuffer};
pub use layout::{AreaLayout, BlockLayout};
