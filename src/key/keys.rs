//! Built-in keys.

use super::key::Key;
use crate::core::config::DEFAULT_SIGN_LINE_COUNT;
use crate::core::{Direction, DoublePlantType, PortionType, Vector3d};

/// Motion vector of an entity.
pub static VELOCITY: Key<Vector3d> = Key::single("velocity", "Velocity", Vector3d::zero);

/// Text lines of a sign.
pub static SIGN_LINES: Key<Vec<String>> = Key::list("sign_lines", "SignLines", blank_sign_lines);

fn blank_sign_lines() -> Vec<String> {
    vec![String::new(); DEFAULT_SIGN_LINE_COUNT]
}

/// Which half of a block space a slab-like block occupies.
pub static PORTION_TYPE: Key<PortionType> =
    Key::single("portion_type", "Portion", PortionType::bottom);

/// Facing of a directional block.
pub static DIRECTION: Key<Direction> = Key::single("direction", "Direction", Direction::none);

/// Variant of a two-block-tall plant.
pub static DOUBLE_PLANT_TYPE: Key<DoublePlantType> =
    Key::single("double_plant_type", "DoubleSizePlantType", DoublePlantType::grass);
