//! Container persistence tests.
//!
//! A persistence collaborator encodes containers with the serde format of
//! its choice. These tests store facets inside a save-file shaped container,
//! encode it with JSON and bincode, and parse the facets back.

use hostdata::container::{DataContainer, DataValue, Query};
use hostdata::core::{DataConfig, Direction, PortionType, Vector3d};
use hostdata::manipulator::{
    DirectionalData, ImmutableSignData, PortionData, SignData, VelocityData,
};
use hostdata::prelude::*;
use hostdata::registry::ProcessorRegistry;
use proptest::prelude::*;

fn registry() -> ProcessorRegistry {
    ProcessorRegistry::with_defaults(&DataConfig::default()).unwrap()
}

fn save_file() -> DataContainer {
    let velocity = VelocityData::new(Vector3d::new(0.5, -0.08, 1.25));
    let sign = SignData::new(["[Shop]", "Apples", "3 coins", ""]);
    let stairs_portion = PortionData::new(PortionType::Top);
    let stairs_facing = DirectionalData::new(Direction::West);

    let mut stairs = stairs_portion.to_container();
    stairs.set("Direction", stairs_facing.to_container().get_string("Direction").unwrap());

    DataContainer::new()
        .with("Entities[0]", velocity.to_container())
        .with("Tiles.Sign", sign.to_container())
        .with("Blocks.Stairs", stairs)
        .with("Version", 3)
}

fn assert_facets_restored(registry: &ProcessorRegistry, save: &DataContainer) {
    let entity = save.get_container("Entities[0]").unwrap();
    assert_eq!(
        VelocityData::from_container(registry, entity),
        Some(VelocityData::new(Vector3d::new(0.5, -0.08, 1.25)))
    );

    let sign = save.get_container("Tiles.Sign").unwrap();
    let restored = ImmutableSignData::from_container(registry, sign).unwrap();
    assert_eq!(restored.line(0), Some("[Shop]"));
    assert_eq!(restored.line(3), Some(""));

    let stairs = save.get_container("Blocks.Stairs").unwrap();
    assert_eq!(
        PortionData::from_container(registry, stairs),
        Some(PortionData::new(PortionType::Top))
    );
    assert_eq!(
        DirectionalData::from_container(registry, stairs),
        Some(DirectionalData::new(Direction::West))
    );
    assert_eq!(save.get_int("Version"), Some(3));
}

// =============================================================================
// Encodings
// =============================================================================

/// Test that facets survive a JSON save and load.
#[test]
fn test_json_persistence() {
    let registry = registry();
    let save = save_file();

    let json = serde_json::to_string_pretty(&save).unwrap();
    let loaded: DataContainer = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded, save);
    assert_facets_restored(&registry, &loaded);
}

/// Test that facets survive a bincode save and load.
#[test]
fn test_bincode_persistence() {
    let registry = registry();
    let save = save_file();

    let bytes = bincode::serialize(&save).unwrap();
    let loaded: DataContainer = bincode::deserialize(&bytes).unwrap();

    assert_eq!(loaded, save);
    assert_facets_restored(&registry, &loaded);
}

/// Test that the JSON form nests entries by name.
#[test]
fn test_json_shape() {
    let container = VelocityData::new(Vector3d::new(1.0, 2.0, 3.0)).to_container();
    let json: serde_json::Value = serde_json::to_value(&container).unwrap();

    assert_eq!(json["Velocity"]["Container"]["X"]["Double"], 1.0);
    assert_eq!(json["Velocity"]["Container"]["Z"]["Double"], 3.0);
}

/// Test that corrupt data fails to parse instead of producing a facet.
#[test]
fn test_tampered_save() {
    let registry = registry();
    let mut save = save_file();
    save.set("Blocks.Stairs.Portion", "sideways");
    save.set("Tiles.Sign.SignLines[1]", 42);

    let stairs = save.get_container("Blocks.Stairs").unwrap();
    assert!(PortionData::from_container(&registry, stairs).is_none());

    let sign = save.get_container("Tiles.Sign").unwrap();
    assert!(SignData::from_container(&registry, sign).is_none());
}

// =============================================================================
// Addressing
// =============================================================================

/// Test writing through lists and nested containers.
#[test]
fn test_nested_addressing() {
    let mut container = DataContainer::new();
    container
        .try_set("Chunk.Sections[0].Y", 0)
        .unwrap()
        .try_set("Chunk.Sections[1].Y", 16)
        .unwrap();

    assert_eq!(container.get_int("Chunk.Sections[1].Y"), Some(16));
    assert_eq!(container.get_list("Chunk.Sections").map(<[DataValue]>::len), Some(2));

    // Skipping an index is not an append.
    assert!(container.try_set("Chunk.Sections[5].Y", 80).is_err());
    // A scalar cannot be traversed.
    assert!(container.try_set("Chunk.Sections[0].Y.Low", 1).is_err());

    let removed = container.remove("Chunk.Sections[0]").unwrap();
    assert_eq!(removed.as_container().and_then(|section| section.get_int("Y")), Some(0));
    assert_eq!(container.get_int("Chunk.Sections[0].Y"), Some(16));
}

/// Test that malformed queries are rejected by the strict parser.
#[test]
fn test_malformed_queries() {
    assert!(Query::parse("Lines[").is_err());
    assert!(Query::parse("Lines[x]").is_err());
    assert!(Query::parse(".Lines").is_err());
    assert!(Query::parse("").unwrap().is_empty());
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Test that any sign text survives JSON encoding.
    #[test]
    fn test_sign_lines_json(lines in prop::collection::vec(".{0,24}", 4)) {
        let registry = registry();
        let sign = SignData::new(lines.clone());

        let json = serde_json::to_string(&sign.to_container()).unwrap();
        let loaded: DataContainer = serde_json::from_str(&json).unwrap();
        let restored = SignData::from_container(&registry, &loaded).unwrap();

        prop_assert_eq!(restored.lines(), lines.as_slice());
    }

    /// Test that finite velocities survive bincode encoding exactly.
    #[test]
    fn test_velocity_bincode(x in -10.0f64..10.0, y in -10.0f64..10.0, z in -10.0f64..10.0) {
        let registry = registry();
        let velocity = VelocityData::new(Vector3d::new(x, y, z));

        let bytes = bincode::serialize(&velocity.to_container()).unwrap();
        let loaded: DataContainer = bincode::deserialize(&bytes).unwrap();

        prop_assert_eq!(VelocityData::from_container(&registry, &loaded), Some(velocity));
    }
}
