//! Facet integration tests.
//!
//! These tests drive the built-in facets through a sealed registry and
//! check the facade contract: defaults, copies, container round trips,
//! set/get, copy-on-write `with`, filling from hosts and batch sets.

use std::sync::{Arc, Mutex};

use hostdata::core::{DataConfig, Direction, DoublePlantType, EntityId, PortionType, Vector3d};
use hostdata::host::{BlockState, BlockType, Entity, SignTile};
use hostdata::key::keys::{DIRECTION, DOUBLE_PLANT_TYPE, PORTION_TYPE, SIGN_LINES, VELOCITY};
use hostdata::key::{BaseValue, ImmutableValue, Value};
use hostdata::manipulator::{
    DirectionalData, DoublePlantData, ImmutableDirectionalData, ImmutableDoublePlantData,
    ImmutablePortionData, ImmutableSignData, ImmutableVelocityData, PortionData, SignData,
    VelocityData,
};
use hostdata::prelude::*;
use hostdata::processor::DataPriority;
use hostdata::registry::ProcessorRegistry;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

fn registry() -> ProcessorRegistry {
    ProcessorRegistry::with_defaults(&DataConfig::default()).unwrap()
}

fn blank_lines() -> Vec<String> {
    vec![String::new(); 4]
}

// =============================================================================
// Log Capture
// =============================================================================

/// Collects the message and fields of every event into a shared buffer.
#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<String>>>,
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let line = format!(
            "{} {} {}",
            event.metadata().level(),
            visitor.message,
            visitor.fields.join(" ")
        );
        self.events.lock().unwrap().push(line);
    }
}

// =============================================================================
// Defaults
// =============================================================================

/// Test that freshly created facets carry each key's declared default.
#[test]
fn test_create_yields_key_defaults() {
    let registry = registry();

    let velocity = registry.create::<VelocityData>().unwrap();
    assert!(velocity.supports(&registry, &VELOCITY));
    assert_eq!(velocity.get(&registry, &VELOCITY), Some(VELOCITY.default_value()));

    let sign = registry.create::<SignData>().unwrap();
    assert!(sign.supports(&registry, &SIGN_LINES));
    assert_eq!(sign.get(&registry, &SIGN_LINES), Some(SIGN_LINES.default_value()));

    let portion = registry.create::<PortionData>().unwrap();
    assert!(portion.supports(&registry, &PORTION_TYPE));
    assert_eq!(portion.get(&registry, &PORTION_TYPE), Some(PortionType::Bottom));

    let direction = registry.create::<DirectionalData>().unwrap();
    assert!(direction.supports(&registry, &DIRECTION));
    assert_eq!(direction.get(&registry, &DIRECTION), Some(Direction::None));
}

/// Test that a facet does not claim keys of other facets.
#[test]
fn test_foreign_keys_unsupported() {
    let registry = registry();
    let sign = registry.create::<SignData>().unwrap();

    assert!(!sign.supports(&registry, &VELOCITY));
    assert_eq!(sign.get(&registry, &VELOCITY), None);
    assert_eq!(
        sign.get_or_else(&registry, &VELOCITY, Vector3d::new(1.0, 1.0, 1.0)),
        Vector3d::new(1.0, 1.0, 1.0)
    );
    assert_eq!(sign.get_or_default(&registry, &VELOCITY), Vector3d::ZERO);
}

/// Test that an empty registry answers every read with absence.
#[test]
fn test_reads_without_processors() {
    let registry = ProcessorRegistry::empty();
    let data = VelocityData::new(Vector3d::new(1.0, 0.0, 0.0));

    assert_eq!(data.get(&registry, &VELOCITY), None);
    assert!(!data.supports(&registry, &VELOCITY));
    assert!(data.get_value(&registry, &VELOCITY).is_none());
}

// =============================================================================
// Set / Get
// =============================================================================

/// Test that set followed by get returns the written value.
#[test]
fn test_set_then_get() {
    let registry = registry();
    let mut data = registry.create::<VelocityData>().unwrap();
    let fast = Vector3d::new(0.25, 0.5, -1.0);

    data.set(&registry, &VELOCITY, fast).unwrap();
    assert_eq!(data.get(&registry, &VELOCITY), Some(fast));

    let value = data.get_value(&registry, &VELOCITY).unwrap();
    assert_eq!(*value.get(), fast);
    assert_eq!(*value.default_value(), Vector3d::ZERO);
}

/// Test that setting chains fluently.
#[test]
fn test_set_is_fluent() {
    let registry = registry();
    let mut data = registry.create::<SignData>().unwrap();

    data.set(&registry, &SIGN_LINES, vec!["a".into(), "b".into()])
        .unwrap()
        .transform(&registry, &SIGN_LINES, |mut lines| {
            lines.push("c".to_string());
            lines
        })
        .unwrap();

    assert_eq!(data.lines(), &["a", "b", "c"]);
}

/// Test that setting an unsupported key fails with UnsupportedAttribute.
#[test]
fn test_set_unsupported_key() {
    let registry = registry();
    let mut data = registry.create::<SignData>().unwrap();

    let error = data.set(&registry, &VELOCITY, Vector3d::ZERO).unwrap_err();
    assert!(error.is_unsupported());
    assert_eq!(
        error.to_string(),
        "unsupported attribute `velocity` for SignData; check supports() first"
    );
    assert_eq!(data.lines(), blank_lines().as_slice());
}

/// Test that setting without any registered processor fails.
#[test]
fn test_set_without_processor() {
    let registry = ProcessorRegistry::empty();
    let mut data = VelocityData::default();

    assert!(data.set(&registry, &VELOCITY, Vector3d::ZERO).is_err());
    assert!(data.transform(&registry, &VELOCITY, |v| v).is_err());
}

/// Test that transform reads, applies and writes back.
#[test]
fn test_transform() {
    let registry = registry();
    let mut data = VelocityData::new(Vector3d::new(1.0, 2.0, 3.0));

    data.transform(&registry, &VELOCITY, |v| v.scale(0.5)).unwrap();
    assert_eq!(data.velocity(), Vector3d::new(0.5, 1.0, 1.5));

    let error = data
        .transform(&registry, &PORTION_TYPE, |_| PortionType::Top)
        .unwrap_err();
    assert!(error.is_unsupported());
}

/// Test that a single type-erased value can be applied.
#[test]
fn test_set_value() {
    let registry = registry();
    let mut data = PortionData::default();
    let top = Value::new(&PORTION_TYPE, PortionType::Top);

    assert!(data.supports_value(&registry, &top));
    data.set_value(&registry, &top).unwrap();
    assert_eq!(data.portion(), PortionType::Top);

    let facing = Value::new(&DIRECTION, Direction::Up);
    assert!(!data.supports_value(&registry, &facing));
    assert!(data.set_value(&registry, &facing).is_err());
}

// =============================================================================
// Batch Set
// =============================================================================

/// Test that a batch set applies valid values and logs unsupported ones.
#[test]
fn test_batch_set_is_partial_failure_tolerant() {
    let registry = registry();
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);

    let mut data = registry.create::<VelocityData>().unwrap();
    let valid = Value::new(&VELOCITY, Vector3d::new(0.0, 3.0, 0.0));
    let unsupported = Value::new(&SIGN_LINES, vec!["nope".to_string()]);

    tracing::subscriber::with_default(subscriber, || {
        data.set_values(&registry, &[&valid, &unsupported]);
    });

    assert_eq!(data.velocity(), Vector3d::new(0.0, 3.0, 0.0));

    let events = events.lock().unwrap();
    let warnings: Vec<_> = events
        .iter()
        .filter(|line| line.contains("skipped unsupported value in batch set"))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("WARN"));
    assert!(warnings[0].contains("key=sign_lines"));
    assert!(warnings[0].contains("facet=\"VelocityData\""));
}

/// Test that a batch of only valid values logs nothing.
#[test]
fn test_batch_set_all_valid() {
    let registry = registry();
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);

    let mut data = SignData::default();
    let lines = ImmutableValue::new(&SIGN_LINES, vec!["x".to_string(); 4]);

    tracing::subscriber::with_default(subscriber, || {
        data.set_values(&registry, &[&lines]);
    });

    assert_eq!(data.line(3), Some("x"));
    assert!(events.lock().unwrap().is_empty());
}

// =============================================================================
// Copies and Snapshots
// =============================================================================

/// Test that copies are value-equal and independent.
#[test]
fn test_copy_is_independent() {
    let registry = registry();
    let original = SignData::new(["one", "two", "three", "four"]);
    let mut copy = original.copy();
    assert_eq!(copy, original);

    copy.set(&registry, &SIGN_LINES, blank_lines()).unwrap();
    assert_eq!(original.line(0), Some("one"));
    assert_ne!(copy, original);
}

/// Test that immutable snapshots do not follow later mutation.
#[test]
fn test_as_immutable_snapshot() {
    let registry = registry();
    let mut data = VelocityData::new(Vector3d::new(1.0, 0.0, 0.0));
    let frozen = data.as_immutable();

    data.set(&registry, &VELOCITY, Vector3d::ZERO).unwrap();

    assert_eq!(frozen.velocity(), Vector3d::new(1.0, 0.0, 0.0));
    assert_eq!(frozen.as_mutable().velocity(), Vector3d::new(1.0, 0.0, 0.0));
}

/// Test that `with` returns a new facet and leaves the original alone.
#[test]
fn test_with_never_mutates_original() {
    let registry = registry();
    let original = ImmutableSignData::new(["keep", "", "", ""]);
    let replacement = vec!["new".to_string(); 4];

    let changed = original
        .with(&registry, &SIGN_LINES, replacement.clone())
        .unwrap()
        .unwrap();

    assert_eq!(original.get(&registry, &SIGN_LINES).unwrap()[0], "keep");
    assert_eq!(changed.get(&registry, &SIGN_LINES), Some(replacement));
}

/// Test the three outcomes of `with`.
#[test]
fn test_with_outcomes() {
    let registry = registry();
    let frozen = ImmutablePortionData::new(PortionType::Bottom);

    let top = frozen.with(&registry, &PORTION_TYPE, PortionType::Top).unwrap();
    assert_eq!(top, Some(ImmutablePortionData::new(PortionType::Top)));

    // Registered processor, but this facet is not one of its targets.
    let declined = frozen.with(&registry, &DIRECTION, Direction::Up).unwrap();
    assert!(declined.is_none());

    // No processor at all.
    let empty = ProcessorRegistry::empty();
    assert!(frozen.with(&empty, &PORTION_TYPE, PortionType::Top).is_err());
}

/// Test that `with_value` applies a type-erased value.
#[test]
fn test_with_value() {
    let registry = registry();
    let frozen = ImmutableDirectionalData::default();
    let east: &dyn BaseValue = &ImmutableValue::new(&DIRECTION, Direction::East);

    let turned = frozen.with_value(&registry, east).unwrap().unwrap();
    assert_eq!(turned.direction(), Direction::East);
    assert_eq!(frozen.direction(), Direction::None);
}

// =============================================================================
// Container Round Trip
// =============================================================================

/// Test that every facet survives a trip through its container form.
#[test]
fn test_container_round_trip() {
    let registry = registry();

    let velocity = VelocityData::new(Vector3d::new(-0.5, 0.08, 2.0));
    let parsed = VelocityData::from_container(&registry, &velocity.to_container());
    assert_eq!(parsed, Some(velocity));

    let sign = SignData::new(["Line 1", "", "Line 3", ""]);
    let parsed = SignData::from_container(&registry, &sign.to_container());
    assert_eq!(parsed, Some(sign));

    let portion = PortionData::new(PortionType::Top);
    let parsed = PortionData::from_container(&registry, &portion.to_container());
    assert_eq!(parsed, Some(portion));

    let direction = DirectionalData::new(Direction::West);
    let parsed = DirectionalData::from_container(&registry, &direction.to_container());
    assert_eq!(parsed, Some(direction));
}

/// Test that immutable facets round trip through the same processors.
#[test]
fn test_immutable_container_round_trip() {
    let registry = registry();
    let frozen = ImmutableVelocityData::new(Vector3d::new(3.0, 0.0, -3.0));

    let parsed = ImmutableVelocityData::from_container(&registry, &frozen.to_container());
    assert_eq!(parsed, Some(frozen));
}

/// Test that an incomplete container parses to nothing.
#[test]
fn test_from_incomplete_container() {
    let registry = registry();
    let container = VelocityData::default().to_container().with("Velocity.X", "fast");

    assert!(VelocityData::from_container(&registry, &container).is_none());
    assert!(PortionData::from_container(&registry, &container).is_none());
}

// =============================================================================
// Filling From Hosts
// =============================================================================

/// Test that fill takes the host's values.
#[test]
fn test_fill_takes_host_state() {
    let registry = registry();
    let tile = SignTile::new(["from", "the", "sign", ""]);
    let mine = SignData::new(["mine", "", "", ""]);

    let filled = mine.fill(&registry, &tile).unwrap();
    assert_eq!(filled.line(0), Some("from"));
    assert_eq!(mine.line(0), Some("mine"));
}

/// Test that fill keeps the facet when the host has no value.
#[test]
fn test_fill_from_stationary_entity() {
    let registry = registry();
    let entity = Entity::new(EntityId::new(1));
    let mine = VelocityData::new(Vector3d::new(1.0, 0.0, 0.0));

    assert_eq!(mine.fill(&registry, &entity), Some(mine.clone()));
}

/// Test that fill fails for hosts outside the facet's family.
#[test]
fn test_fill_unsupported_host() {
    let registry = registry();
    let stone = BlockState::new(BlockType::Stone);

    assert!(PortionData::default().fill(&registry, &stone).is_none());
    assert!(ImmutablePortionData::default().fill(&registry, &stone).is_none());
}

/// Test that the overlap function decides the merge.
#[test]
fn test_fill_with_overlap() {
    let registry = registry();
    let entity = Entity::new(EntityId::new(1)).with_motion(Vector3d::new(0.0, 1.0, 0.0));
    let mine = VelocityData::new(Vector3d::new(1.0, 0.0, 0.0));

    let combined = mine
        .fill_with(&registry, &entity, |mine, theirs| {
            VelocityData::new(mine.velocity() + theirs.velocity())
        })
        .unwrap();
    assert_eq!(combined.velocity(), Vector3d::new(1.0, 1.0, 0.0));

    let kept = mine.fill_with(&registry, &entity, |mine, _| mine).unwrap();
    assert_eq!(kept, mine);
}

/// Test filling an immutable facet.
#[test]
fn test_immutable_fill() {
    let registry = registry();
    let stairs = BlockState::new(BlockType::Stairs).with_portion(PortionType::Top);
    let frozen = ImmutablePortionData::default();

    let filled = frozen.fill(&registry, &stairs).unwrap();
    assert_eq!(filled.portion(), PortionType::Top);

    let merged = frozen
        .fill_with(&registry, &stairs, |mine, _| mine)
        .unwrap();
    assert_eq!(merged, frozen);
}

/// Test that fill needs a registered processor.
#[test]
fn test_fill_without_processor() {
    let registry = ProcessorRegistry::empty();
    let tile = SignTile::blank(4);
    assert!(SignData::default().fill(&registry, &tile).is_none());
    assert!(SignData::default()
        .fill_with(&registry, &tile, |mine, _| mine)
        .is_none());
}

// =============================================================================
// Identity
// =============================================================================

/// Test that facet identity ignores values.
#[test]
fn test_facet_identity() {
    let a = ImmutableVelocityData::new(Vector3d::ZERO);
    let b = ImmutableVelocityData::new(Vector3d::new(1.0, 0.0, 0.0));

    assert_eq!(a.facet_id(), b.facet_id());
    assert_ne!(a, b);
    assert_ne!(a.facet_id(), ImmutablePortionData::default().facet_id());
}

/// Test that facets list their keys and values.
#[test]
fn test_keys_and_values() {
    let data = DirectionalData::new(Direction::Down);
    assert_eq!(data.keys(), vec![DIRECTION.id()]);

    let values = data.values();
    let direction = values[0]
        .as_any()
        .downcast_ref::<ImmutableValue<Direction>>()
        .unwrap();
    assert_eq!(*direction.get(), Direction::Down);
}

// =============================================================================
// Double Plants
// =============================================================================

/// Test the double plant facet through the registry and a plant block.
#[test]
fn test_double_plant_facet() {
    let registry = registry();

    let mut plant = registry.create::<DoublePlantData>().unwrap();
    assert_eq!(plant.get(&registry, &DOUBLE_PLANT_TYPE), Some(DoublePlantType::Grass));
    plant.set(&registry, &DOUBLE_PLANT_TYPE, DoublePlantType::Syringa).unwrap();
    assert_eq!(*plant.plant_type_value().get(), DoublePlantType::Syringa);
    assert!(!plant.supports(&registry, &PORTION_TYPE));

    let parsed = DoublePlantData::from_container(&registry, &plant.to_container());
    assert_eq!(parsed, Some(plant.clone()));

    let frozen = ImmutableDoublePlantData::default();
    let rose = frozen.with(&registry, &DOUBLE_PLANT_TYPE, DoublePlantType::Rose).unwrap();
    assert_eq!(rose, Some(ImmutableDoublePlantData::new(DoublePlantType::Rose)));
    assert_eq!(frozen.plant_type(), DoublePlantType::Grass);

    let mut block = BlockState::new(BlockType::DoublePlant);
    assert!(registry.offer(&mut block, &plant, DataPriority::DataManipulator).is_successful());
    assert_eq!(block.plant_type, Some(DoublePlantType::Syringa));
    assert_eq!(registry.get_from::<DoublePlantData>(&block), Some(plant));

    let slab = BlockState::new(BlockType::Slab);
    assert!(registry.get_from::<DoublePlantData>(&slab).is_none());
}

// =============================================================================
// Property Tests
// =============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Test that any velocity written through a facet reads back unchanged,
        /// on both the facet and its snapshot.
        #[test]
        fn test_velocity_set_get(x in -100.0f64..100.0, y in -100.0f64..100.0, z in -100.0f64..100.0) {
            let registry = registry();
            let mut data = VelocityData::default();
            let velocity = Vector3d::new(x, y, z);

            data.set(&registry, &VELOCITY, velocity).unwrap();

            prop_assert_eq!(data.get(&registry, &VELOCITY), Some(velocity));
            prop_assert_eq!(data.as_immutable().get(&registry, &VELOCITY), Some(velocity));
        }

        /// Test that copy-on-write never touches the source facet.
        #[test]
        fn test_with_keeps_source(index in 0usize..4, text in "[a-z]{0,12}") {
            let registry = registry();
            let frozen = ImmutableSignData::new(["w", "x", "y", "z"]);
            let mut lines = frozen.get(&registry, &SIGN_LINES).unwrap();
            lines[index] = text.clone();

            let changed = frozen.with(&registry, &SIGN_LINES, lines).unwrap().unwrap();

            prop_assert_eq!(changed.line(index), Some(text.as_str()));
            prop_assert_eq!(frozen.lines().len(), 4);
            prop_assert_eq!(frozen.line(0), Some("w"));
            prop_assert_eq!(frozen.line(3), Some("z"));
        }
    }
}
