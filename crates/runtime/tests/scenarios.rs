use std::fs;

use armory_content::{LevelLayout, Placement};
use armory_core::{
    ArmoryError, ArmoryEvent, AttachError, AttachmentKind, GearSlot, HandPose, InputSnapshot,
    ItemId, ItemState, Vec3,
};
use armory_runtime::events::drain;
use armory_runtime::scene::DEFAULT_FOV;
use armory_runtime::{Event, Runtime, RuntimeConfig, RuntimeError, Topic};

const FRAME: f32 = 1.0 / 60.0;

/// Builtin catalog with nothing placed in the world.
fn empty_range() -> Runtime {
    Runtime::builder()
        .level(LevelLayout::default())
        .build()
        .expect("builtin content should load")
}

/// Spawns a catalog item in reach and picks it up in one frame.
fn pick(runtime: &mut Runtime, name: &str) -> ItemId {
    let id = runtime
        .spawn_named(name, Vec3::new(0.0, 0.0, 0.5))
        .expect("item should be in the catalog");
    let outcome = runtime.tick(&InputSnapshot::pickup(), FRAME);
    assert_eq!(outcome.picked, Some(id), "{name} should be picked up");
    id
}

fn payloads(events: Vec<Event>) -> Vec<ArmoryEvent> {
    events.into_iter().map(|event| event.payload).collect()
}

/// Firing range walkthrough
///
/// 1. Runtime starts from the embedded catalog and range level
/// 2. Player picks up the carbine, which lands in slot 0 and in hand
/// 3. Player walks to the red dot, picks it up and mounts it
/// 4. Player aims and fires through the mounted sight
#[test]
fn firing_range_walkthrough() {
    println!("\n════════════════════════════════════════════════════════");
    println!("  ARMORY - Firing Range Walkthrough");
    println!("════════════════════════════════════════════════════════\n");

    let mut runtime = Runtime::builder().build().expect("runtime should build");
    assert_eq!(runtime.state().items().len(), 9);

    let mut hand = runtime.subscribe(Topic::Hand);
    let mut inventory = runtime.subscribe(Topic::Inventory);
    let mut attachment = runtime.subscribe(Topic::Attachment);
    let mut combat = runtime.subscribe(Topic::Combat);

    println!("📦 Picking up the carbine");
    let carbine = runtime.find("carbine").expect("range places a carbine");
    let outcome = runtime.tick(&InputSnapshot::pickup(), FRAME);
    assert_eq!(outcome.picked, Some(carbine));
    assert_eq!(runtime.state().inventory().weapon_in(0), Some(carbine));
    assert_eq!(runtime.state().hand().in_hand(), Some(carbine));
    assert!(!runtime.scene().graph.is_visible(carbine));

    let hand_events = drain(&mut hand);
    assert_eq!(hand_events.len(), 1);
    assert_eq!(hand_events[0].frame, 1);
    assert!(
        payloads(drain(&mut inventory))
            .contains(&ArmoryEvent::WeaponAddedToSlot { item: carbine, slot: 0 })
    );

    println!("🔭 Walking to the red dot");
    runtime.set_hand_pose(HandPose::new(Vec3::new(0.0, 0.0, 4.0), Vec3::FORWARD));
    let red_dot = runtime.find("red_dot").expect("range places a red dot");
    let outcome = runtime.tick(&InputSnapshot::pickup(), FRAME);
    assert_eq!(outcome.picked, Some(red_dot));
    assert_eq!(runtime.state().inventory().common(), &[red_dot]);

    runtime
        .apply(|engine| engine.mount_attachment(red_dot, carbine))
        .expect("red dot fits the carbine rail");
    assert!(runtime.state().inventory().common().is_empty());
    assert_eq!(
        payloads(drain(&mut attachment)),
        vec![ArmoryEvent::AttachmentMounted {
            attachment: red_dot,
            weapon: carbine,
            kind: AttachmentKind::Sight,
        }]
    );

    println!("🎯 Aiming and firing");
    let mut aim_and_fire = InputSnapshot::aim();
    aim_and_fire.fire = true;
    let outcome = runtime.tick(&aim_and_fire, FRAME);
    assert_eq!(runtime.scene().camera.current_fov(), 45.0);
    assert_eq!(runtime.scene().camera.active(), Some(carbine));

    let shot = outcome.shot.expect("ready carbine should fire");
    assert_eq!(shot.weapon, carbine);
    assert!((shot.recoil_kick - 1.2).abs() < 1e-6);
    assert_eq!(drain(&mut combat).len(), 1);

    runtime.tick(&InputSnapshot::idle(), FRAME);
    assert_eq!(runtime.scene().camera.current_fov(), DEFAULT_FOV);

    let loadout = runtime.loadout();
    assert_eq!(loadout.weapons[0].sight, "red_dot");
    assert_eq!(loadout.in_hand.as_deref(), Some("carbine"));
    println!("✓ Loadout: {loadout:?}\n");
}

/// Third weapon pickup with both slots full evicts the held weapon.
#[test]
fn full_slots_evict_the_held_weapon() {
    let mut runtime = empty_range();
    let carbine = pick(&mut runtime, "carbine");
    let smg = pick(&mut runtime, "smg");
    assert_eq!(runtime.state().hand().in_hand(), Some(carbine));
    assert_eq!(runtime.state().inventory().weapon_in(1), Some(smg));

    let mut inventory = runtime.subscribe(Topic::Inventory);
    let sidearm = pick(&mut runtime, "sidearm");

    let state = runtime.state();
    assert_eq!(state.inventory().weapon_in(0), Some(sidearm));
    assert_eq!(state.inventory().weapon_in(1), Some(smg));
    assert_eq!(state.hand().in_hand(), Some(sidearm));
    assert_eq!(state.item(carbine).map(|i| i.state()), Some(ItemState::Dropped));

    let events = payloads(drain(&mut inventory));
    assert!(events.contains(&ArmoryEvent::WeaponRemovedFromSlot { item: carbine, slot: 0 }));
    assert!(events.contains(&ArmoryEvent::WeaponAddedToSlot { item: sidearm, slot: 0 }));

    let node = runtime.scene().graph.node(carbine).expect("carbine has a node");
    assert!(node.visible);
    assert_eq!(node.position, Vec3::new(0.0, 0.0, 1.5));

    runtime.tick(&InputSnapshot::idle(), FRAME);
    assert_eq!(
        runtime.state().item(carbine).map(|i| i.state()),
        Some(ItemState::OnGround)
    );
    assert_eq!(runtime.state().hand().nearby(), &[carbine]);
}

/// Mounting a second sight sends the first one back to common items.
#[test]
fn sight_swap_returns_previous_sight() {
    let mut runtime = empty_range();
    let carbine = pick(&mut runtime, "carbine");
    let red_dot = pick(&mut runtime, "red_dot");
    let acog = pick(&mut runtime, "acog");

    runtime
        .apply(|engine| engine.mount_attachment(red_dot, carbine))
        .expect("red dot mounts");
    runtime
        .apply(|engine| engine.mount_attachment(acog, carbine))
        .expect("acog replaces red dot");

    let state = runtime.state();
    assert_eq!(state.inventory().common(), &[red_dot]);
    assert_eq!(
        state.items().attachment(acog).and_then(|a| a.owner()),
        Some(carbine)
    );
    assert_eq!(state.items().attachment(red_dot).and_then(|a| a.owner()), None);
    assert!(state.items().broken_links().is_empty());

    runtime.tick(&InputSnapshot::aim(), FRAME);
    assert_eq!(runtime.scene().camera.current_fov(), 25.0);
}

#[test]
fn incompatible_muzzle_is_rejected() {
    let mut runtime = empty_range();
    let carbine = pick(&mut runtime, "carbine");
    let suppressor = pick(&mut runtime, "suppressor_9mm");
    let mut attachment = runtime.subscribe(Topic::Attachment);

    let result = runtime.apply(|engine| engine.mount_attachment(suppressor, carbine));
    assert!(matches!(
        result,
        Err(ArmoryError::Attach(AttachError::Incompatible { .. }))
    ));
    assert_eq!(runtime.state().inventory().common(), &[suppressor]);
    assert!(drain(&mut attachment).is_empty());
}

/// Consumables are used up on pickup and leave the scene.
#[test]
fn medkit_is_consumed_on_pickup() {
    let mut runtime = empty_range();
    let mut inventory = runtime.subscribe(Topic::Inventory);
    let medkit = pick(&mut runtime, "medkit");

    assert!(runtime.state().item(medkit).is_none());
    assert!(runtime.scene().graph.node(medkit).is_none());
    assert!(runtime.state().inventory().common().is_empty());
    assert!(matches!(
        payloads(drain(&mut inventory)).as_slice(),
        [ArmoryEvent::ItemConsumed { item, .. }] if *item == medkit
    ));
}

#[test]
fn gear_and_common_items_route_to_their_collections() {
    let mut runtime = empty_range();
    let helmet = pick(&mut runtime, "helmet");
    let ammo = pick(&mut runtime, "ammo_box");
    let second_ammo = pick(&mut runtime, "ammo_box");

    let inventory = runtime.state().inventory();
    assert_eq!(inventory.gear(GearSlot::Helmet), Some(helmet));
    assert_eq!(inventory.common(), &[ammo, second_ammo]);
    assert!(runtime.state().hand().is_empty());

    let loadout = runtime.loadout();
    assert_eq!(loadout.gear.len(), 1);
    assert_eq!(loadout.common, vec!["ammo_box", "ammo_box"]);
}

#[test]
fn remove_and_drop_places_item_in_front_of_hand() {
    let mut runtime = empty_range();
    let ammo = pick(&mut runtime, "ammo_box");
    let mut inventory = runtime.subscribe(Topic::Inventory);

    runtime
        .apply(|engine| engine.try_remove_and_drop(ammo))
        .expect("stored ammo can be dropped");

    assert!(runtime.state().inventory().common().is_empty());
    assert_eq!(
        runtime.scene().graph.node(ammo).map(|node| node.position),
        Some(Vec3::new(0.0, 0.0, 1.5))
    );
    let events = payloads(drain(&mut inventory));
    assert_eq!(events.first(), Some(&ArmoryEvent::CommonItemRemoved { item: ammo }));
    assert!(matches!(events.last(), Some(ArmoryEvent::ItemDropped { item, .. }) if *item == ammo));
}

#[test]
fn unknown_names_are_reported() {
    let mut runtime = empty_range();
    assert!(matches!(
        runtime.find("railgun"),
        Err(RuntimeError::UnknownItem { .. })
    ));
    assert!(matches!(
        runtime.spawn_named("railgun", Vec3::ZERO),
        Err(RuntimeError::UnknownItem { .. })
    ));
}

#[test]
fn builder_loads_content_from_paths() {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = dir.path().join("items.ron");
    let level = dir.path().join("level.ron");
    let config = dir.path().join("armory.toml");
    fs::write(&catalog, r#"(items: [(name: "crate", spec: Common)])"#).expect("write catalog");
    fs::write(
        &level,
        r#"(placements: [(item: "crate", position: (x: 0.0, y: 0.0, z: 4.0))])"#,
    )
    .expect("write level");
    fs::write(&config, "detection_radius = 5.0\n").expect("write config");

    let mut runtime_config = RuntimeConfig {
        catalog_path: Some(catalog),
        level_path: Some(level),
        config_path: Some(config),
        ..RuntimeConfig::default()
    };
    runtime_config.overrides.drop_distance = Some(3.0);

    let mut runtime = Runtime::builder()
        .config(runtime_config)
        .build()
        .expect("content should load");
    assert_eq!(runtime.state().config().detection_radius, 5.0);
    assert_eq!(runtime.state().config().drop_distance, 3.0);

    let outcome = runtime.tick(&InputSnapshot::pickup(), FRAME);
    assert!(outcome.picked.is_some());
}

#[test]
fn level_with_unknown_item_fails_to_build() {
    let level = LevelLayout {
        placements: vec![Placement {
            item: "railgun".to_string(),
            position: Vec3::ZERO,
        }],
    };
    let result = Runtime::builder().level(level).build();
    assert!(matches!(result, Err(RuntimeError::Content { what: "level", .. })));
}
