//! Recording service doubles and item fixtures for unit tests.

use std::collections::BTreeMap;

use crate::config::ArmoryConfig;
use crate::engine::{ArmoryEngine, TickOutcome};
use crate::env::{AnimationFlag, AnimationService, CameraService, Env, Layers, Mount, WorldService};
use crate::input::InputSnapshot;
use crate::state::{
    ArmoryState, AttachmentCompat, AttachmentData, AttachmentSpec, ConsumableEffect, GearSlot,
    GripData, HandPose, ItemDefinition, ItemId, ItemSpec, MuzzleData, SightData, Vec3, WeaponClass,
    WeaponData,
};

#[derive(Clone, Debug, PartialEq)]
struct Node {
    position: Vec3,
    visible: bool,
    parent: Option<Mount>,
}

#[derive(Debug, Default)]
pub struct RecordingWorld {
    nodes: BTreeMap<ItemId, Node>,
}

impl RecordingWorld {
    pub fn insert(&mut self, item: ItemId, position: Vec3) {
        self.nodes.insert(
            item,
            Node {
                position,
                visible: true,
                parent: None,
            },
        );
    }

    pub fn is_visible(&self, item: ItemId) -> bool {
        self.nodes.get(&item).is_some_and(|node| node.visible)
    }

    pub fn position(&self, item: ItemId) -> Option<Vec3> {
        self.nodes.get(&item).map(|node| node.position)
    }

    pub fn parent_of(&self, item: ItemId) -> Option<Mount> {
        self.nodes.get(&item).and_then(|node| node.parent)
    }
}

impl WorldService for RecordingWorld {
    fn overlap_sphere(&self, center: Vec3, radius: f32, layers: Layers) -> Vec<ItemId> {
        if !layers.contains(Layers::ITEMS) {
            return Vec::new();
        }
        let mut hits: Vec<(f32, ItemId)> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.visible && node.parent.is_none())
            .map(|(id, node)| (node.position.distance(center), *id))
            .filter(|(distance, _)| *distance <= radius)
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    fn place(&mut self, item: ItemId, position: Vec3) {
        self.nodes.entry(item).or_insert(Node {
            position,
            visible: false,
            parent: None,
        });
        if let Some(node) = self.nodes.get_mut(&item) {
            node.position = position;
        }
    }

    fn set_visible(&mut self, item: ItemId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(&item) {
            node.visible = visible;
        }
    }

    fn parent(&mut self, item: ItemId, mount: Option<Mount>) {
        if let Some(node) = self.nodes.get_mut(&item) {
            node.parent = mount;
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingCamera {
    aim: BTreeMap<ItemId, SightData>,
    priority: BTreeMap<ItemId, bool>,
}

impl RecordingCamera {
    pub fn zoom(&self, weapon: ItemId) -> Option<f32> {
        self.aim.get(&weapon).map(|sight| sight.zoom_fov)
    }

    pub fn has_priority(&self, weapon: ItemId) -> bool {
        self.priority.get(&weapon).copied().unwrap_or(false)
    }
}

impl CameraService for RecordingCamera {
    fn configure_aim(&mut self, weapon: ItemId, sight: SightData) {
        self.aim.insert(weapon, sight);
    }

    fn set_aim_priority(&mut self, weapon: ItemId, active: bool) {
        self.priority.insert(weapon, active);
    }
}

#[derive(Debug, Default)]
pub struct RecordingAnimation {
    flags: BTreeMap<(ItemId, AnimationFlag), bool>,
}

impl RecordingAnimation {
    pub fn flag(&self, item: ItemId, flag: AnimationFlag) -> bool {
        self.flags.get(&(item, flag)).copied().unwrap_or(false)
    }
}

impl AnimationService for RecordingAnimation {
    fn set_flag(&mut self, item: ItemId, flag: AnimationFlag, value: bool) {
        self.flags.insert((item, flag), value);
    }
}

/// State plus recording services, with the hand at the origin facing +Z.
pub struct Harness {
    pub state: ArmoryState,
    pub world: RecordingWorld,
    pub camera: RecordingCamera,
    pub animation: RecordingAnimation,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            state: ArmoryState::new(ArmoryConfig::default()),
            world: RecordingWorld::default(),
            camera: RecordingCamera::default(),
            animation: RecordingAnimation::default(),
        }
    }

    pub fn engine(&mut self) -> ArmoryEngine<'_, '_> {
        ArmoryEngine::new(
            &mut self.state,
            Env::new(&mut self.world, &mut self.camera, &mut self.animation),
        )
    }

    pub fn tick(&mut self, input: InputSnapshot, dt: f32) -> TickOutcome {
        self.engine().tick(&input, dt)
    }

    pub fn spawn(&mut self, definition: ItemDefinition, position: Vec3) -> ItemId {
        let id = self.state.spawn(definition, position);
        self.world.insert(id, position);
        id
    }

    /// Spawns an item far from the hand and collects it.
    pub fn collected(&mut self, definition: ItemDefinition) -> ItemId {
        let id = self.spawn(definition, Vec3::new(100.0, 0.0, 100.0));
        self.engine()
            .try_collect(id)
            .expect("fixture item is collectible");
        id
    }

    pub fn face(&mut self, position: Vec3, forward: Vec3) {
        self.state.set_hand_pose(HandPose::new(position, forward));
    }
}

pub fn rifle_data() -> WeaponData {
    WeaponData::new(WeaponClass::Rifle, SightData::new(60.0, 0.2)).with_compat(AttachmentCompat {
        sights: vec!["rail".into()],
        grips: vec!["rail".into()],
        muzzles: vec!["rail".into()],
    })
}

pub fn rifle(name: &str) -> ItemDefinition {
    ItemDefinition::new(name, ItemSpec::Weapon(rifle_data()))
}

pub fn sight_data(tag: &str, zoom_fov: f32) -> AttachmentData {
    AttachmentData::new(tag, AttachmentSpec::Sight(SightData::new(zoom_fov, 0.15)))
}

pub fn sight(tag: &str, zoom_fov: f32) -> ItemDefinition {
    ItemDefinition::new("sight", ItemSpec::Attachment(sight_data(tag, zoom_fov)))
}

pub fn grip(recoil_reduction: f32) -> ItemDefinition {
    ItemDefinition::new(
        "grip",
        ItemSpec::Attachment(AttachmentData::new(
            "rail",
            AttachmentSpec::Grip(GripData { recoil_reduction }),
        )),
    )
}

pub fn muzzle(flash_reduction: f32, sound_reduction: f32) -> ItemDefinition {
    ItemDefinition::new(
        "muzzle",
        ItemSpec::Attachment(AttachmentData::new(
            "rail",
            AttachmentSpec::Muzzle(MuzzleData {
                flash_reduction,
                sound_reduction,
            }),
        )),
    )
}

pub fn ammo() -> ItemDefinition {
    ItemDefinition::new("ammo", ItemSpec::Common)
}

pub fn helmet() -> ItemDefinition {
    ItemDefinition::new("helmet", ItemSpec::Gear(GearSlot::Helmet))
}

pub fn medkit() -> ItemDefinition {
    ItemDefinition::new(
        "medkit",
        ItemSpec::Consumable(ConsumableEffect::RestoreHealth(50)),
    )
}
