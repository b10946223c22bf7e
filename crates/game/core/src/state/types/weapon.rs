//! Weapon types and per-weapon runtime state.

use super::{AttachmentKind, CompatTag, ItemId, SightData};

/// Weapon families; used for display and content validation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponClass {
    #[default]
    Pistol,
    Smg,
    Rifle,
    Shotgun,
    Sniper,
}

/// Per-kind allow-lists of attachment tags a weapon accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttachmentCompat {
    pub sights: Vec<CompatTag>,
    pub grips: Vec<CompatTag>,
    pub muzzles: Vec<CompatTag>,
}

impl AttachmentCompat {
    pub fn allow_list(&self, kind: AttachmentKind) -> &[CompatTag] {
        match kind {
            AttachmentKind::Sight => &self.sights,
            AttachmentKind::Grip => &self.grips,
            AttachmentKind::Muzzle => &self.muzzles,
        }
    }

    pub fn allows(&self, kind: AttachmentKind, tag: &CompatTag) -> bool {
        self.allow_list(kind).contains(tag)
    }
}

/// Static weapon definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub class: WeaponClass,
    #[cfg_attr(feature = "serde", serde(default))]
    pub compat: AttachmentCompat,
    /// Optic used when no sight attachment is mounted.
    pub iron_sight: SightData,
    /// Minimum seconds between shots.
    pub fire_interval: f32,
    /// Recoil added per shot before grip reduction.
    pub recoil_per_shot: f32,
    /// Recoil recovered per second.
    pub recoil_recovery: f32,
}

impl WeaponData {
    pub fn new(class: WeaponClass, iron_sight: SightData) -> Self {
        Self {
            class,
            compat: AttachmentCompat::default(),
            iron_sight,
            fire_interval: 0.1,
            recoil_per_shot: 1.0,
            recoil_recovery: 4.0,
        }
    }

    pub fn with_compat(mut self, compat: AttachmentCompat) -> Self {
        self.compat = compat;
        self
    }

    pub fn with_firing(mut self, fire_interval: f32, recoil_per_shot: f32, recoil_recovery: f32) -> Self {
        self.fire_interval = fire_interval;
        self.recoil_per_shot = recoil_per_shot;
        self.recoil_recovery = recoil_recovery;
        self
    }
}

/// What occupies a weapon's sight slot. Never empty: without a mounted optic
/// the weapon aims through its iron sight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SightMount {
    #[default]
    Iron,
    Mounted(ItemId),
}

impl SightMount {
    pub fn mounted(self) -> Option<ItemId> {
        match self {
            SightMount::Iron => None,
            SightMount::Mounted(id) => Some(id),
        }
    }
}

/// Runtime weapon: definition, attachment slots and timed effects.
#[derive(Clone, Debug, PartialEq)]
pub struct Weapon {
    data: WeaponData,
    sight: SightMount,
    grip: Option<ItemId>,
    muzzle: Option<ItemId>,
    recoil: f32,
    cooldown: f32,
}

impl Weapon {
    pub fn new(data: WeaponData) -> Self {
        Self {
            data,
            sight: SightMount::Iron,
            grip: None,
            muzzle: None,
            recoil: 0.0,
            cooldown: 0.0,
        }
    }

    pub fn data(&self) -> &WeaponData {
        &self.data
    }

    pub fn sight(&self) -> SightMount {
        self.sight
    }

    /// User attachment mounted in the given slot (`None` for the iron sight).
    pub fn slot_for(&self, kind: AttachmentKind) -> Option<ItemId> {
        match kind {
            AttachmentKind::Sight => self.sight.mounted(),
            AttachmentKind::Grip => self.grip,
            AttachmentKind::Muzzle => self.muzzle,
        }
    }

    /// All user attachments currently mounted.
    pub fn mounted(&self) -> impl Iterator<Item = ItemId> + '_ {
        [self.sight.mounted(), self.grip, self.muzzle]
            .into_iter()
            .flatten()
    }

    pub fn recoil(&self) -> f32 {
        self.recoil
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn ready_to_fire(&self) -> bool {
        self.cooldown <= 0.0
    }

    pub(crate) fn set_slot(&mut self, kind: AttachmentKind, attachment: Option<ItemId>) {
        match kind {
            AttachmentKind::Sight => {
                self.sight = attachment.map_or(SightMount::Iron, SightMount::Mounted)
            }
            AttachmentKind::Grip => self.grip = attachment,
            AttachmentKind::Muzzle => self.muzzle = attachment,
        }
    }

    pub(crate) fn register_shot(&mut self, kick: f32) {
        self.recoil += kick;
        self.cooldown = self.data.fire_interval;
    }

    /// Advances recoil recovery and the fire cooldown by `dt` seconds.
    pub(crate) fn advance(&mut self, dt: f32) {
        self.recoil = (self.recoil - self.data.recoil_recovery * dt).max(0.0);
        self.cooldown = (self.cooldown - dt).max(0.0);
    }
}
