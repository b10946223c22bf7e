//! Item-related state types.
//!
//! This module contains foundational item types:
//! - ItemState: lifecycle position of an item (ground, carried, in hand)
//! - ItemKind: tagged variant carrying the data of each item family
//! - Item: arena entry combining identity, lifecycle and kind

use bitflags::bitflags;

use super::{Attachment, AttachmentData, HandId, ItemId, Vec3, Weapon, WeaponData};

/// Lifecycle state of an item.
///
/// `OnGround → Collected → (Stored | Held) → Dropped → OnGround`
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemState {
    /// Placed in the world at level load (or settled after a drop).
    #[default]
    OnGround,
    /// Picked up and tracked by a holder, not yet filed anywhere.
    Collected,
    /// Filed in an inventory collection.
    Stored,
    /// Stored in a weapon slot and drawn in the hand.
    Held,
    /// Just dropped into the world; settles to `OnGround` on the next tick.
    Dropped,
}

impl ItemState {
    /// True while the item is carried (its position is the holder's).
    pub const fn is_collected(self) -> bool {
        matches!(self, Self::Collected | Self::Stored | Self::Held)
    }

    /// True while the item is independently placed in the world.
    pub const fn is_in_world(self) -> bool {
        matches!(self, Self::OnGround | Self::Dropped)
    }
}

bitflags! {
    /// Operations an item supports, derived from its [`ItemKind`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        const COLLECTIBLE = 1 << 0;
        const STORABLE    = 1 << 1;
        const DROPPABLE   = 1 << 2;
        const USABLE      = 1 << 3;
        const ATTACHABLE  = 1 << 4;
        const HOLDABLE    = 1 << 5;
    }
}

/// Singleton equipment slots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GearSlot {
    Helmet,
    Vest,
    Backpack,
}

impl GearSlot {
    pub const ALL: [GearSlot; 3] = [GearSlot::Helmet, GearSlot::Vest, GearSlot::Backpack];

    pub(crate) const fn index(self) -> usize {
        match self {
            GearSlot::Helmet => 0,
            GearSlot::Vest => 1,
            GearSlot::Backpack => 2,
        }
    }
}

/// Effect applied when an instant-use item is consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableEffect {
    RestoreHealth(u16),
    RestoreArmor(u16),
    Custom(u16),
}

/// Item family with its static data, as written in content files.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSpec {
    /// Plain storable item (ammo box, loot).
    Common,
    Weapon(WeaponData),
    Attachment(AttachmentData),
    Gear(GearSlot),
    /// Used up the moment it is picked.
    Consumable(ConsumableEffect),
}

/// Named item blueprint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub spec: ItemSpec,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, spec: ItemSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

/// Item family with its runtime state.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemKind {
    Common,
    Weapon(Weapon),
    Attachment(Attachment),
    Gear(GearSlot),
    Consumable(ConsumableEffect),
}

impl From<ItemSpec> for ItemKind {
    fn from(spec: ItemSpec) -> Self {
        match spec {
            ItemSpec::Common => ItemKind::Common,
            ItemSpec::Weapon(data) => ItemKind::Weapon(Weapon::new(data)),
            ItemSpec::Attachment(data) => ItemKind::Attachment(Attachment::new(data)),
            ItemSpec::Gear(slot) => ItemKind::Gear(slot),
            ItemSpec::Consumable(effect) => ItemKind::Consumable(effect),
        }
    }
}

impl ItemKind {
    pub fn capabilities(&self) -> Capabilities {
        use Capabilities as C;
        let carried = C::COLLECTIBLE | C::STORABLE | C::DROPPABLE;
        match self {
            ItemKind::Common | ItemKind::Gear(_) => carried,
            ItemKind::Weapon(_) => carried | C::USABLE | C::HOLDABLE,
            ItemKind::Attachment(_) => carried | C::ATTACHABLE,
            ItemKind::Consumable(_) => C::COLLECTIBLE | C::USABLE,
        }
    }

    /// Short family name for logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Common => "common",
            ItemKind::Weapon(_) => "weapon",
            ItemKind::Attachment(_) => "attachment",
            ItemKind::Gear(_) => "gear",
            ItemKind::Consumable(_) => "consumable",
        }
    }
}

/// Arena entry for a single item.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    id: ItemId,
    name: String,
    state: ItemState,
    kind: ItemKind,
    position: Option<Vec3>,
    collector: Option<HandId>,
}

impl Item {
    /// Creates an item lying in the world at `position`.
    pub fn on_ground(id: ItemId, definition: ItemDefinition, position: Vec3) -> Self {
        Self {
            id,
            name: definition.name,
            state: ItemState::OnGround,
            kind: definition.spec.into(),
            position: Some(position),
            collector: None,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    pub fn has(&self, capability: Capabilities) -> bool {
        self.capabilities().contains(capability)
    }

    /// World position; `None` while the item is carried or mounted.
    pub fn position(&self) -> Option<Vec3> {
        self.position
    }

    /// Hand that collected this item.
    pub fn collector(&self) -> Option<HandId> {
        self.collector
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_attachment(&self) -> Option<&Attachment> {
        match &self.kind {
            ItemKind::Attachment(attachment) => Some(attachment),
            _ => None,
        }
    }

    pub(crate) fn as_weapon_mut(&mut self) -> Option<&mut Weapon> {
        match &mut self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub(crate) fn as_attachment_mut(&mut self) -> Option<&mut Attachment> {
        match &mut self.kind {
            ItemKind::Attachment(attachment) => Some(attachment),
            _ => None,
        }
    }

    pub(crate) fn set_state(&mut self, state: ItemState) {
        self.state = state;
    }

    /// Takes the item out of the world into a holder's custody.
    pub(crate) fn pick_up(&mut self, collector: Option<HandId>) {
        self.state = ItemState::Collected;
        self.position = None;
        self.collector = collector;
    }

    /// Releases the item into the world at `position`.
    pub(crate) fn release(&mut self, position: Vec3) {
        self.state = ItemState::Dropped;
        self.position = Some(position);
        self.collector = None;
    }

    /// Restores lifecycle fields captured before a rolled-back transition.
    pub(crate) fn restore(&mut self, state: ItemState, position: Option<Vec3>, collector: Option<HandId>) {
        self.state = state;
        self.position = position;
        self.collector = collector;
    }
}
