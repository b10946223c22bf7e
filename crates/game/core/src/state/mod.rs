//! Authoritative armory state representation.
//!
//! This module owns the data structures that describe items, the inventory and
//! the collecting hand. Hosts query this state freely but mutate it exclusively
//! through the operations in [`crate::engine`].
pub mod types;

pub use types::{
    Attachment, AttachmentCompat, AttachmentData, AttachmentKind, AttachmentSpec, Capabilities,
    CompatTag, ConsumableEffect, GearSlot, GripData, Hand, HandId, HandPose, Inventory,
    InventoryLocation, Item, ItemArena, ItemDefinition, ItemId, ItemKind, ItemSpec, ItemState,
    MuzzleData, SightData, SightMount, Vec3, Weapon, WeaponClass, WeaponData, WeaponPlacement,
};

use crate::config::ArmoryConfig;
use crate::event::ArmoryEvent;

/// Canonical state of one player's armory and the items around them.
#[derive(Clone, Debug, PartialEq)]
pub struct ArmoryState {
    pub(crate) items: ItemArena,
    pub(crate) inventory: Inventory,
    pub(crate) hand: Hand,
    pub(crate) config: ArmoryConfig,
    /// Events emitted since the last drain, in emission order.
    pub(crate) events: Vec<ArmoryEvent>,
}

impl ArmoryState {
    /// Creates an empty state for the player's hand.
    pub fn new(config: ArmoryConfig) -> Self {
        Self::with_hand(HandId::PLAYER, config)
    }

    pub fn with_hand(hand: HandId, config: ArmoryConfig) -> Self {
        Self {
            items: ItemArena::new(),
            inventory: Inventory::empty(),
            hand: Hand::new(hand, config.detection_radius),
            config,
            events: Vec::new(),
        }
    }

    pub fn items(&self) -> &ItemArena {
        &self.items
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn config(&self) -> &ArmoryConfig {
        &self.config
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Places a new item in the world (level load or scripted spawn).
    pub fn spawn(&mut self, definition: ItemDefinition, position: Vec3) -> ItemId {
        let id = self.items.spawn(definition, position);
        tracing::trace!(item = %id, ?position, "spawned item");
        id
    }

    pub fn set_hand_pose(&mut self, pose: HandPose) {
        self.hand.set_pose(pose);
    }

    /// Events emitted since the last drain.
    pub fn pending_events(&self) -> &[ArmoryEvent] {
        &self.events
    }

    /// Takes all pending events, leaving the outbox empty.
    pub fn drain_events(&mut self) -> Vec<ArmoryEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: ArmoryEvent) {
        tracing::debug!(?event, "armory event");
        self.events.push(event);
    }
}

impl Default for ArmoryState {
    fn default() -> Self {
        Self::new(ArmoryConfig::default())
    }
}
