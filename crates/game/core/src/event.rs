//! Notifications emitted by armory operations.
//!
//! Operations append to the state's outbox in the order things happen; the
//! host drains it once per frame and fans the events out.

use crate::state::{AttachmentKind, ConsumableEffect, GearSlot, ItemId, Vec3};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmoryEvent {
    CommonItemAdded {
        item: ItemId,
    },
    CommonItemRemoved {
        item: ItemId,
    },
    WeaponAddedToSlot {
        item: ItemId,
        slot: usize,
    },
    WeaponRemovedFromSlot {
        item: ItemId,
        slot: usize,
    },
    WeaponSlotsSwapped {
        a: usize,
        b: usize,
    },
    GearStored {
        item: ItemId,
        slot: GearSlot,
    },
    GearRemoved {
        item: ItemId,
        slot: GearSlot,
    },
    /// Item in hand changed (`None` = empty hand).
    InHandChanged {
        previous: Option<ItemId>,
        current: Option<ItemId>,
    },
    AttachmentMounted {
        attachment: ItemId,
        weapon: ItemId,
        kind: AttachmentKind,
    },
    AttachmentUnmounted {
        attachment: ItemId,
        weapon: ItemId,
        kind: AttachmentKind,
    },
    ItemDropped {
        item: ItemId,
        position: Vec3,
    },
    WeaponFired {
        weapon: ItemId,
        recoil_kick: f32,
        flash: f32,
        loudness: f32,
    },
    ItemConsumed {
        item: ItemId,
        effect: ConsumableEffect,
    },
}

impl ArmoryEvent {
    /// Short name used for log fields and topic routing.
    pub fn name(&self) -> &'static str {
        match self {
            ArmoryEvent::CommonItemAdded { .. } => "common_item_added",
            ArmoryEvent::CommonItemRemoved { .. } => "common_item_removed",
            ArmoryEvent::WeaponAddedToSlot { .. } => "weapon_added_to_slot",
            ArmoryEvent::WeaponRemovedFromSlot { .. } => "weapon_removed_from_slot",
            ArmoryEvent::WeaponSlotsSwapped { .. } => "weapon_slots_swapped",
            ArmoryEvent::GearStored { .. } => "gear_stored",
            ArmoryEvent::GearRemoved { .. } => "gear_removed",
            ArmoryEvent::InHandChanged { .. } => "in_hand_changed",
            ArmoryEvent::AttachmentMounted { .. } => "attachment_mounted",
            ArmoryEvent::AttachmentUnmounted { .. } => "attachment_unmounted",
            ArmoryEvent::ItemDropped { .. } => "item_dropped",
            ArmoryEvent::WeaponFired { .. } => "weapon_fired",
            ArmoryEvent::ItemConsumed { .. } => "item_consumed",
        }
    }
}
