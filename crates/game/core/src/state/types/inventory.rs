//! Inventory storage.
//!
//! Three collections with different rules:
//! - common items: unbounded list, append only, no eviction
//! - weapon slots: exactly [`ArmoryConfig::WEAPON_SLOTS`] positions
//! - gear: one helmet, one vest, one backpack
//!
//! This type only does bookkeeping; the engine drives lifecycle transitions and
//! events around it.

use crate::config::ArmoryConfig;

use super::{GearSlot, ItemId};

/// Where an item sits inside an inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryLocation {
    Common,
    WeaponSlot(usize),
    Gear(GearSlot),
}

/// Outcome of the weapon slot-assignment rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponPlacement {
    /// First empty slot.
    Empty(usize),
    /// Both slots full; replace the weapon currently in hand.
    EvictHeld { slot: usize, occupant: ItemId },
    /// Both slots full, nothing in hand; replace slot 0.
    EvictFirst { occupant: ItemId },
}

impl WeaponPlacement {
    pub fn slot(self) -> usize {
        match self {
            WeaponPlacement::Empty(slot) | WeaponPlacement::EvictHeld { slot, .. } => slot,
            WeaponPlacement::EvictFirst { .. } => 0,
        }
    }

    pub fn occupant(self) -> Option<ItemId> {
        match self {
            WeaponPlacement::Empty(_) => None,
            WeaponPlacement::EvictHeld { occupant, .. } | WeaponPlacement::EvictFirst { occupant } => {
                Some(occupant)
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    common: Vec<ItemId>,
    weapons: [Option<ItemId>; ArmoryConfig::WEAPON_SLOTS],
    gear: [Option<ItemId>; 3],
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn common(&self) -> &[ItemId] {
        &self.common
    }

    pub fn weapon_slots(&self) -> &[Option<ItemId>; ArmoryConfig::WEAPON_SLOTS] {
        &self.weapons
    }

    /// Weapon in `slot`; `None` for an empty or out-of-range slot.
    pub fn weapon_in(&self, slot: usize) -> Option<ItemId> {
        self.weapons.get(slot).copied().flatten()
    }

    pub fn weapon_slot_of(&self, id: ItemId) -> Option<usize> {
        self.weapons.iter().position(|slot| *slot == Some(id))
    }

    pub fn gear(&self, slot: GearSlot) -> Option<ItemId> {
        self.gear[slot.index()]
    }

    pub fn location_of(&self, id: ItemId) -> Option<InventoryLocation> {
        if self.common.contains(&id) {
            return Some(InventoryLocation::Common);
        }
        if let Some(slot) = self.weapon_slot_of(id) {
            return Some(InventoryLocation::WeaponSlot(slot));
        }
        GearSlot::ALL
            .into_iter()
            .find(|slot| self.gear(*slot) == Some(id))
            .map(InventoryLocation::Gear)
    }

    pub fn holds(&self, id: ItemId) -> bool {
        self.location_of(id).is_some()
    }

    /// Every item held by the inventory: common items, weapons, then gear.
    pub fn all(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.common
            .iter()
            .copied()
            .chain(self.weapons.iter().flatten().copied())
            .chain(self.gear.iter().flatten().copied())
    }

    /// Applies the slot-assignment precedence for a new weapon.
    ///
    /// 1. first empty slot
    /// 2. slot of the held weapon
    /// 3. slot 0
    pub fn resolve_weapon_slot(&self, held: Option<ItemId>) -> WeaponPlacement {
        if let Some(slot) = self.weapons.iter().position(Option::is_none) {
            return WeaponPlacement::Empty(slot);
        }
        if let Some(occupant) = held
            && let Some(slot) = self.weapon_slot_of(occupant)
        {
            return WeaponPlacement::EvictHeld { slot, occupant };
        }
        // Only reachable with both slots full and nothing in hand.
        match self.weapons[0] {
            Some(occupant) => WeaponPlacement::EvictFirst { occupant },
            None => WeaponPlacement::Empty(0),
        }
    }

    pub(crate) fn push_common(&mut self, id: ItemId) {
        self.common.push(id);
    }

    pub(crate) fn remove_common(&mut self, id: ItemId) -> bool {
        match self.common.iter().position(|item| *item == id) {
            Some(index) => {
                self.common.remove(index);
                true
            }
            None => false,
        }
    }

    /// Caller guarantees `slot` is in range.
    pub(crate) fn set_weapon_slot(&mut self, slot: usize, item: Option<ItemId>) -> Option<ItemId> {
        std::mem::replace(&mut self.weapons[slot], item)
    }

    pub(crate) fn set_gear(&mut self, slot: GearSlot, item: Option<ItemId>) -> Option<ItemId> {
        std::mem::replace(&mut self.gear[slot.index()], item)
    }

    /// Caller guarantees both slots are in range.
    pub(crate) fn swap_weapon_slots(&mut self, a: usize, b: usize) {
        self.weapons.swap(a, b);
    }
}
